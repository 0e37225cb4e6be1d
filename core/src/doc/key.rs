use crate::err::Error;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// A slash-separated path into the document tree.
///
/// Paths order segment by segment, so `users` sorts before `users/bob`
/// which sorts before `users0`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize, Hash)]
#[non_exhaustive]
pub struct ResourcePath(Vec<String>);

impl ResourcePath {
	/// Create a path from raw segments
	pub fn new(segments: Vec<String>) -> Self {
		Self(segments)
	}

	/// Parse a path from its slash-separated form
	pub fn parse(path: &str) -> Result<Self, Error> {
		if path.is_empty() {
			return Ok(Self::default());
		}
		let segments: Vec<String> = path.split('/').map(str::to_owned).collect();
		if segments.iter().any(String::is_empty) {
			return Err(Error::InvalidPath(path.to_owned()));
		}
		Ok(Self(segments))
	}

	pub fn segments(&self) -> &[String] {
		&self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn last(&self) -> Option<&str> {
		self.0.last().map(String::as_str)
	}

	/// The path with its final segment removed
	pub fn parent(&self) -> ResourcePath {
		let mut segments = self.0.clone();
		segments.pop();
		ResourcePath(segments)
	}

	/// The path extended by one segment
	pub fn child(&self, segment: impl Into<String>) -> ResourcePath {
		let mut segments = self.0.clone();
		segments.push(segment.into());
		ResourcePath(segments)
	}
}

impl Display for ResourcePath {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.write_str(&self.0.join("/"))
	}
}

/// The unique key of a document: a resource path with an even number of
/// segments, alternating collection id and document id.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize, Hash)]
pub struct DocumentKey(ResourcePath);

impl DocumentKey {
	pub fn new(path: ResourcePath) -> Result<Self, Error> {
		// Keys alternate collection id and document id, so they always
		// carry an even, non-zero number of segments.
		if path.is_empty() || path.len() % 2 != 0 {
			return Err(Error::InvalidPath(path.to_string()));
		}
		Ok(Self(path))
	}

	pub fn parse(path: &str) -> Result<Self, Error> {
		Self::new(ResourcePath::parse(path)?)
	}

	pub fn path(&self) -> &ResourcePath {
		&self.0
	}

	/// The collection path which contains this document
	pub fn parent(&self) -> ResourcePath {
		self.0.parent()
	}

	/// The id of the collection which contains this document
	pub fn collection_id(&self) -> &str {
		&self.0.segments()[self.0.len() - 2]
	}

	/// The final segment of the key
	pub fn document_id(&self) -> &str {
		&self.0.segments()[self.0.len() - 1]
	}
}

impl Display for DocumentKey {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

/// The identity of a database, which scopes every document reference
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize, Hash)]
pub struct DatabaseId {
	project: String,
	database: String,
}

impl DatabaseId {
	pub fn new(project: impl Into<String>, database: impl Into<String>) -> Self {
		Self {
			project: project.into(),
			database: database.into(),
		}
	}

	pub fn project(&self) -> &str {
		&self.project
	}

	pub fn database(&self) -> &str {
		&self.database
	}
}

impl Display for DatabaseId {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "{}/{}", self.project, self.database)
	}
}
