use crate::err::Error;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// The field name under which a document's key is addressable
pub const KEY_FIELD: &str = "__name__";

/// The field name under which a document's version is addressable
pub const UPDATE_TIME_FIELD: &str = "__update_time__";

/// A dotted path into a document's field map.
///
/// The two pseudo-fields above are intercepted by the evaluator and
/// synthesized from the document key and version; they are never read
/// from the field map, and stored entries under those names are ignored.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize, Hash)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
	pub fn new(segments: Vec<String>) -> Result<Self, Error> {
		if segments.is_empty() || segments.iter().any(String::is_empty) {
			return Err(Error::InvalidPath(segments.join(".")));
		}
		Ok(Self(segments))
	}

	/// Parse a path from its dotted form
	pub fn parse(path: &str) -> Result<Self, Error> {
		Self::new(path.split('.').map(str::to_owned).collect())
	}

	/// The path of the key pseudo-field
	pub fn key() -> Self {
		Self(vec![KEY_FIELD.to_owned()])
	}

	/// The path of the version pseudo-field
	pub fn update_time() -> Self {
		Self(vec![UPDATE_TIME_FIELD.to_owned()])
	}

	pub fn segments(&self) -> &[String] {
		&self.0
	}

	pub fn is_key(&self) -> bool {
		matches!(self.0.as_slice(), [segment] if segment == KEY_FIELD)
	}

	pub fn is_update_time(&self) -> bool {
		matches!(self.0.as_slice(), [segment] if segment == UPDATE_TIME_FIELD)
	}
}

impl Display for FieldPath {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.write_str(&self.0.join("."))
	}
}

#[cfg(test)]
mod tests {

	use super::*;

	#[test]
	fn parses_dotted_paths() {
		let path = FieldPath::parse("address.city").unwrap();
		assert_eq!(path.segments(), ["address", "city"]);
		assert!(FieldPath::parse("").is_err());
		assert!(FieldPath::parse("a..b").is_err());
	}

	#[test]
	fn detects_pseudo_fields() {
		assert!(FieldPath::parse("__name__").unwrap().is_key());
		assert!(FieldPath::parse("__update_time__").unwrap().is_update_time());
		// Only a bare pseudo-field name counts
		assert!(!FieldPath::parse("a.__name__").unwrap().is_key());
	}
}
