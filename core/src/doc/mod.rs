//! The document model consumed by pipeline evaluation.

pub(crate) mod key;

pub use self::key::DatabaseId;
pub use self::key::DocumentKey;
pub use self::key::ResourcePath;

use crate::expr::field::FieldPath;
use crate::expr::{Object, Timestamp, Value};
use serde::{Deserialize, Serialize};

/// A single document flowing through a pipeline.
///
/// Every document carries a key and a version. A found document also
/// carries its field map; a missing or unknown document does not, and
/// every field read on it resolves to nothing.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Document {
	key: DocumentKey,
	version: Timestamp,
	data: Option<Object>,
}

impl Document {
	/// Create a document with its field map
	pub fn found(key: DocumentKey, version: Timestamp, data: Object) -> Self {
		Self {
			key,
			version,
			data: Some(data),
		}
	}

	/// Create a document which is known not to exist at this version
	pub fn missing(key: DocumentKey, version: Timestamp) -> Self {
		Self {
			key,
			version,
			data: None,
		}
	}

	pub fn key(&self) -> &DocumentKey {
		&self.key
	}

	pub fn version(&self) -> &Timestamp {
		&self.version
	}

	pub fn data(&self) -> Option<&Object> {
		self.data.as_ref()
	}

	pub fn is_found(&self) -> bool {
		self.data.is_some()
	}

	/// Resolve a dotted field path against the field map.
	///
	/// Path segments only descend through nested objects; applying a
	/// segment to any other value resolves to nothing, as does a segment
	/// which is simply absent. The stored value is returned as is,
	/// including an explicit null.
	pub fn field(&self, path: &FieldPath) -> Option<&Value> {
		let data = self.data.as_ref()?;
		let (first, rest) = path.segments().split_first()?;
		let mut current = data.get(first)?;
		for segment in rest {
			match current {
				Value::Object(v) => current = v.get(segment)?,
				_ => return None,
			}
		}
		Some(current)
	}
}
