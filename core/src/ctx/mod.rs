//! The context threaded through expression evaluation.

use crate::doc::{DatabaseId, DocumentKey};
use crate::expr::{Reference, Timestamp};

/// Encodes document identity into value space.
///
/// Reference encoding depends on the owning database identity, which is
/// not this crate's concern; the engine only ever talks to this trait.
/// Key comparisons through the `__name__` pseudo-field depend on the
/// implementation round-tripping with the embedder's reference encoding.
pub trait Serializer {
	/// Encode a document key as a reference value
	fn encode_key(&self, key: &DocumentKey) -> Reference;
	/// Encode a document version as a timestamp value
	fn encode_version(&self, version: &Timestamp) -> Timestamp;
}

/// A serializer bound to a single database identity.
#[derive(Clone, Debug)]
pub struct DatabaseSerializer {
	database: DatabaseId,
}

impl DatabaseSerializer {
	pub fn new(database: DatabaseId) -> Self {
		Self {
			database,
		}
	}

	pub fn database(&self) -> &DatabaseId {
		&self.database
	}
}

impl Serializer for DatabaseSerializer {
	fn encode_key(&self, key: &DocumentKey) -> Reference {
		Reference::new(self.database.clone(), key.path().clone())
	}

	fn encode_version(&self, version: &Timestamp) -> Timestamp {
		*version
	}
}

/// Everything an expression needs besides the document it runs against.
/// The serializer is borrowed immutably and never modified.
#[derive(Clone, Copy)]
pub struct EvaluateContext<'a> {
	serializer: &'a dyn Serializer,
}

impl<'a> EvaluateContext<'a> {
	pub fn new(serializer: &'a dyn Serializer) -> Self {
		Self {
			serializer,
		}
	}

	pub fn serializer(&self) -> &dyn Serializer {
		self.serializer
	}
}
