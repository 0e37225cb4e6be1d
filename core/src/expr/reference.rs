use crate::doc::{DatabaseId, ResourcePath};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// A pointer to a document: the owning database identity plus the full
/// document path. References order by database first, then by path,
/// segment by segment.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize, Hash)]
pub struct Reference {
	pub database: DatabaseId,
	pub path: ResourcePath,
}

impl Reference {
	pub fn new(database: DatabaseId, path: ResourcePath) -> Self {
		Self {
			database,
			path,
		}
	}
}

impl Display for Reference {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "{}:{}", self.database, self.path)
	}
}
