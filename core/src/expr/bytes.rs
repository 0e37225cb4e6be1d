use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::ops::Deref;

/// An opaque octet sequence, ordered byte-wise.
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize, Hash)]
#[non_exhaustive]
pub struct Bytes(pub Vec<u8>);

impl Bytes {
	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<Vec<u8>> for Bytes {
	fn from(v: Vec<u8>) -> Self {
		Self(v)
	}
}

impl From<&[u8]> for Bytes {
	fn from(v: &[u8]) -> Self {
		Self(v.to_vec())
	}
}

impl Deref for Bytes {
	type Target = Vec<u8>;
	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Display for Bytes {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.write_str("b\"")?;
		for byte in &self.0 {
			write!(f, "{byte:02X}")?;
		}
		f.write_str("\"")
	}
}
