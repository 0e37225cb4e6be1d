use crate::expr::number::total_cmp_f64;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

/// A fixed-dimension numeric vector.
///
/// Vectors are their own comparison class, between arrays and objects:
/// they order by dimension first, then element-wise.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Vector(pub Vec<f64>);

impl Vector {
	pub fn dimension(&self) -> usize {
		self.0.len()
	}

	/// Element-wise equality as the equality operators see it: a NaN
	/// component is equal to nothing.
	pub(crate) fn equal(&self, other: &Vector) -> bool {
		self.0.len() == other.0.len()
			&& self.0.iter().zip(other.0.iter()).all(|(a, b)| !a.is_nan() && !b.is_nan() && a == b)
	}
}

impl From<Vec<f64>> for Vector {
	fn from(v: Vec<f64>) -> Self {
		Self(v)
	}
}

impl Eq for Vector {}

impl PartialEq for Vector {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl Ord for Vector {
	fn cmp(&self, other: &Self) -> Ordering {
		match self.0.len().cmp(&other.0.len()) {
			Ordering::Equal => {
				for (a, b) in self.0.iter().zip(other.0.iter()) {
					match total_cmp_f64(*a, *b) {
						Ordering::Equal => continue,
						ordering => return ordering,
					}
				}
				Ordering::Equal
			}
			ordering => ordering,
		}
	}
}

impl PartialOrd for Vector {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Display for Vector {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.write_str("vector[")?;
		for (i, v) in self.0.iter().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{v}")?;
		}
		f.write_str("]")
	}
}
