use crate::expr::number::total_cmp_f64;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

/// A geographical point, ordered as a (latitude, longitude) tuple.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub struct GeoPoint {
	pub latitude: f64,
	pub longitude: f64,
}

impl GeoPoint {
	pub fn new(latitude: f64, longitude: f64) -> Self {
		Self {
			latitude,
			longitude,
		}
	}
}

impl From<(f64, f64)> for GeoPoint {
	fn from((latitude, longitude): (f64, f64)) -> Self {
		Self::new(latitude, longitude)
	}
}

impl Eq for GeoPoint {}

impl PartialEq for GeoPoint {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl Ord for GeoPoint {
	fn cmp(&self, other: &Self) -> Ordering {
		total_cmp_f64(self.latitude, other.latitude)
			.then_with(|| total_cmp_f64(self.longitude, other.longitude))
	}
}

impl PartialOrd for GeoPoint {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Display for GeoPoint {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "({}, {})", self.latitude, self.longitude)
	}
}
