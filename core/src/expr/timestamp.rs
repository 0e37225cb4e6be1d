use crate::err::Error;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

pub(crate) const NANOS_PER_SEC: i64 = 1_000_000_000;

/// A point in time with nanosecond precision.
///
/// Timestamps cover the years 0001 through 9999: seconds since the unix
/// epoch in `[-62135596800, 253402300799]` with a nanosecond component in
/// `[0, 999999999]`. Construction validates the domain, so every held
/// value is in range.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize, Hash)]
pub struct Timestamp {
	seconds: i64,
	nanos: i32,
}

impl Timestamp {
	pub const MIN_SECONDS: i64 = -62_135_596_800;
	pub const MAX_SECONDS: i64 = 253_402_300_799;

	pub fn new(seconds: i64, nanos: i32) -> Result<Self, Error> {
		if !(Self::MIN_SECONDS..=Self::MAX_SECONDS).contains(&seconds)
			|| !(0..NANOS_PER_SEC as i32).contains(&nanos)
		{
			return Err(Error::TimestampOutOfRange(seconds, nanos));
		}
		Ok(Self {
			seconds,
			nanos,
		})
	}

	pub fn from_unix_seconds(seconds: i64) -> Result<Self, Error> {
		Self::new(seconds, 0)
	}

	pub fn from_unix_millis(millis: i64) -> Result<Self, Error> {
		Self::new(millis.div_euclid(1_000), (millis.rem_euclid(1_000) * 1_000_000) as i32)
	}

	pub fn from_unix_micros(micros: i64) -> Result<Self, Error> {
		Self::new(micros.div_euclid(1_000_000), (micros.rem_euclid(1_000_000) * 1_000) as i32)
	}

	pub fn seconds(&self) -> i64 {
		self.seconds
	}

	pub fn nanos(&self) -> i32 {
		self.nanos
	}

	/// Whole seconds since the unix epoch, sub-second precision dropped
	pub fn to_unix_seconds(&self) -> i64 {
		self.seconds
	}

	/// Milliseconds since the unix epoch, sub-millisecond precision dropped
	pub fn to_unix_millis(&self) -> i64 {
		self.seconds * 1_000 + (self.nanos / 1_000_000) as i64
	}

	/// Microseconds since the unix epoch, sub-microsecond precision dropped
	pub fn to_unix_micros(&self) -> i64 {
		self.seconds * 1_000_000 + (self.nanos / 1_000) as i64
	}

	/// Shift this timestamp by a number of nanoseconds, erroring when the
	/// result leaves the representable domain
	pub fn checked_add_nanos(&self, delta: i128) -> Result<Self, Error> {
		let total = self.seconds as i128 * NANOS_PER_SEC as i128 + self.nanos as i128 + delta;
		let seconds = total.div_euclid(NANOS_PER_SEC as i128);
		let nanos = total.rem_euclid(NANOS_PER_SEC as i128) as i32;
		match i64::try_from(seconds) {
			Ok(seconds) => Self::new(seconds, nanos),
			Err(_) => Err(Error::TimestampOutOfRange(self.seconds, self.nanos)),
		}
	}

	pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
		DateTime::from_timestamp(self.seconds, self.nanos as u32)
	}
}

impl TryFrom<DateTime<Utc>> for Timestamp {
	type Error = Error;
	fn try_from(v: DateTime<Utc>) -> Result<Self, Self::Error> {
		Self::new(v.timestamp(), v.timestamp_subsec_nanos() as i32)
	}
}

impl Display for Timestamp {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self.to_datetime() {
			Some(v) => f.write_str(&v.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
			None => write!(f, "{}s {}ns", self.seconds, self.nanos),
		}
	}
}
