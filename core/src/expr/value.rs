use crate::err::Error;
use crate::expr::{Array, Bytes, GeoPoint, Number, Object, Reference, Strand, Timestamp, Vector};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

/// The rank a value compares at when its type differs from the other
/// side. Ranks are total: any two values of different kinds order by
/// rank alone, regardless of their payloads.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
#[non_exhaustive]
pub enum TypeOrder {
	Null,
	Bool,
	Number,
	Timestamp,
	Strand,
	Bytes,
	Reference,
	Geo,
	Array,
	Vector,
	Object,
}

/// A document value.
///
/// Values form a recursive sum: arrays and objects own their children.
/// The derived ordering of each payload type composes into one canonical
/// total order, shared by sorting and by the range operators.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Value {
	#[default]
	Null,
	Bool(bool),
	Number(Number),
	Timestamp(Timestamp),
	Strand(Strand),
	Bytes(Bytes),
	Reference(Reference),
	Geo(GeoPoint),
	Array(Array),
	Vector(Vector),
	Object(Object),
}

impl Eq for Value {}

impl Ord for Value {
	fn cmp(&self, other: &Self) -> Ordering {
		match (self, other) {
			(Value::Null, Value::Null) => Ordering::Equal,
			(Value::Bool(v), Value::Bool(w)) => v.cmp(w),
			(Value::Number(v), Value::Number(w)) => v.cmp(w),
			(Value::Timestamp(v), Value::Timestamp(w)) => v.cmp(w),
			(Value::Strand(v), Value::Strand(w)) => v.cmp(w),
			(Value::Bytes(v), Value::Bytes(w)) => v.cmp(w),
			(Value::Reference(v), Value::Reference(w)) => v.cmp(w),
			(Value::Geo(v), Value::Geo(w)) => v.cmp(w),
			(Value::Array(v), Value::Array(w)) => v.cmp(w),
			(Value::Vector(v), Value::Vector(w)) => v.cmp(w),
			(Value::Object(v), Value::Object(w)) => v.cmp(w),
			(v, w) => v.type_order().cmp(&w.type_order()),
		}
	}
}

impl PartialOrd for Value {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl PartialEq for Value {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

// -----------------------------------
// Conversions into values
// -----------------------------------

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Bool(v)
	}
}

impl From<Number> for Value {
	fn from(v: Number) -> Self {
		Value::Number(v)
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::Number(Number::Int(v))
	}
}

impl From<i32> for Value {
	fn from(v: i32) -> Self {
		Value::Number(Number::Int(v as i64))
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Value::Number(Number::Float(v))
	}
}

impl From<Strand> for Value {
	fn from(v: Strand) -> Self {
		Value::Strand(v)
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::Strand(v.into())
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::Strand(v.into())
	}
}

impl From<Timestamp> for Value {
	fn from(v: Timestamp) -> Self {
		Value::Timestamp(v)
	}
}

impl From<Bytes> for Value {
	fn from(v: Bytes) -> Self {
		Value::Bytes(v)
	}
}

impl From<Reference> for Value {
	fn from(v: Reference) -> Self {
		Value::Reference(v)
	}
}

impl From<GeoPoint> for Value {
	fn from(v: GeoPoint) -> Self {
		Value::Geo(v)
	}
}

impl From<Array> for Value {
	fn from(v: Array) -> Self {
		Value::Array(v)
	}
}

impl From<Vec<Value>> for Value {
	fn from(v: Vec<Value>) -> Self {
		Value::Array(v.into())
	}
}

impl From<Vector> for Value {
	fn from(v: Vector) -> Self {
		Value::Vector(v)
	}
}

impl From<Object> for Value {
	fn from(v: Object) -> Self {
		Value::Object(v)
	}
}

impl From<BTreeMap<String, Value>> for Value {
	fn from(v: BTreeMap<String, Value>) -> Self {
		Value::Object(v.into())
	}
}

impl<T> From<Option<T>> for Value
where
	T: Into<Value>,
{
	fn from(v: Option<T>) -> Self {
		match v {
			Some(v) => v.into(),
			None => Value::Null,
		}
	}
}

impl Value {
	// -----------------------------------
	// Simple value detection
	// -----------------------------------

	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}

	pub fn is_bool(&self) -> bool {
		matches!(self, Value::Bool(_))
	}

	pub fn is_true(&self) -> bool {
		matches!(self, Value::Bool(true))
	}

	pub fn is_false(&self) -> bool {
		matches!(self, Value::Bool(false))
	}

	pub fn is_number(&self) -> bool {
		matches!(self, Value::Number(_))
	}

	pub fn is_nan(&self) -> bool {
		matches!(self, Value::Number(v) if v.is_nan())
	}

	pub fn is_strand(&self) -> bool {
		matches!(self, Value::Strand(_))
	}

	pub fn is_array(&self) -> bool {
		matches!(self, Value::Array(_))
	}

	pub fn is_object(&self) -> bool {
		matches!(self, Value::Object(_))
	}

	// -----------------------------------
	// Value operations
	// -----------------------------------

	/// The cross-type comparison rank of this value
	pub fn type_order(&self) -> TypeOrder {
		match self {
			Value::Null => TypeOrder::Null,
			Value::Bool(_) => TypeOrder::Bool,
			Value::Number(_) => TypeOrder::Number,
			Value::Timestamp(_) => TypeOrder::Timestamp,
			Value::Strand(_) => TypeOrder::Strand,
			Value::Bytes(_) => TypeOrder::Bytes,
			Value::Reference(_) => TypeOrder::Reference,
			Value::Geo(_) => TypeOrder::Geo,
			Value::Array(_) => TypeOrder::Array,
			Value::Vector(_) => TypeOrder::Vector,
			Value::Object(_) => TypeOrder::Object,
		}
	}

	/// Check if this Value is equal to another Value, as the equality
	/// operators see it. Numbers compare by real value across the two
	/// representations; NaN is equal to nothing, itself included, at any
	/// nesting depth.
	pub fn equal(&self, other: &Value) -> bool {
		match (self, other) {
			(Value::Number(v), Value::Number(w)) => !v.is_nan() && !w.is_nan() && v == w,
			(Value::Array(v), Value::Array(w)) => {
				v.len() == w.len() && v.iter().zip(w.iter()).all(|(v, w)| v.equal(w))
			}
			(Value::Object(v), Value::Object(w)) => {
				v.len() == w.len()
					&& v.iter().zip(w.iter()).all(|((vk, vv), (wk, wv))| vk == wk && vv.equal(wv))
			}
			(Value::Vector(v), Value::Vector(w)) => v.equal(w),
			(v, w) => v == w,
		}
	}
}

// -----------------------------------
// Checked binary operations
// -----------------------------------

pub trait TryAdd<Rhs = Self> {
	type Output;
	fn try_add(self, rhs: Rhs) -> Result<Self::Output, Error>;
}

pub trait TrySub<Rhs = Self> {
	type Output;
	fn try_sub(self, rhs: Rhs) -> Result<Self::Output, Error>;
}

pub trait TryMul<Rhs = Self> {
	type Output;
	fn try_mul(self, rhs: Rhs) -> Result<Self::Output, Error>;
}

pub trait TryDiv<Rhs = Self> {
	type Output;
	fn try_div(self, rhs: Rhs) -> Result<Self::Output, Error>;
}

pub trait TryRem<Rhs = Self> {
	type Output;
	fn try_rem(self, rhs: Rhs) -> Result<Self::Output, Error>;
}

macro_rules! impl_value_try_op {
	($trt:ident, $fn:ident) => {
		impl $trt for Value {
			type Output = Self;
			fn $fn(self, other: Self) -> Result<Self, Error> {
				match (self, other) {
					(Value::Number(v), Value::Number(w)) => Ok(Value::Number(v.$fn(w)?)),
					(v, w) => Err(Error::$trt(v.to_string(), w.to_string())),
				}
			}
		}
	};
}

impl_value_try_op!(TryAdd, try_add);
impl_value_try_op!(TrySub, try_sub);
impl_value_try_op!(TryMul, try_mul);
impl_value_try_op!(TryDiv, try_div);
impl_value_try_op!(TryRem, try_rem);

impl Display for Value {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self {
			Value::Null => f.write_str("null"),
			Value::Bool(v) => Display::fmt(v, f),
			Value::Number(v) => Display::fmt(v, f),
			Value::Timestamp(v) => Display::fmt(v, f),
			Value::Strand(v) => Display::fmt(v, f),
			Value::Bytes(v) => Display::fmt(v, f),
			Value::Reference(v) => Display::fmt(v, f),
			Value::Geo(v) => Display::fmt(v, f),
			Value::Array(v) => Display::fmt(v, f),
			Value::Vector(v) => Display::fmt(v, f),
			Value::Object(v) => Display::fmt(v, f),
		}
	}
}
