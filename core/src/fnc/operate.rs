//! Arithmetic and comparison operators over values.

use crate::err::Error;
use crate::expr::{TryAdd, TryDiv, TryMul, TryRem, TrySub, Value};
use std::cmp::Ordering;

pub fn add(a: Value, b: Value) -> Result<Value, Error> {
	a.try_add(b)
}

pub fn subtract(a: Value, b: Value) -> Result<Value, Error> {
	a.try_sub(b)
}

pub fn multiply(a: Value, b: Value) -> Result<Value, Error> {
	a.try_mul(b)
}

pub fn divide(a: Value, b: Value) -> Result<Value, Error> {
	a.try_div(b)
}

pub fn modulo(a: Value, b: Value) -> Result<Value, Error> {
	a.try_rem(b)
}

/// Equality as the `eq` operator sees it: values of different ranks are
/// simply unequal, and NaN matches nothing
pub fn eq(a: &Value, b: &Value) -> bool {
	a.type_order() == b.type_order() && !a.is_nan() && !b.is_nan() && a.equal(b)
}

pub fn neq(a: &Value, b: &Value) -> bool {
	!eq(a, b)
}

/// The range operators only relate values of the same rank, and never
/// relate NaN to anything
fn ordered(a: &Value, b: &Value, test: fn(Ordering) -> bool) -> bool {
	a.type_order() == b.type_order() && !a.is_nan() && !b.is_nan() && test(a.cmp(b))
}

pub fn lt(a: &Value, b: &Value) -> bool {
	ordered(a, b, Ordering::is_lt)
}

pub fn lte(a: &Value, b: &Value) -> bool {
	ordered(a, b, Ordering::is_le)
}

pub fn gt(a: &Value, b: &Value) -> bool {
	ordered(a, b, Ordering::is_gt)
}

pub fn gte(a: &Value, b: &Value) -> bool {
	ordered(a, b, Ordering::is_ge)
}
