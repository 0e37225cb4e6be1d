//! Array membership and shape functions.

use crate::err::Error;
use crate::expr::{Array, EvaluateResult, Value};

pub fn length(v: Value) -> Result<Value, Error> {
	match v {
		Value::Array(v) => Ok(Value::from(v.len() as i64)),
		v => Err(invalid("array_length", &v)),
	}
}

pub fn reverse(v: Value) -> Result<Value, Error> {
	match v {
		Value::Array(mut v) => {
			v.0.reverse();
			Ok(Value::Array(v))
		}
		v => Err(invalid("array_reverse", &v)),
	}
}

/// Three-valued membership: a definite hit is true, a definite miss is
/// false, and a miss that skipped over a null on either side is null.
/// NaN needles never hit.
fn member(arr: &Array, needle: &Value) -> EvaluateResult {
	if needle.is_null() {
		return EvaluateResult::Null;
	}
	let mut skipped_null = false;
	for value in arr.iter() {
		if value.is_null() {
			skipped_null = true;
		} else if value.equal(needle) {
			return EvaluateResult::value(Value::from(true));
		}
	}
	match skipped_null {
		true => EvaluateResult::Null,
		false => EvaluateResult::value(Value::from(false)),
	}
}

pub fn contains(args: Vec<Option<Value>>) -> EvaluateResult {
	match <[Option<Value>; 2]>::try_from(args) {
		Ok([Some(Value::Array(arr)), Some(needle)]) => member(&arr, &needle),
		Ok([Some(Value::Array(_)), None]) | Ok([None, _]) => EvaluateResult::Null,
		_ => EvaluateResult::Error,
	}
}

pub fn contains_all(args: Vec<Option<Value>>) -> EvaluateResult {
	match <[Option<Value>; 2]>::try_from(args) {
		Ok([Some(Value::Array(arr)), Some(Value::Array(needles))]) => {
			let mut unknown = false;
			for needle in needles.iter() {
				match member(&arr, needle) {
					EvaluateResult::Value(Value::Bool(true)) => {}
					EvaluateResult::Value(_) => return EvaluateResult::value(Value::from(false)),
					_ => unknown = true,
				}
			}
			match unknown {
				true => EvaluateResult::Null,
				false => EvaluateResult::value(Value::from(true)),
			}
		}
		Ok([None, _]) | Ok([_, None]) => EvaluateResult::Null,
		_ => EvaluateResult::Error,
	}
}

pub fn contains_any(args: Vec<Option<Value>>) -> EvaluateResult {
	match <[Option<Value>; 2]>::try_from(args) {
		Ok([Some(Value::Array(arr)), Some(Value::Array(needles))]) => {
			let mut unknown = false;
			for needle in needles.iter() {
				match member(&arr, needle) {
					EvaluateResult::Value(Value::Bool(true)) => {
						return EvaluateResult::value(Value::from(true))
					}
					EvaluateResult::Value(_) => {}
					_ => unknown = true,
				}
			}
			match unknown {
				true => EvaluateResult::Null,
				false => EvaluateResult::value(Value::from(false)),
			}
		}
		Ok([None, _]) | Ok([_, None]) => EvaluateResult::Null,
		_ => EvaluateResult::Error,
	}
}

fn invalid(name: &str, v: &Value) -> Error {
	Error::InvalidArguments {
		name: name.to_owned(),
		message: format!("Expected an array, found {v}"),
	}
}

#[cfg(test)]
mod tests {

	use crate::expr::{Expr, Value};
	use crate::fnc::test::*;
	use std::sync::Arc;

	fn arr(values: Vec<Value>) -> Arc<Expr> {
		c(values)
	}

	#[test]
	fn contains_finds_equal_elements() {
		let haystack = arr(vec![Value::from(42i64), Value::from("matang"), Value::from(true)]);
		assert_value(&f("array_contains", vec![haystack.clone(), c("matang")]), true);
		assert_value(&f("array_contains", vec![haystack.clone(), c(42.0)]), true);
		assert_value(&f("array_contains", vec![haystack, c(99i64)]), false);
	}

	#[test]
	fn contains_on_non_array_is_an_error() {
		assert_error(&f("array_contains", vec![c("matang"), c("matang")]));
	}

	#[test]
	fn contains_null_semantics() {
		let with_null = arr(vec![Value::Null, Value::from(1i64)]);
		assert_null(&f("array_contains", vec![with_null.clone(), null()]));
		assert_null(&f("array_contains", vec![arr(vec![]), null()]));
		// A miss which skipped a stored null is unknown, not false
		assert_null(&f("array_contains", vec![with_null, c(2i64)]));
	}

	#[test]
	fn contains_never_matches_nan() {
		let with_nan = arr(vec![Value::from(f64::NAN), Value::from(42.0)]);
		assert_value(&f("array_contains", vec![with_nan, c(f64::NAN)]), false);
	}

	#[test]
	fn contains_all_requires_every_needle() {
		let haystack = arr(vec![
			Value::from("1"),
			Value::from(42i64),
			Value::from(true),
			Value::from("more"),
		]);
		let found = arr(vec![Value::from("1"), Value::from(42.0), Value::from(true)]);
		assert_value(&f("array_contains_all", vec![haystack.clone(), found]), true);
		let missing = arr(vec![Value::from("1"), Value::from(99i64)]);
		assert_value(&f("array_contains_all", vec![haystack.clone(), missing]), false);
		// An empty needle list holds vacuously, even over an empty array
		assert_value(&f("array_contains_all", vec![haystack, arr(vec![])]), true);
		assert_value(&f("array_contains_all", vec![arr(vec![]), arr(vec![])]), true);
		let needles = arr(vec![Value::from(42.0)]);
		assert_value(&f("array_contains_all", vec![arr(vec![]), needles]), false);
	}

	#[test]
	fn contains_all_nan_needle_fails() {
		let haystack = arr(vec![Value::from(f64::NAN), Value::from(42.0)]);
		let needles = arr(vec![Value::from(f64::NAN)]);
		assert_value(&f("array_contains_all", vec![haystack, needles]), false);
	}

	#[test]
	fn contains_any_finds_one_match() {
		let haystack = arr(vec![Value::from(42i64), Value::from("matang"), Value::from(true)]);
		let hit = arr(vec![Value::from("matang"), Value::from(false)]);
		assert_value(&f("array_contains_any", vec![haystack.clone(), hit]), true);
		let coerced = arr(vec![Value::from(42.0), Value::from(2i64)]);
		assert_value(&f("array_contains_any", vec![haystack.clone(), coerced]), true);
		let miss = arr(vec![Value::from(99i64), Value::from("false")]);
		assert_value(&f("array_contains_any", vec![haystack, miss]), false);
	}

	#[test]
	fn contains_any_null_needle_is_unknown() {
		let haystack = arr(vec![Value::Null, Value::from(1i64), Value::from("matang")]);
		let needles = arr(vec![Value::Null]);
		assert_null(&f("array_contains_any", vec![haystack, needles]));
	}

	#[test]
	fn length_and_reverse() {
		let values = arr(vec![Value::from(1i64), Value::from(2i64), Value::from(3i64)]);
		assert_value(&f("array_length", vec![values.clone()]), 3i64);
		assert_value(&f("array_length", vec![arr(vec![])]), 0i64);
		assert_error(&f("array_length", vec![c("not an array")]));
		assert_null(&f("array_length", vec![null()]));
		assert_value(
			&f("array_reverse", vec![values]),
			vec![Value::from(3i64), Value::from(2i64), Value::from(1i64)],
		);
		assert_error(&f("array_reverse", vec![c(1i64)]));
	}

	#[test]
	fn errors_dominate() {
		assert_error(&f("array_contains", vec![error(), c(1i64)]));
		assert_error(&f("array_contains_any", vec![unset(), c(1i64)]));
	}
}
