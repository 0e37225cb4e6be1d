//! Object access functions.

use crate::expr::{EvaluateResult, Value};

/// Looks a string key up in an object. An absent key is unset, exactly
/// like a missing field, so `exists` composes over it.
pub fn get(args: Vec<Option<Value>>) -> EvaluateResult {
	match <[Option<Value>; 2]>::try_from(args) {
		Ok([Some(Value::Object(map)), Some(Value::Strand(key))]) => match map.get(key.as_str()) {
			Some(v) => EvaluateResult::value(v.clone()),
			None => EvaluateResult::Unset,
		},
		Ok([None, _]) | Ok([_, None]) => EvaluateResult::Null,
		_ => EvaluateResult::Error,
	}
}
