//! Executes the built-in pipeline functions.

use crate::ctx::EvaluateContext;
use crate::doc::Document;
use crate::err::Error;
use crate::expr::{EvaluateResult, Expr, Value};
use std::sync::Arc;

pub mod array;
pub mod logic;
pub mod map;
pub mod operate;
pub mod string;
pub mod time;

/// Attempts to run any function against the current document.
///
/// The logical operators inspect the raw outcome of each argument and
/// are dispatched with their unevaluated argument expressions. Every
/// other function goes through the strict path: arguments evaluate left
/// to right, any error or unset argument is an error, and the remaining
/// null handling depends on the function family.
pub fn run(
	ctx: &EvaluateContext,
	doc: &Document,
	name: &str,
	args: &[Arc<Expr>],
) -> EvaluateResult {
	match name {
		"and" => logic::and(ctx, doc, args),
		"or" => logic::or(ctx, doc, args),
		"xor" => logic::xor(ctx, doc, args),
		"not" => logic::not(ctx, doc, args),
		"cond" => logic::cond(ctx, doc, args),
		"is_null" => logic::is_null(ctx, doc, args),
		"is_not_null" => logic::is_not_null(ctx, doc, args),
		"is_error" => logic::is_error(ctx, doc, args),
		"exists" => logic::exists(ctx, doc, args),
		"logical_maximum" => logic::logical_maximum(ctx, doc, args),
		"logical_minimum" => logic::logical_minimum(ctx, doc, args),
		_ => match evaluate_args(ctx, doc, args) {
			Ok(args) => dispatch(name, args),
			Err(result) => result,
		},
	}
}

/// An argument which survived strict evaluation: the null literal or a
/// non-null value
type Operand = Option<Value>;

fn evaluate_args(
	ctx: &EvaluateContext,
	doc: &Document,
	args: &[Arc<Expr>],
) -> Result<Vec<Operand>, EvaluateResult> {
	let mut operands = Vec::with_capacity(args.len());
	for arg in args {
		match arg.evaluate(ctx, doc) {
			EvaluateResult::Error | EvaluateResult::Unset => return Err(EvaluateResult::Error),
			EvaluateResult::Null => operands.push(None),
			EvaluateResult::Value(v) => operands.push(Some(v)),
		}
	}
	Ok(operands)
}

fn dispatch(name: &str, args: Vec<Operand>) -> EvaluateResult {
	match name {
		"add" => arithmetic(args, operate::add),
		"subtract" => arithmetic(args, operate::subtract),
		"multiply" => arithmetic(args, operate::multiply),
		"divide" => arithmetic(args, operate::divide),
		"mod" => arithmetic(args, operate::modulo),
		"eq" => comparison(args, operate::eq),
		"neq" => comparison(args, operate::neq),
		"lt" => comparison(args, operate::lt),
		"lte" => comparison(args, operate::lte),
		"gt" => comparison(args, operate::gt),
		"gte" => comparison(args, operate::gte),
		"array_contains" => array::contains(args),
		"array_contains_all" => array::contains_all(args),
		"array_contains_any" => array::contains_any(args),
		"array_length" => unary(args, array::length),
		"array_reverse" => unary(args, array::reverse),
		"eq_any" => logic::eq_any(args),
		"not_eq_any" => logic::not_eq_any(args),
		"is_nan" => unary(args, logic::is_nan),
		"is_not_nan" => unary(args, logic::is_not_nan),
		"map_get" => map::get(args),
		"char_length" => unary(args, string::char_length),
		"byte_length" => unary(args, string::byte_length),
		"to_lower" => unary(args, string::to_lower),
		"to_upper" => unary(args, string::to_upper),
		"reverse" => unary(args, string::reverse),
		"trim" => unary(args, string::trim),
		"like" => binary(args, string::like),
		"regex_contains" => binary(args, string::regex_contains),
		"regex_match" => binary(args, string::regex_match),
		"str_contains" => binary(args, string::contains),
		"starts_with" => binary(args, string::starts_with),
		"ends_with" => binary(args, string::ends_with),
		"str_concat" => string::concat(args),
		"unix_seconds_to_timestamp" => unary(args, time::unix_seconds_to_timestamp),
		"unix_millis_to_timestamp" => unary(args, time::unix_millis_to_timestamp),
		"unix_micros_to_timestamp" => unary(args, time::unix_micros_to_timestamp),
		"timestamp_to_unix_seconds" => unary(args, time::timestamp_to_unix_seconds),
		"timestamp_to_unix_millis" => unary(args, time::timestamp_to_unix_millis),
		"timestamp_to_unix_micros" => unary(args, time::timestamp_to_unix_micros),
		"timestamp_add" => time::timestamp_add(args),
		_ => {
			trace!("No such function '{name}'");
			EvaluateResult::Error
		}
	}
}

/// Converts an internal fallible computation into an outcome
pub(crate) fn outcome(result: Result<Value, Error>) -> EvaluateResult {
	match result {
		Ok(v) => EvaluateResult::value(v),
		Err(e) => {
			trace!("Expression evaluation failed: {e}");
			EvaluateResult::Error
		}
	}
}

/// Applies a null-preserving unary function
fn unary(args: Vec<Operand>, f: impl FnOnce(Value) -> Result<Value, Error>) -> EvaluateResult {
	match <[Operand; 1]>::try_from(args) {
		Ok([Some(v)]) => outcome(f(v)),
		Ok([None]) => EvaluateResult::Null,
		Err(_) => EvaluateResult::Error,
	}
}

/// Applies a binary function which is null only when both operands are
/// null; a single null operand is a type error
fn binary(
	args: Vec<Operand>,
	f: impl FnOnce(Value, Value) -> Result<Value, Error>,
) -> EvaluateResult {
	match <[Operand; 2]>::try_from(args) {
		Ok([Some(a), Some(b)]) => outcome(f(a, b)),
		Ok([None, None]) => EvaluateResult::Null,
		Ok(_) => EvaluateResult::Error,
		Err(_) => EvaluateResult::Error,
	}
}

/// Arithmetic shares the mixed-null rule with the other binary functions
fn arithmetic(
	args: Vec<Operand>,
	f: impl FnOnce(Value, Value) -> Result<Value, Error>,
) -> EvaluateResult {
	binary(args, f)
}

/// Applies a comparison, which degrades to null when either side is null
fn comparison(args: Vec<Operand>, f: impl FnOnce(&Value, &Value) -> bool) -> EvaluateResult {
	match <[Operand; 2]>::try_from(args) {
		Ok([Some(a), Some(b)]) => EvaluateResult::value(Value::from(f(&a, &b))),
		Ok(_) => EvaluateResult::Null,
		Err(_) => EvaluateResult::Error,
	}
}
