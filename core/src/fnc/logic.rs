//! Logical operators, conditionals and outcome inspection.
//!
//! Most operators in this module are exempt from the universal
//! propagation rules: they look at the raw outcome of each argument
//! rather than requiring every argument to produce a value.

use crate::ctx::EvaluateContext;
use crate::doc::Document;
use crate::err::Error;
use crate::expr::{EvaluateResult, Expr, Value};
use std::cmp::Ordering;
use std::sync::Arc;

/// True iff every operand is true; false if any operand is false; an
/// error otherwise. A false operand absorbs errors, and all arguments
/// are evaluated.
pub fn and(ctx: &EvaluateContext, doc: &Document, args: &[Arc<Expr>]) -> EvaluateResult {
	let mut errored = false;
	let mut failed = false;
	for arg in args {
		match arg.evaluate(ctx, doc) {
			EvaluateResult::Value(Value::Bool(true)) => {}
			EvaluateResult::Value(Value::Bool(false)) => failed = true,
			_ => errored = true,
		}
	}
	if failed {
		EvaluateResult::value(Value::from(false))
	} else if errored {
		EvaluateResult::Error
	} else {
		EvaluateResult::value(Value::from(true))
	}
}

/// True if any operand is true; false iff every operand is false; an
/// error otherwise. A true operand absorbs errors.
pub fn or(ctx: &EvaluateContext, doc: &Document, args: &[Arc<Expr>]) -> EvaluateResult {
	let mut errored = false;
	let mut succeeded = false;
	for arg in args {
		match arg.evaluate(ctx, doc) {
			EvaluateResult::Value(Value::Bool(true)) => succeeded = true,
			EvaluateResult::Value(Value::Bool(false)) => {}
			_ => errored = true,
		}
	}
	if succeeded {
		EvaluateResult::value(Value::from(true))
	} else if errored {
		EvaluateResult::Error
	} else {
		EvaluateResult::value(Value::from(false))
	}
}

/// True iff an odd number of operands is true. Unlike `and` and `or`,
/// nothing absorbs a non-boolean outcome.
pub fn xor(ctx: &EvaluateContext, doc: &Document, args: &[Arc<Expr>]) -> EvaluateResult {
	let mut parity = false;
	for arg in args {
		match arg.evaluate(ctx, doc) {
			EvaluateResult::Value(Value::Bool(v)) => parity ^= v,
			_ => return EvaluateResult::Error,
		}
	}
	EvaluateResult::value(Value::from(parity))
}

/// Boolean negation; anything which is not a boolean is an error
pub fn not(ctx: &EvaluateContext, doc: &Document, args: &[Arc<Expr>]) -> EvaluateResult {
	match args {
		[arg] => match arg.evaluate(ctx, doc) {
			EvaluateResult::Value(Value::Bool(v)) => EvaluateResult::value(Value::from(!v)),
			_ => EvaluateResult::Error,
		},
		_ => EvaluateResult::Error,
	}
}

/// Evaluates the condition, then exactly one of the two branches. The
/// unselected branch is not evaluated, and the selected branch's
/// outcome passes through untouched.
pub fn cond(ctx: &EvaluateContext, doc: &Document, args: &[Arc<Expr>]) -> EvaluateResult {
	match args {
		[condition, pass, fail] => match condition.evaluate(ctx, doc) {
			EvaluateResult::Value(Value::Bool(true)) => pass.evaluate(ctx, doc),
			EvaluateResult::Value(Value::Bool(false)) => fail.evaluate(ctx, doc),
			_ => EvaluateResult::Error,
		},
		_ => EvaluateResult::Error,
	}
}

/// True iff the argument produced the null literal
pub fn is_null(ctx: &EvaluateContext, doc: &Document, args: &[Arc<Expr>]) -> EvaluateResult {
	match args {
		[arg] => match arg.evaluate(ctx, doc) {
			EvaluateResult::Error | EvaluateResult::Unset => EvaluateResult::Error,
			EvaluateResult::Null => EvaluateResult::value(Value::from(true)),
			EvaluateResult::Value(_) => EvaluateResult::value(Value::from(false)),
		},
		_ => EvaluateResult::Error,
	}
}

pub fn is_not_null(ctx: &EvaluateContext, doc: &Document, args: &[Arc<Expr>]) -> EvaluateResult {
	match is_null(ctx, doc, args) {
		EvaluateResult::Value(Value::Bool(v)) => EvaluateResult::value(Value::from(!v)),
		other => other,
	}
}

/// True iff the argument evaluated to the error outcome. This is the
/// only built-in which swallows errors; an unset argument is not an
/// error and reports false.
pub fn is_error(ctx: &EvaluateContext, doc: &Document, args: &[Arc<Expr>]) -> EvaluateResult {
	match args {
		[arg] => match arg.evaluate(ctx, doc) {
			EvaluateResult::Error => EvaluateResult::value(Value::from(true)),
			_ => EvaluateResult::value(Value::from(false)),
		},
		_ => EvaluateResult::Error,
	}
}

/// True iff the argument resolved to anything at all, the null literal
/// included; false when it is unset; an error when it errored
pub fn exists(ctx: &EvaluateContext, doc: &Document, args: &[Arc<Expr>]) -> EvaluateResult {
	match args {
		[arg] => match arg.evaluate(ctx, doc) {
			EvaluateResult::Error => EvaluateResult::Error,
			EvaluateResult::Unset => EvaluateResult::value(Value::from(false)),
			_ => EvaluateResult::value(Value::from(true)),
		},
		_ => EvaluateResult::Error,
	}
}

/// Largest operand by canonical order. Error and unset operands are
/// skipped entirely; null only surfaces when nothing else remains. NaN
/// sits at the bottom of the numeric class, so it only wins when it is
/// the sole usable operand. Ties keep the earliest operand.
pub fn logical_maximum(ctx: &EvaluateContext, doc: &Document, args: &[Arc<Expr>]) -> EvaluateResult {
	fold(ctx, doc, args, |current, candidate| {
		// The canonical order already ranks NaN below every number
		candidate.cmp(current) == Ordering::Greater
	})
}

/// Smallest operand by canonical order, with NaN treated as the top of
/// the numeric class so that it loses to every other number
pub fn logical_minimum(ctx: &EvaluateContext, doc: &Document, args: &[Arc<Expr>]) -> EvaluateResult {
	fold(ctx, doc, args, |current, candidate| {
		if candidate.is_nan() && current.is_number() {
			return false;
		}
		if current.is_nan() && candidate.is_number() {
			return true;
		}
		candidate.cmp(current) == Ordering::Less
	})
}

fn fold(
	ctx: &EvaluateContext,
	doc: &Document,
	args: &[Arc<Expr>],
	replaces: impl Fn(&Value, &Value) -> bool,
) -> EvaluateResult {
	let mut best: Option<Value> = None;
	let mut seen_null = false;
	for arg in args {
		match arg.evaluate(ctx, doc) {
			EvaluateResult::Error | EvaluateResult::Unset => continue,
			EvaluateResult::Null => seen_null = true,
			EvaluateResult::Value(candidate) => {
				let replace = match &best {
					Some(current) => replaces(current, &candidate),
					None => true,
				};
				if replace {
					best = Some(candidate);
				}
			}
		}
	}
	match best {
		Some(v) => EvaluateResult::value(v),
		None if seen_null => EvaluateResult::Null,
		None => EvaluateResult::Error,
	}
}

/// True iff some element of the list equals the search value, with
/// SQL-style three-valued null handling on both sides
pub fn eq_any(args: Vec<Option<Value>>) -> EvaluateResult {
	match <[Option<Value>; 2]>::try_from(args) {
		Ok([Some(search), Some(Value::Array(values))]) => {
			let mut skipped_null = false;
			for value in values.iter() {
				if value.is_null() {
					skipped_null = true;
				} else if value.equal(&search) {
					return EvaluateResult::value(Value::from(true));
				}
			}
			match skipped_null {
				true => EvaluateResult::Null,
				false => EvaluateResult::value(Value::from(false)),
			}
		}
		Ok([None, _]) => EvaluateResult::Null,
		Ok([Some(_), None]) => EvaluateResult::Null,
		_ => EvaluateResult::Error,
	}
}

/// False iff the search value equals some non-null element of the list;
/// null elements are skipped, and a null search value is null
pub fn not_eq_any(args: Vec<Option<Value>>) -> EvaluateResult {
	match <[Option<Value>; 2]>::try_from(args) {
		Ok([Some(search), Some(Value::Array(values))]) => {
			for value in values.iter() {
				if !value.is_null() && value.equal(&search) {
					return EvaluateResult::value(Value::from(false));
				}
			}
			EvaluateResult::value(Value::from(true))
		}
		Ok([None, _]) => EvaluateResult::Null,
		Ok([Some(_), None]) => EvaluateResult::Null,
		_ => EvaluateResult::Error,
	}
}

/// True iff the value is the double NaN; null passes through
pub fn is_nan(v: Value) -> Result<Value, Error> {
	match v {
		Value::Number(v) => Ok(Value::from(v.is_nan())),
		v => Err(invalid("is_nan", &v)),
	}
}

pub fn is_not_nan(v: Value) -> Result<Value, Error> {
	match v {
		Value::Number(v) => Ok(Value::from(!v.is_nan())),
		v => Err(invalid("is_not_nan", &v)),
	}
}

fn invalid(name: &str, v: &Value) -> Error {
	Error::InvalidArguments {
		name: name.to_owned(),
		message: format!("Expected a number, found {v}"),
	}
}

#[cfg(test)]
mod tests {

	use crate::expr::Value;
	use crate::fnc::test::*;

	#[test]
	fn and_truth_table() {
		assert_value(&f("and", vec![c(true), c(true)]), true);
		assert_value(&f("and", vec![c(true), c(false)]), false);
		assert_value(&f("and", vec![c(false), error()]), false);
		assert_value(&f("and", vec![error(), c(false)]), false);
		assert_error(&f("and", vec![c(true), error()]));
		assert_error(&f("and", vec![error(), error()]));
		assert_error(&f("and", vec![c(true), null()]));
		assert_error(&f("and", vec![c(true), unset()]));
		assert_value(&f("and", vec![c(true), c(true), c(true)]), true);
		assert_value(&f("and", vec![error(), c(true), c(false)]), false);
	}

	#[test]
	fn or_truth_table() {
		assert_value(&f("or", vec![c(false), c(false)]), false);
		assert_value(&f("or", vec![c(false), c(true)]), true);
		assert_value(&f("or", vec![c(true), error()]), true);
		assert_value(&f("or", vec![error(), c(true)]), true);
		assert_error(&f("or", vec![c(false), error()]));
		assert_error(&f("or", vec![c(false), null()]));
		assert_value(&f("or", vec![c(false), c(false), c(true)]), true);
	}

	#[test]
	fn xor_counts_parity() {
		assert_value(&f("xor", vec![c(true), c(false)]), true);
		assert_value(&f("xor", vec![c(true), c(true)]), false);
		assert_value(&f("xor", vec![c(true), c(true), c(true)]), true);
		assert_error(&f("xor", vec![c(true), null()]));
		assert_error(&f("xor", vec![c(true), c(1i64)]));
		assert_error(&f("xor", vec![c(true), error()]));
	}

	#[test]
	fn not_requires_a_boolean() {
		assert_value(&f("not", vec![c(true)]), false);
		assert_value(&f("not", vec![c(false)]), true);
		assert_error(&f("not", vec![c(1i64)]));
		assert_error(&f("not", vec![null()]));
		assert_error(&f("not", vec![error()]));
		assert_error(&f("not", vec![unset()]));
	}

	#[test]
	fn cond_selects_lazily() {
		assert_value(&f("cond", vec![c(true), c("yes"), c("no")]), "yes");
		assert_value(&f("cond", vec![c(false), c("yes"), c("no")]), "no");
		// The unselected branch may be erroneous without consequence
		assert_value(&f("cond", vec![c(true), c("yes"), error()]), "yes");
		assert_error(&f("cond", vec![error(), c("yes"), c("no")]));
		assert_error(&f("cond", vec![null(), c("yes"), c("no")]));
		assert_error(&f("cond", vec![c(1i64), c("yes"), c("no")]));
		// A selected branch's unset outcome passes through
		assert_unset(&f("cond", vec![c(true), unset(), c("no")]));
	}

	#[test]
	fn eq_any_matches_with_coercion() {
		let values = c(vec![Value::from(1i64), Value::from("alice")]);
		assert_value(&f("eq_any", vec![c(1.0), values.clone()]), true);
		assert_value(&f("eq_any", vec![c("alice"), values.clone()]), true);
		assert_value(&f("eq_any", vec![c("bob"), values]), false);
		assert_value(&f("eq_any", vec![c("bob"), c(Vec::<Value>::new())]), false);
	}

	#[test]
	fn eq_any_null_semantics() {
		let values = c(vec![Value::Null, Value::from("alice")]);
		assert_value(&f("eq_any", vec![c("alice"), values.clone()]), true);
		// A miss over a list holding null is unknown
		assert_null(&f("eq_any", vec![c("bob"), values]));
		assert_null(&f("eq_any", vec![null(), c(Vec::<Value>::new())]));
		assert_value(&f("eq_any", vec![c(f64::NAN), c(vec![Value::from(f64::NAN)])]), false);
		// A NaN search never matches, but a skipped null still leaves
		// the miss unknown
		assert_null(&f("eq_any", vec![c(f64::NAN), c(vec![Value::Null, Value::from(5i64)])]));
		assert_error(&f("eq_any", vec![c("bob"), c("not an array")]));
		assert_error(&f("eq_any", vec![unset(), c(Vec::<Value>::new())]));
	}

	#[test]
	fn not_eq_any_skips_nulls() {
		let values = c(vec![Value::Null, Value::from("alice")]);
		assert_value(&f("not_eq_any", vec![c("alice"), values.clone()]), false);
		assert_value(&f("not_eq_any", vec![c("bob"), values]), true);
		assert_null(&f("not_eq_any", vec![null(), c(Vec::<Value>::new())]));
	}

	#[test]
	fn is_null_inspects_the_outcome() {
		assert_value(&f("is_null", vec![null()]), true);
		assert_value(&f("is_null", vec![c(1i64)]), false);
		assert_value(&f("is_null", vec![c(f64::NAN)]), false);
		assert_error(&f("is_null", vec![error()]));
		assert_error(&f("is_null", vec![unset()]));
		assert_value(&f("is_not_null", vec![null()]), false);
		assert_value(&f("is_not_null", vec![c(1i64)]), true);
	}

	#[test]
	fn is_nan_inspects_numbers() {
		assert_value(&f("is_nan", vec![c(f64::NAN)]), true);
		assert_value(&f("is_nan", vec![c(1.0)]), false);
		assert_value(&f("is_nan", vec![c(1i64)]), false);
		assert_null(&f("is_nan", vec![null()]));
		assert_error(&f("is_nan", vec![c("nan")]));
		assert_error(&f("is_nan", vec![unset()]));
		assert_value(&f("is_not_nan", vec![c(f64::NAN)]), false);
		assert_value(&f("is_not_nan", vec![c(1.0)]), true);
	}

	#[test]
	fn is_error_swallows_errors() {
		assert_value(&f("is_error", vec![error()]), true);
		assert_value(&f("is_error", vec![c(42i64)]), false);
		assert_value(&f("is_error", vec![null()]), false);
		// Unset is not an error
		assert_value(&f("is_error", vec![unset()]), false);
		// And the result is itself never an error
		assert_value(&f("is_error", vec![f("is_error", vec![error()]).into()]), false);
	}

	#[test]
	fn exists_detects_unset() {
		assert_value(&f("exists", vec![c(42i64)]), true);
		assert_value(&f("exists", vec![null()]), true);
		assert_value(&f("exists", vec![field("name")]), true);
		assert_value(&f("exists", vec![field("null_value")]), true);
		assert_value(&f("exists", vec![unset()]), false);
		assert_error(&f("exists", vec![error()]));
		assert_value(&f("not", vec![f("exists", vec![unset()]).into()]), true);
	}

	#[test]
	fn logical_maximum_skips_unusable_operands() {
		assert_value(&f("logical_maximum", vec![c(1i64), c(3i64), c(2i64)]), 3i64);
		assert_value(&f("logical_maximum", vec![c(1i64), error(), c(2i64)]), 2i64);
		assert_value(&f("logical_maximum", vec![unset(), c(2i64)]), 2i64);
		assert_value(&f("logical_maximum", vec![null(), c(2i64)]), 2i64);
		assert_null(&f("logical_maximum", vec![null(), error()]));
		assert_error(&f("logical_maximum", vec![error(), unset()]));
		// Values beat NaN, and type order decides across classes
		assert_value(&f("logical_maximum", vec![c(f64::NAN), c(-1.0)]), -1.0);
		assert_value(&f("logical_maximum", vec![c(1i64), c("a")]), "a");
	}

	#[test]
	fn logical_minimum_sinks_nan() {
		assert_value(&f("logical_minimum", vec![c(3i64), c(1i64), c(2i64)]), 1i64);
		assert_value(&f("logical_minimum", vec![c(f64::NAN), c(99.0)]), 99.0);
		let only_nan = eval(&f("logical_minimum", vec![c(f64::NAN), error()]));
		assert!(only_nan.as_value().is_some_and(|v| v.is_nan()));
		assert_value(&f("logical_minimum", vec![c("a"), c(1i64)]), 1i64);
		assert_null(&f("logical_minimum", vec![null()]));
	}

	#[test]
	fn ties_keep_the_earliest_operand() {
		use crate::expr::{EvaluateResult, Number};
		// Int 1 and double 1.0 are equal; the first one offered wins
		let max = eval(&f("logical_maximum", vec![c(1i64), c(1.0)]));
		assert!(matches!(max, EvaluateResult::Value(Value::Number(Number::Int(1)))));
		let min = eval(&f("logical_minimum", vec![c(1.0), c(1i64)]));
		assert!(matches!(min, EvaluateResult::Value(Value::Number(Number::Float(v))) if v == 1.0));
	}
}
