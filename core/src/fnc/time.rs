//! Timestamp construction, conversion and calendar arithmetic.

use crate::err::Error;
use crate::expr::timestamp::NANOS_PER_SEC;
use crate::expr::{EvaluateResult, Number, Timestamp, Value};

pub fn unix_seconds_to_timestamp(v: Value) -> Result<Value, Error> {
	Ok(Value::from(Timestamp::from_unix_seconds(integer("unix_seconds_to_timestamp", v)?)?))
}

pub fn unix_millis_to_timestamp(v: Value) -> Result<Value, Error> {
	Ok(Value::from(Timestamp::from_unix_millis(integer("unix_millis_to_timestamp", v)?)?))
}

pub fn unix_micros_to_timestamp(v: Value) -> Result<Value, Error> {
	Ok(Value::from(Timestamp::from_unix_micros(integer("unix_micros_to_timestamp", v)?)?))
}

pub fn timestamp_to_unix_seconds(v: Value) -> Result<Value, Error> {
	Ok(Value::from(timestamp("timestamp_to_unix_seconds", v)?.to_unix_seconds()))
}

pub fn timestamp_to_unix_millis(v: Value) -> Result<Value, Error> {
	Ok(Value::from(timestamp("timestamp_to_unix_millis", v)?.to_unix_millis()))
}

pub fn timestamp_to_unix_micros(v: Value) -> Result<Value, Error> {
	Ok(Value::from(timestamp("timestamp_to_unix_micros", v)?.to_unix_micros()))
}

/// Shifts a timestamp by an integral amount of a named calendar unit.
/// Any null argument is null; an unknown unit, a non-integral amount or
/// a result outside the timestamp domain is an error.
pub fn timestamp_add(args: Vec<Option<Value>>) -> EvaluateResult {
	match <[Option<Value>; 3]>::try_from(args) {
		Ok([Some(ts), Some(unit), Some(amount)]) => super::outcome(add(ts, unit, amount)),
		Ok(_) => EvaluateResult::Null,
		Err(_) => EvaluateResult::Error,
	}
}

fn add(ts: Value, unit: Value, amount: Value) -> Result<Value, Error> {
	let ts = timestamp("timestamp_add", ts)?;
	let unit_nanos = match unit {
		Value::Strand(unit) => match unit.as_str() {
			"microsecond" => 1_000i128,
			"millisecond" => 1_000_000i128,
			"second" => NANOS_PER_SEC as i128,
			"minute" => 60 * NANOS_PER_SEC as i128,
			"hour" => 3_600 * NANOS_PER_SEC as i128,
			"day" => 86_400 * NANOS_PER_SEC as i128,
			unit => {
				return Err(Error::InvalidArguments {
					name: "timestamp_add".to_owned(),
					message: format!("Unknown time unit '{unit}'"),
				})
			}
		},
		v => {
			return Err(Error::InvalidArguments {
				name: "timestamp_add".to_owned(),
				message: format!("Expected a time unit string, found {v}"),
			})
		}
	};
	let amount = integer("timestamp_add", amount)?;
	Ok(Value::from(ts.checked_add_nanos(amount as i128 * unit_nanos)?))
}

fn integer(name: &str, v: Value) -> Result<i64, Error> {
	match v {
		Value::Number(Number::Int(v)) => Ok(v),
		v => Err(Error::InvalidArguments {
			name: name.to_owned(),
			message: format!("Expected an integer, found {v}"),
		}),
	}
}

fn timestamp(name: &str, v: Value) -> Result<Timestamp, Error> {
	match v {
		Value::Timestamp(v) => Ok(v),
		v => Err(Error::InvalidArguments {
			name: name.to_owned(),
			message: format!("Expected a timestamp, found {v}"),
		}),
	}
}

#[cfg(test)]
mod tests {

	use crate::expr::Timestamp;
	use crate::fnc::test::*;

	fn ts(seconds: i64, nanos: i32) -> Timestamp {
		Timestamp::new(seconds, nanos).unwrap()
	}

	#[test]
	fn conversions_from_unix_counters() {
		assert_value(&f("unix_seconds_to_timestamp", vec![c(0i64)]), ts(0, 0));
		assert_value(&f("unix_seconds_to_timestamp", vec![c(9_876_543_210i64)]), ts(9_876_543_210, 0));
		assert_value(&f("unix_millis_to_timestamp", vec![c(1_500i64)]), ts(1, 500_000_000));
		assert_value(&f("unix_micros_to_timestamp", vec![c(-1i64)]), ts(-1, 999_999_000));
		assert_error(&f("unix_seconds_to_timestamp", vec![c("abc")]));
		assert_error(&f("unix_seconds_to_timestamp", vec![c(1.5)]));
	}

	#[test]
	fn conversions_reject_the_out_of_domain() {
		assert_error(&f("unix_seconds_to_timestamp", vec![c(Timestamp::MAX_SECONDS + 1)]));
		assert_error(&f("unix_seconds_to_timestamp", vec![c(Timestamp::MIN_SECONDS - 1)]));
		assert_error(&f("unix_millis_to_timestamp", vec![c(i64::MAX)]));
	}

	#[test]
	fn conversions_to_unix_counters_truncate() {
		let value = c(ts(1, 999_999_999));
		assert_value(&f("timestamp_to_unix_seconds", vec![value.clone()]), 1i64);
		assert_value(&f("timestamp_to_unix_millis", vec![value.clone()]), 1_999i64);
		assert_value(&f("timestamp_to_unix_micros", vec![value]), 1_999_999i64);
		assert_error(&f("timestamp_to_unix_micros", vec![c(1i64)]));
	}

	#[test]
	fn timestamp_add_shifts_by_units() {
		assert_value(&f("timestamp_add", vec![c(ts(0, 0)), c("second"), c(1i64)]), ts(1, 0));
		assert_value(&f("timestamp_add", vec![c(ts(0, 0)), c("minute"), c(1i64)]), ts(60, 0));
		assert_value(&f("timestamp_add", vec![c(ts(0, 0)), c("hour"), c(1i64)]), ts(3_600, 0));
		assert_value(&f("timestamp_add", vec![c(ts(0, 0)), c("day"), c(1i64)]), ts(86_400, 0));
		assert_value(
			&f("timestamp_add", vec![c(ts(0, 0)), c("millisecond"), c(1i64)]),
			ts(0, 1_000_000),
		);
		assert_value(&f("timestamp_add", vec![c(ts(0, 0)), c("microsecond"), c(1i64)]), ts(0, 1_000));
		assert_value(&f("timestamp_add", vec![c(ts(0, 0)), c("second"), c(-10_000i64)]), ts(-10_000, 0));
	}

	#[test]
	fn timestamp_add_rejects_bad_arguments() {
		assert_error(&f("timestamp_add", vec![c("abc"), c("second"), c(1i64)]));
		assert_error(&f("timestamp_add", vec![c(ts(0, 0)), c("fortnight"), c(1i64)]));
		assert_error(&f("timestamp_add", vec![c(ts(0, 0)), c("second"), c("abc")]));
		assert_error(&f("timestamp_add", vec![c(ts(0, 0)), c("second"), c(1.5)]));
	}

	#[test]
	fn timestamp_add_detects_domain_overflow() {
		let max = ts(Timestamp::MAX_SECONDS, 999_999_000);
		assert_value(&f("timestamp_add", vec![c(max), c("microsecond"), c(0i64)]), max);
		assert_error(&f("timestamp_add", vec![c(max), c("microsecond"), c(1i64)]));
		let min = ts(Timestamp::MIN_SECONDS, 0);
		assert_error(&f("timestamp_add", vec![c(min), c("second"), c(-1i64)]));
	}

	#[test]
	fn null_arguments_are_null() {
		assert_null(&f("unix_seconds_to_timestamp", vec![null()]));
		assert_null(&f("timestamp_to_unix_micros", vec![null()]));
		assert_null(&f("timestamp_add", vec![null(), c("second"), c(1i64)]));
		assert_null(&f("timestamp_add", vec![c(ts(0, 0)), null(), c(1i64)]));
		assert_null(&f("timestamp_add", vec![c(ts(0, 0)), c("second"), null()]));
		assert_error(&f("timestamp_add", vec![unset(), c("second"), c(1i64)]));
	}
}
