//! String inspection, transformation and pattern functions.
//!
//! Strands are validated UTF-8 at construction, so the length and case
//! functions never see ill-formed input; raw byte sequences are only
//! accepted where octet counting is meaningful.

use crate::err::Error;
use crate::expr::{EvaluateResult, Strand, Value};
use regex::Regex;

pub fn char_length(v: Value) -> Result<Value, Error> {
	match v {
		Value::Strand(v) => Ok(Value::from(v.chars().count() as i64)),
		v => Err(invalid("char_length", &v)),
	}
}

/// Counts UTF-8 bytes for a strand, or raw octets for a bytes value;
/// the one string function which also accepts bytes
pub fn byte_length(v: Value) -> Result<Value, Error> {
	match v {
		Value::Strand(v) => Ok(Value::from(v.len() as i64)),
		Value::Bytes(v) => Ok(Value::from(v.len() as i64)),
		v => Err(invalid("byte_length", &v)),
	}
}

pub fn to_lower(v: Value) -> Result<Value, Error> {
	match v {
		Value::Strand(v) => Ok(Value::from(v.to_lowercase())),
		v => Err(invalid("to_lower", &v)),
	}
}

pub fn to_upper(v: Value) -> Result<Value, Error> {
	match v {
		Value::Strand(v) => Ok(Value::from(v.to_uppercase())),
		v => Err(invalid("to_upper", &v)),
	}
}

/// Reverses the sequence of Unicode scalar values
pub fn reverse(v: Value) -> Result<Value, Error> {
	match v {
		Value::Strand(v) => Ok(Value::from(v.chars().rev().collect::<String>())),
		v => Err(invalid("reverse", &v)),
	}
}

pub fn trim(v: Value) -> Result<Value, Error> {
	match v {
		Value::Strand(v) => Ok(Value::from(v.trim().to_owned())),
		v => Err(invalid("trim", &v)),
	}
}

pub fn contains(v: Value, search: Value) -> Result<Value, Error> {
	let (v, search) = strings("str_contains", v, search)?;
	Ok(Value::from(v.contains(search.as_str())))
}

pub fn starts_with(v: Value, prefix: Value) -> Result<Value, Error> {
	let (v, prefix) = strings("starts_with", v, prefix)?;
	Ok(Value::from(v.starts_with(prefix.as_str())))
}

pub fn ends_with(v: Value, suffix: Value) -> Result<Value, Error> {
	let (v, suffix) = strings("ends_with", v, suffix)?;
	Ok(Value::from(v.ends_with(suffix.as_str())))
}

/// Concatenates every operand; all operands must be strands
pub fn concat(args: Vec<Option<Value>>) -> EvaluateResult {
	if !args.is_empty() && args.iter().all(Option::is_none) {
		return EvaluateResult::Null;
	}
	let mut out = String::new();
	for arg in args {
		match arg {
			Some(Value::Strand(v)) => out.push_str(v.as_str()),
			_ => return EvaluateResult::Error,
		}
	}
	EvaluateResult::value(Value::from(out))
}

/// SQL-style pattern match: `%` spans any sequence, `_` exactly one
/// code point, and the pattern must cover the whole value. There is no
/// escape character.
pub fn like(v: Value, pattern: Value) -> Result<Value, Error> {
	let (v, pattern) = strings("like", v, pattern)?;
	let regex = like_to_regex(pattern.as_str())?;
	Ok(Value::from(regex.is_match(v.as_str())))
}

/// True iff any substring of the value matches the pattern
pub fn regex_contains(v: Value, pattern: Value) -> Result<Value, Error> {
	let (v, pattern) = strings("regex_contains", v, pattern)?;
	let regex = compile(pattern.as_str())?;
	Ok(Value::from(regex.is_match(v.as_str())))
}

/// True iff the entire value matches the pattern
pub fn regex_match(v: Value, pattern: Value) -> Result<Value, Error> {
	let (v, pattern) = strings("regex_match", v, pattern)?;
	let regex = compile(&format!("\\A(?:{})\\z", pattern.as_str()))?;
	Ok(Value::from(regex.is_match(v.as_str())))
}

fn compile(pattern: &str) -> Result<Regex, Error> {
	Regex::new(pattern).map_err(|_| Error::InvalidPattern(pattern.to_owned()))
}

fn like_to_regex(pattern: &str) -> Result<Regex, Error> {
	let mut out = String::with_capacity(pattern.len() + 8);
	out.push_str("(?s)\\A");
	for c in pattern.chars() {
		match c {
			'%' => out.push_str(".*"),
			'_' => out.push('.'),
			c if c.is_ascii_punctuation() => {
				out.push('\\');
				out.push(c);
			}
			c => out.push(c),
		}
	}
	out.push_str("\\z");
	compile(&out)
}

fn strings(name: &str, a: Value, b: Value) -> Result<(Strand, Strand), Error> {
	match (a, b) {
		(Value::Strand(a), Value::Strand(b)) => Ok((a, b)),
		(a, b) => Err(Error::InvalidArguments {
			name: name.to_owned(),
			message: format!("Expected two strings, found {a} and {b}"),
		}),
	}
}

fn invalid(name: &str, v: &Value) -> Error {
	Error::InvalidArguments {
		name: name.to_owned(),
		message: format!("Expected a string, found {v}"),
	}
}
