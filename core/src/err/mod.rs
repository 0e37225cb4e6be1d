use thiserror::Error;

/// The error type for every fallible operation inside the engine.
///
/// Expression evaluation never surfaces these to callers; the evaluator
/// converts them into the error outcome of the result lattice. They are
/// visible on constructors which validate their inputs.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
	/// The addition of two values failed or overflowed
	#[error("Cannot add the values '{0}' and '{1}'")]
	TryAdd(String, String),

	/// The subtraction of two values failed or overflowed
	#[error("Cannot subtract the values '{0}' and '{1}'")]
	TrySub(String, String),

	/// The multiplication of two values failed or overflowed
	#[error("Cannot multiply the values '{0}' and '{1}'")]
	TryMul(String, String),

	/// The division of two values failed
	#[error("Cannot divide the values '{0}' and '{1}'")]
	TryDiv(String, String),

	/// The remainder of two values could not be computed
	#[error("Cannot find the remainder of the values '{0}' and '{1}'")]
	TryRem(String, String),

	/// A function was called with arguments it cannot operate on
	#[error("Invalid arguments for function {name}(): {message}")]
	InvalidArguments {
		name: String,
		message: String,
	},

	/// A regular expression or like pattern did not compile
	#[error("Invalid pattern '{0}'")]
	InvalidPattern(String),

	/// A timestamp fell outside of the representable domain
	#[error("Timestamp '{0}s {1}ns' is out of range")]
	TimestampOutOfRange(i64, i32),

	/// A resource path, document key or field path was malformed
	#[error("Invalid path '{0}'")]
	InvalidPath(String),
}
