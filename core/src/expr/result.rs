use crate::expr::Value;

/// The outcome of evaluating one expression against one document.
///
/// Four states, not two: an explicit null and a missing field are
/// different things, and both are different from a failed evaluation.
/// Conflating any of them breaks the existence and membership operators.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum EvaluateResult {
	/// The evaluation failed: a type violation, an overflow, an invalid
	/// pattern. Errors are values here, never panics.
	Error,
	/// The referenced field does not exist
	Unset,
	/// The expression produced the null literal
	Null,
	/// The expression produced a non-null value
	Value(Value),
}

impl EvaluateResult {
	/// Wrap a value, folding the null literal into the null outcome so
	/// that `Value(Value::Null)` is unrepresentable
	pub fn value(value: Value) -> Self {
		match value {
			Value::Null => Self::Null,
			value => Self::Value(value),
		}
	}

	pub fn is_error(&self) -> bool {
		matches!(self, Self::Error)
	}

	pub fn is_unset(&self) -> bool {
		matches!(self, Self::Unset)
	}

	pub fn is_error_or_unset(&self) -> bool {
		matches!(self, Self::Error | Self::Unset)
	}

	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Whether this outcome is the boolean true, which is the only
	/// outcome a filter predicate accepts
	pub fn is_true(&self) -> bool {
		matches!(self, Self::Value(Value::Bool(true)))
	}

	pub fn as_value(&self) -> Option<&Value> {
		match self {
			Self::Value(v) => Some(v),
			_ => None,
		}
	}
}

impl From<Value> for EvaluateResult {
	fn from(value: Value) -> Self {
		Self::value(value)
	}
}
