use crate::ctx::EvaluateContext;
use crate::doc::Document;
use crate::err::Error;
use crate::expr::field::FieldPath;
use crate::expr::result::EvaluateResult;
use crate::expr::value::Value;
use crate::fnc;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

/// An expression node.
///
/// Expressions are immutable value objects. Argument lists hold shared
/// pointers, so one node may appear under several parents and a built
/// expression tree is really a DAG.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Expr {
	/// A dotted field reference, resolved against the current document
	Field(FieldPath),
	/// A literal value
	Constant(Value),
	/// A function applied to argument expressions
	Function(FunctionExpr),
}

/// A named function call over argument expressions
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FunctionExpr {
	name: String,
	args: Vec<Arc<Expr>>,
}

impl FunctionExpr {
	pub fn new(name: impl Into<String>, args: Vec<Arc<Expr>>) -> Self {
		Self {
			name: name.into(),
			args,
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn args(&self) -> &[Arc<Expr>] {
		&self.args
	}
}

impl Expr {
	/// Create a field reference from a dotted path
	pub fn field(path: &str) -> Result<Self, Error> {
		Ok(Self::Field(FieldPath::parse(path)?))
	}

	/// Create a constant expression
	pub fn constant(value: impl Into<Value>) -> Self {
		Self::Constant(value.into())
	}

	/// Create a function call expression
	pub fn function(name: impl Into<String>, args: Vec<Arc<Expr>>) -> Self {
		Self::Function(FunctionExpr::new(name, args))
	}

	/// Evaluate this expression against a document.
	///
	/// Field references intercept the pseudo-fields: the key and version
	/// are synthesized through the serializer and cannot be shadowed by
	/// stored fields of the same name.
	pub fn evaluate(&self, ctx: &EvaluateContext, doc: &Document) -> EvaluateResult {
		match self {
			Expr::Constant(v) => EvaluateResult::value(v.clone()),
			Expr::Field(path) => {
				if path.is_key() {
					let key = ctx.serializer().encode_key(doc.key());
					return EvaluateResult::value(Value::Reference(key));
				}
				if path.is_update_time() {
					let version = ctx.serializer().encode_version(doc.version());
					return EvaluateResult::value(Value::Timestamp(version));
				}
				match doc.field(path) {
					Some(v) => EvaluateResult::value(v.clone()),
					None => EvaluateResult::Unset,
				}
			}
			Expr::Function(f) => fnc::run(ctx, doc, f.name(), f.args()),
		}
	}
}

impl Display for Expr {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self {
			Expr::Field(path) => Display::fmt(path, f),
			Expr::Constant(v) => Display::fmt(v, f),
			Expr::Function(v) => Display::fmt(v, f),
		}
	}
}

impl Display for FunctionExpr {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "{}(", self.name)?;
		for (i, arg) in self.args.iter().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			Display::fmt(arg, f)?;
		}
		f.write_str(")")
	}
}
