use crate::ctx::EvaluateContext;
use crate::doc::{Document, ResourcePath};
use crate::expr::{Direction, EvaluateResult, Expr, Ordering, Value};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

/// One operator in a pipeline.
///
/// A stage consumes the whole current document buffer and produces the
/// next one. Stages are built once, immutable thereafter, and carry
/// their parameters inline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Stage {
	/// Emits the documents sitting directly in one collection;
	/// subcollections are excluded
	Collection(ResourcePath),
	/// Emits the documents of every collection with this id, at any depth
	CollectionGroup(String),
	/// Emits every input document
	Database,
	/// Emits the documents for which the predicate is the boolean true
	Where(Arc<Expr>),
	/// Stable sort by a lexicographic tuple of sort keys
	Sort(Vec<Ordering>),
	/// Truncates the buffer to its first n documents
	Limit(u32),
	/// Drops the first n documents of the buffer
	Offset(u32),
}

impl Stage {
	/// The stage's wire name; the rewriter keys off these
	pub fn name(&self) -> &'static str {
		match self {
			Stage::Collection(_) => "collection",
			Stage::CollectionGroup(_) => "collection_group",
			Stage::Database => "database",
			Stage::Where(_) => "where",
			Stage::Sort(_) => "sort",
			Stage::Limit(_) => "limit",
			Stage::Offset(_) => "offset",
		}
	}

	/// Apply this stage to the current document buffer
	pub(crate) fn evaluate(&self, ctx: &EvaluateContext, input: Vec<Document>) -> Vec<Document> {
		match self {
			Stage::Collection(path) => {
				input.into_iter().filter(|doc| &doc.key().parent() == path).collect()
			}
			Stage::CollectionGroup(id) => {
				input.into_iter().filter(|doc| doc.key().collection_id() == id).collect()
			}
			Stage::Database => input,
			Stage::Where(predicate) => input
				.into_iter()
				.filter(|doc| predicate.evaluate(ctx, doc).is_true())
				.collect(),
			Stage::Sort(orderings) => sort(ctx, orderings, input),
			Stage::Limit(n) => {
				let mut input = input;
				input.truncate(*n as usize);
				input
			}
			Stage::Offset(n) => {
				let mut input = input;
				input.drain(..(*n as usize).min(input.len()));
				input
			}
		}
	}
}

/// Stable sort of the buffer by the lexicographic tuple of sort keys.
/// A key which evaluates to an error, to unset or to null collapses
/// into the absent sentinel, which sorts before every present value in
/// ascending order and after every present value in descending order.
fn sort(ctx: &EvaluateContext, orderings: &[Ordering], input: Vec<Document>) -> Vec<Document> {
	let mut decorated: Vec<(Vec<Option<Value>>, Document)> = input
		.into_iter()
		.map(|doc| {
			let keys = orderings
				.iter()
				.map(|ordering| match ordering.expr().evaluate(ctx, &doc) {
					EvaluateResult::Value(v) => Some(v),
					_ => None,
				})
				.collect();
			(keys, doc)
		})
		.collect();
	decorated.sort_by(|(a, _), (b, _)| {
		for (ordering, (ka, kb)) in orderings.iter().zip(a.iter().zip(b.iter())) {
			let cmp = match (ka, kb) {
				(None, None) => std::cmp::Ordering::Equal,
				(None, Some(_)) => std::cmp::Ordering::Less,
				(Some(_), None) => std::cmp::Ordering::Greater,
				(Some(ka), Some(kb)) => ka.cmp(kb),
			};
			let cmp = match ordering.direction() {
				Direction::Ascending => cmp,
				Direction::Descending => cmp.reverse(),
			};
			if cmp != std::cmp::Ordering::Equal {
				return cmp;
			}
		}
		std::cmp::Ordering::Equal
	});
	decorated.into_iter().map(|(_, doc)| doc).collect()
}

impl Display for Stage {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self {
			Stage::Collection(path) => write!(f, "collection({path})"),
			Stage::CollectionGroup(id) => write!(f, "collection_group({id})"),
			Stage::Database => f.write_str("database()"),
			Stage::Where(predicate) => write!(f, "where({predicate})"),
			Stage::Sort(orderings) => {
				f.write_str("sort(")?;
				for (i, ordering) in orderings.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					Display::fmt(ordering, f)?;
				}
				f.write_str(")")
			}
			Stage::Limit(n) => write!(f, "limit({n})"),
			Stage::Offset(n) => write!(f, "offset({n})"),
		}
	}
}
