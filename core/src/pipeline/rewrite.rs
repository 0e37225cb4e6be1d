use crate::expr::{Expr, FieldPath, Ordering};
use crate::pipeline::Stage;
use std::sync::Arc;

fn key_ordering() -> Ordering {
	Ordering::ascending(Arc::new(Expr::Field(FieldPath::key())))
}

fn includes_key_ordering(orderings: &[Ordering]) -> bool {
	orderings.iter().any(|o| matches!(o.expr(), Expr::Field(path) if path.is_key()))
}

/// Normalizes a stage list so that downstream code may assume a total
/// ordering on every pipeline output.
///
/// Every sort stage is extended with an ascending key ordering unless it
/// already sorts on the key; a limit with no sort before it gains one;
/// and a pipeline that never sorts gets a terminal key sort. This is the
/// only rewriting the engine performs.
pub(crate) fn rewrite_stages(stages: &[Arc<Stage>]) -> Vec<Arc<Stage>> {
	let mut has_order = false;
	let mut rewritten = Vec::with_capacity(stages.len() + 1);
	for stage in stages {
		match stage.as_ref() {
			// For stages that provide ordering semantics
			Stage::Sort(orderings) => {
				has_order = true;
				if includes_key_ordering(orderings) {
					rewritten.push(stage.clone());
				} else {
					trace!("Extending sort stage with a key ordering");
					let mut orderings = orderings.clone();
					orderings.push(key_ordering());
					rewritten.push(Arc::new(Stage::Sort(orderings)));
				}
			}
			// For stages whose semantics depend on ordering
			Stage::Limit(_) => {
				if !has_order {
					trace!("Inserting a key sort before an unsorted limit");
					rewritten.push(Arc::new(Stage::Sort(vec![key_ordering()])));
					has_order = true;
				}
				rewritten.push(stage.clone());
			}
			_ => rewritten.push(stage.clone()),
		}
	}
	if !has_order {
		rewritten.push(Arc::new(Stage::Sort(vec![key_ordering()])));
	}
	rewritten
}
