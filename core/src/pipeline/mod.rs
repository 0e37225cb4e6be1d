//! Pipelines: immutable stage lists and their execution.

pub(crate) mod rewrite;
pub(crate) mod stage;

pub use self::stage::Stage;

use crate::ctx::{EvaluateContext, Serializer};
use crate::doc::Document;
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

/// An immutable, executable sequence of stages.
///
/// Construction caches a rewritten copy of the caller-supplied stage
/// list with the terminal ordering guarantee applied. Execution uses the
/// rewritten list; identity, equality and the canonical id use the
/// original.
#[derive(Clone)]
pub struct Pipeline {
	stages: Vec<Arc<Stage>>,
	rewritten: Vec<Arc<Stage>>,
	serializer: Arc<dyn Serializer>,
}

impl Pipeline {
	pub fn new(stages: Vec<Arc<Stage>>, serializer: Arc<dyn Serializer>) -> Self {
		let rewritten = rewrite::rewrite_stages(&stages);
		Self {
			stages,
			rewritten,
			serializer,
		}
	}

	/// A new pipeline sharing these stages with one more appended, and a
	/// fresh rewrite applied
	pub fn adding_stage(&self, stage: Stage) -> Self {
		let mut stages = self.stages.clone();
		stages.push(Arc::new(stage));
		Self::new(stages, self.serializer.clone())
	}

	/// The caller-supplied stages
	pub fn stages(&self) -> &[Arc<Stage>] {
		&self.stages
	}

	/// The stages execution actually runs
	pub fn rewritten_stages(&self) -> &[Arc<Stage>] {
		&self.rewritten
	}

	pub fn evaluate_context(&self) -> EvaluateContext<'_> {
		EvaluateContext::new(self.serializer.as_ref())
	}

	/// A stable textual identity for the caller-supplied stage list
	pub fn canonical_id(&self) -> String {
		self.stages.iter().map(|stage| stage.to_string()).collect::<Vec<_>>().join("|")
	}
}

impl PartialEq for Pipeline {
	fn eq(&self, other: &Self) -> bool {
		self.stages == other.stages
	}
}

impl Debug for Pipeline {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.debug_struct("Pipeline").field("stages", &self.stages).finish_non_exhaustive()
	}
}

/// Runs a pipeline over an input document vector.
///
/// A pure, synchronous fold of the rewritten stage list: each stage sees
/// the entire current buffer and produces the next one. The output is
/// deterministic and totally ordered by construction.
pub fn run(pipeline: &Pipeline, inputs: &[Document]) -> Vec<Document> {
	let ctx = pipeline.evaluate_context();
	let mut current = inputs.to_vec();
	debug!(
		"Running a {} stage pipeline over {} documents",
		pipeline.rewritten.len(),
		current.len()
	);
	for stage in &pipeline.rewritten {
		current = stage.evaluate(&ctx, current);
		trace!("Stage {} emitted {} documents", stage.name(), current.len());
	}
	current
}
