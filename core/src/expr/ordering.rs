use crate::expr::Expr;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Direction {
	Ascending,
	Descending,
}

/// One sort key of a sort stage: an expression and a direction.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Ordering {
	expr: Arc<Expr>,
	direction: Direction,
}

impl Ordering {
	pub fn new(expr: Arc<Expr>, direction: Direction) -> Self {
		Self {
			expr,
			direction,
		}
	}

	pub fn ascending(expr: Arc<Expr>) -> Self {
		Self::new(expr, Direction::Ascending)
	}

	pub fn descending(expr: Arc<Expr>) -> Self {
		Self::new(expr, Direction::Descending)
	}

	pub fn expr(&self) -> &Expr {
		&self.expr
	}

	pub fn direction(&self) -> Direction {
		self.direction
	}

	pub fn reversed(&self) -> Ordering {
		let direction = match self.direction {
			Direction::Ascending => Direction::Descending,
			Direction::Descending => Direction::Ascending,
		};
		Self::new(self.expr.clone(), direction)
	}
}

impl Display for Direction {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self {
			Direction::Ascending => f.write_str("ascending"),
			Direction::Descending => f.write_str("descending"),
		}
	}
}

impl Display for Ordering {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "{} {}", self.expr, self.direction)
	}
}
