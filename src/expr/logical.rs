//! Detection of relational operators.
//!
//! An arithmetic expression such as `a + b` must not be usable as a truth value; `a < b` and
//! `(a + b) == c` may be. The check is a fold over the tree that ORs the children's answers,
//! so it carries no state between calls.

use super::Expr;
use crate::tensor::Element;

impl<T: Element> Expr<'_, T> {
    /// Returns `true` if any node of the tree, at any depth, is a comparison.
    pub fn has_logical_operator(&self) -> bool {
        match self {
            Expr::Terminal(_) => false,
            Expr::Unary { operand, .. } => operand.has_logical_operator(),
            Expr::Binary { op, lhs, rhs } => {
                op.is_relational() || lhs.has_logical_operator() || rhs.has_logical_operator()
            }
        }
    }
}
