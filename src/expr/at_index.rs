//! Index projection.
//!
//! Rewrites an expression into the expression for a single output element: every container
//! terminal becomes a scalar terminal holding its element at the requested flat index, and
//! the operator nodes above it are rebuilt unchanged. Evaluating the projected tree for each
//! `i` in `0..extents().product()` evaluates the whole expression lazily.
//!
//! Scalar terminals are left as they are, and a tensor terminal with the free-scalar shape
//! `[1]` always projects to its only element. Together these make a free scalar broadcast.

use super::{Expr, Operand};
use crate::tensor::Element;

impl<'a, T: Element> Operand<'a, T> {
    /// The scalar operand for flat index `index`.
    ///
    /// No bounds checking happens here; out-of-range behaviour is whatever the wrapped
    /// container's `at` does. Matrix and vector terminals never report `[1]` (they have two
    /// dimensions), so only tensors need the broadcast case.
    pub fn at_index(&self, index: usize) -> Operand<'a, T> {
        match self {
            Operand::Scalar(v) => Operand::Scalar(*v),
            Operand::Tensor(t) if t.extents().is_free_scalar() => Operand::Scalar(t.at(0)),
            Operand::Tensor(t) => Operand::Scalar(t.at(index)),
            Operand::Matrix(m) => Operand::Scalar(m.at(index)),
            Operand::Vector(v) => Operand::Scalar(v.at(index)),
            Operand::MatrixExpr(m) => Operand::Scalar(m.at(index)),
            Operand::VectorExpr(v) => Operand::Scalar(v.at(index)),
        }
    }
}

impl<'a, T: Element> Expr<'a, T> {
    /// Projects the expression onto flat index `index`.
    ///
    /// The returned tree has the same operator structure as `self`, and every terminal in it
    /// is a scalar.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range for a container terminal.
    pub fn at_index(&self, index: usize) -> Expr<'a, T> {
        match self {
            Expr::Terminal(operand) => Expr::Terminal(operand.at_index(index)),
            Expr::Unary { op, operand } => Expr::unary(*op, operand.at_index(index)),
            Expr::Binary { op, lhs, rhs } => {
                Expr::binary(*op, lhs.at_index(index), rhs.at_index(index))
            }
        }
    }
}
