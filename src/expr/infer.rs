//! Extent inference.
//!
//! Computes the shape of an expression without materializing anything. Terminals report
//! their own shape (a vector is a `[len, 1]` column, a scalar is the free scalar `[1]`),
//! unary nodes pass their operand's shape through, and every binary node applies
//! [`broadcast_extents`].

use super::{BinaryOp, Expr, Operand};
use crate::extents::Extents;
use crate::tensor::{Element, Result, TensorError};

impl<T: Element> Operand<'_, T> {
    /// The shape this operand contributes to an expression.
    pub fn extents(&self) -> Extents {
        match self {
            Operand::Scalar(_) => Extents::free_scalar(),
            Operand::Tensor(t) => t.extents(),
            Operand::Matrix(m) => Extents::from([m.size1(), m.size2()]),
            Operand::Vector(v) => Extents::from([v.size(), 1]),
            Operand::MatrixExpr(m) => Extents::from([m.size1(), m.size2()]),
            Operand::VectorExpr(v) => Extents::from([v.size(), 1]),
        }
    }
}

impl<T: Element> Expr<'_, T> {
    /// Infers the shape of the expression.
    ///
    /// # Errors
    ///
    /// Returns `TensorError::ShapeMismatch` for the first binary node, in left-to-right
    /// post-order, whose operands are neither free scalars nor equal in shape.
    pub fn extents(&self) -> Result<Extents> {
        match self {
            Expr::Terminal(operand) => Ok(operand.extents()),
            Expr::Unary { operand, .. } => operand.extents(),
            Expr::Binary { op, lhs, rhs } => {
                let lhs = lhs.extents()?;
                let rhs = rhs.extents()?;
                broadcast_extents(*op, lhs, rhs)
            }
        }
    }
}

/// Combines the shapes of the two operands of `op`.
///
/// - both free scalars: the free scalar;
/// - exactly one free scalar: the other shape;
/// - otherwise the shapes must be equal, and that shape is the result.
///
/// The policy is the same for every operator; `op` only appears in the error.
///
/// # Errors
///
/// Returns `TensorError::ShapeMismatch` naming `op`, `lhs` and `rhs` when neither side is a
/// free scalar and the shapes differ.
pub fn broadcast_extents(op: BinaryOp, lhs: Extents, rhs: Extents) -> Result<Extents> {
    match (lhs.is_free_scalar(), rhs.is_free_scalar()) {
        (true, true) => Ok(Extents::free_scalar()),
        (true, false) => Ok(rhs),
        (false, true) => Ok(lhs),
        (false, false) if lhs == rhs => Ok(lhs),
        (false, false) => {
            tracing::debug!(op = op.name(), %lhs, %rhs, "extent mismatch at binary node");
            Err(TensorError::ShapeMismatch { op, lhs, rhs })
        }
    }
}
