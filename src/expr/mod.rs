//! Lazy expression trees over tensors, matrices, vectors and scalars.
//!
//! An [`Expr`] is a closed sum type: a [`Terminal`](Expr::Terminal) leaf wrapping an
//! [`Operand`], a [`Unary`](Expr::Unary) node, or a [`Binary`](Expr::Binary) node. Terminals
//! borrow their containers, so building `a + b` copies no data. Three transforms walk the
//! tree, each a plain recursive `match`:
//!
//! | transform | file | result |
//! |-----------|------|--------|
//! | [`Expr::extents`] | `infer.rs` | the result shape, or `TensorError::ShapeMismatch` |
//! | [`Expr::at_index`] | `at_index.rs` | the tree with every container replaced by an element |
//! | [`Expr::has_logical_operator`] | `logical.rs` | whether any comparison node is present |
//!
//! ```rust
//! use tensor_extents::expr::Expr;
//! use tensor_extents::tensor::{Tensor, Vector};
//!
//! let t = Tensor::<i32>::new(vec![1, 2, 3], [3, 1]).unwrap();
//! let v = Vector::from(vec![10, 20, 30]);
//!
//! // A vector reports `[len, 1]`, so it lines up with a `[3, 1]` tensor.
//! let e = -Expr::tensor(&t) + Expr::vector(&v);
//! assert_eq!(e.extents().unwrap().as_slice(), &[3, 1]);
//!
//! let second = e.at_index(1);
//! assert!(second.is_scalar_tree());
//! ```

use crate::tensor::{
    Element, MatrixContainer, MatrixExpression, TensorContainer, VectorContainer,
    VectorExpression,
};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

mod at_index;
mod infer;
mod logical;

pub use infer::broadcast_extents;

/// Operators with one operand. Both preserve the operand's shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnaryOp {
    Negate,
    UnaryPlus,
}

impl UnaryOp {
    pub fn name(self) -> &'static str {
        match self {
            UnaryOp::Negate => "negate",
            UnaryOp::UnaryPlus => "unary_plus",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Negate => "-",
            UnaryOp::UnaryPlus => "+",
        }
    }
}

/// Operators with two operands.
///
/// Arithmetic and relational operators share one broadcast policy; see
/// [`broadcast_extents`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOp {
    Plus,
    Minus,
    Multiplies,
    Divides,
    EqualTo,
    NotEqualTo,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl BinaryOp {
    /// Every binary operator, arithmetic first.
    pub const ALL: [BinaryOp; 10] = [
        BinaryOp::Plus,
        BinaryOp::Minus,
        BinaryOp::Multiplies,
        BinaryOp::Divides,
        BinaryOp::EqualTo,
        BinaryOp::NotEqualTo,
        BinaryOp::Less,
        BinaryOp::LessEqual,
        BinaryOp::Greater,
        BinaryOp::GreaterEqual,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BinaryOp::Plus => "plus",
            BinaryOp::Minus => "minus",
            BinaryOp::Multiplies => "multiplies",
            BinaryOp::Divides => "divides",
            BinaryOp::EqualTo => "equal_to",
            BinaryOp::NotEqualTo => "not_equal_to",
            BinaryOp::Less => "less",
            BinaryOp::LessEqual => "less_equal",
            BinaryOp::Greater => "greater",
            BinaryOp::GreaterEqual => "greater_equal",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Plus => "+",
            BinaryOp::Minus => "-",
            BinaryOp::Multiplies => "*",
            BinaryOp::Divides => "/",
            BinaryOp::EqualTo => "==",
            BinaryOp::NotEqualTo => "!=",
            BinaryOp::Less => "<",
            BinaryOp::LessEqual => "<=",
            BinaryOp::Greater => ">",
            BinaryOp::GreaterEqual => ">=",
        }
    }

    /// Returns `true` for the comparison operators.
    pub fn is_relational(self) -> bool {
        matches!(
            self,
            BinaryOp::EqualTo
                | BinaryOp::NotEqualTo
                | BinaryOp::Less
                | BinaryOp::LessEqual
                | BinaryOp::Greater
                | BinaryOp::GreaterEqual
        )
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.symbol())
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.symbol())
    }
}

/// The value wrapped by a terminal node.
#[derive(Clone, Copy)]
pub enum Operand<'a, T: Element> {
    /// A plain number. Its shape is the free scalar `[1]`.
    Scalar(T),
    Tensor(&'a dyn TensorContainer<T>),
    Matrix(&'a dyn MatrixContainer<T>),
    Vector(&'a dyn VectorContainer<T>),
    /// A lazy matrix-valued operand, materialized on projection.
    MatrixExpr(&'a dyn MatrixExpression<T>),
    /// A lazy vector-valued operand, materialized on projection.
    VectorExpr(&'a dyn VectorExpression<T>),
}

impl<T: Element> fmt::Debug for Operand<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Scalar(v) => f.debug_tuple("Scalar").field(v).finish(),
            Operand::Tensor(t) => f
                .debug_tuple("Tensor")
                .field(&t.extents().as_slice())
                .finish(),
            Operand::Matrix(m) => f
                .debug_tuple("Matrix")
                .field(&[m.size1(), m.size2()])
                .finish(),
            Operand::Vector(v) => f.debug_tuple("Vector").field(&v.size()).finish(),
            Operand::MatrixExpr(m) => f
                .debug_tuple("MatrixExpr")
                .field(&[m.size1(), m.size2()])
                .finish(),
            Operand::VectorExpr(v) => f.debug_tuple("VectorExpr").field(&v.size()).finish(),
        }
    }
}

/// A node of a lazy expression tree.
#[derive(Clone, Debug)]
pub enum Expr<'a, T: Element> {
    Terminal(Operand<'a, T>),
    Unary {
        op: UnaryOp,
        operand: Box<Expr<'a, T>>,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<Expr<'a, T>>,
        rhs: Box<Expr<'a, T>>,
    },
}

impl<'a, T: Element> Expr<'a, T> {
    pub fn scalar(value: T) -> Self {
        Expr::Terminal(Operand::Scalar(value))
    }

    pub fn tensor(tensor: &'a dyn TensorContainer<T>) -> Self {
        Expr::Terminal(Operand::Tensor(tensor))
    }

    pub fn matrix(matrix: &'a dyn MatrixContainer<T>) -> Self {
        Expr::Terminal(Operand::Matrix(matrix))
    }

    pub fn vector(vector: &'a dyn VectorContainer<T>) -> Self {
        Expr::Terminal(Operand::Vector(vector))
    }

    pub fn matrix_expr(expr: &'a dyn MatrixExpression<T>) -> Self {
        Expr::Terminal(Operand::MatrixExpr(expr))
    }

    pub fn vector_expr(expr: &'a dyn VectorExpression<T>) -> Self {
        Expr::Terminal(Operand::VectorExpr(expr))
    }

    pub fn unary(op: UnaryOp, operand: Self) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn binary(op: BinaryOp, lhs: Self, rhs: Self) -> Self {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// `+self`.
    pub fn unary_plus(self) -> Self {
        Self::unary(UnaryOp::UnaryPlus, self)
    }

    /// The value of a scalar terminal, `None` for any other node.
    pub fn as_scalar(&self) -> Option<T> {
        match self {
            Expr::Terminal(Operand::Scalar(v)) => Some(*v),
            _ => None,
        }
    }

    /// Returns `true` if every terminal in the tree is a scalar.
    pub fn is_scalar_tree(&self) -> bool {
        match self {
            Expr::Terminal(operand) => matches!(operand, Operand::Scalar(_)),
            Expr::Unary { operand, .. } => operand.is_scalar_tree(),
            Expr::Binary { lhs, rhs, .. } => lhs.is_scalar_tree() && rhs.is_scalar_tree(),
        }
    }
}

// Relational builders. The std comparison traits must return `bool`, so these are methods.
macro_rules! impl_relational {
    ($($method:ident => $op:ident),* $(,)?) => {
        impl<'a, T: Element> Expr<'a, T> {
            $(
                #[doc = concat!("Builds `self ", stringify!($method), " rhs`.")]
                pub fn $method(self, rhs: Self) -> Self {
                    Self::binary(BinaryOp::$op, self, rhs)
                }
            )*
        }
    };
}

impl_relational!(
    equal_to => EqualTo,
    not_equal_to => NotEqualTo,
    less => Less,
    less_equal => LessEqual,
    greater => Greater,
    greater_equal => GreaterEqual,
);

// Simple macro to implement arithmetic traits
macro_rules! impl_bin_op {
    ($trait:ident, $method:ident, $op:ident) => {
        impl<'a, T: Element> $trait for Expr<'a, T> {
            type Output = Expr<'a, T>;

            fn $method(self, rhs: Self) -> Self::Output {
                Expr::binary(BinaryOp::$op, self, rhs)
            }
        }
    };
}

impl_bin_op!(Add, add, Plus);
impl_bin_op!(Sub, sub, Minus);
impl_bin_op!(Mul, mul, Multiplies);
impl_bin_op!(Div, div, Divides);

impl<'a, T: Element> Neg for Expr<'a, T> {
    type Output = Expr<'a, T>;

    fn neg(self) -> Self::Output {
        Expr::unary(UnaryOp::Negate, self)
    }
}
