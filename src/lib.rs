//! # tensor-extents
//!
//! `tensor-extents` is the metadata core of a lazy tensor-algebra layer. It never runs an
//! arithmetic kernel; it answers the questions a caller asks before and during element-wise
//! evaluation of an expression tree:
//!
//! - [`mod@expr`]: what shape does `a + 2 * b` have, what does its `i`-th element look like,
//!   and does it contain a comparison?
//! - [`mod@slice`]: what canonical `(first, last, step, size)` does `t(1..=-1, ..)` select along
//!   each dimension, either at run time or in a `const` item?
//! - [`mod@tensor`]: the error type and the container seam the transforms read through.
//!
//! ## Example
//!
//! ```rust
//! use tensor_extents::expr::Expr;
//! use tensor_extents::tensor::Tensor;
//!
//! let a = Tensor::<f32>::new(vec![1.0; 6], [2, 3]).unwrap();
//! let b = Tensor::<f32>::new(vec![2.0; 6], [2, 3]).unwrap();
//!
//! let e = Expr::tensor(&a) + Expr::scalar(2.0) * Expr::tensor(&b);
//! assert_eq!(e.extents().unwrap().as_slice(), &[2, 3]);
//! assert!(!e.has_logical_operator());
//! assert!(e.clone().less(Expr::tensor(&a)).has_logical_operator());
//! ```
//!
//! ```rust
//! use tensor_extents::slice::{ConstSlice, InExtent, StaticSlice, END};
//!
//! // Resolved while compiling; an invalid slice here is a compile error.
//! const TAIL: tensor_extents::slice::SliceDescriptor =
//!     <InExtent<StaticSlice<1, END, 2>, 6> as ConstSlice>::DESCRIPTOR;
//! assert_eq!((TAIL.first(), TAIL.last(), TAIL.size()), (1, 5, 3));
//! ```

pub mod expr;
pub mod extents;
pub mod slice;
pub mod tensor;

pub use expr::{BinaryOp, Expr, Operand, UnaryOp};
pub use extents::Extents;
pub use slice::{Slice, SliceDescriptor, SliceError, END};
pub use tensor::{Element, Result, Tensor, TensorError};
