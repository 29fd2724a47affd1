//! Error type, element bound and the containers expression terminals wrap.
//!
//! The transforms in [`crate::expr`] never touch storage directly. They read a terminal
//! through one of the seam traits in [`container`]: a tensor reports its [`Extents`], a matrix
//! its `size1()`/`size2()`, a vector its `size()`, and all of them hand out one element per
//! flat index. The dense [`Tensor`], [`Matrix`] and [`Vector`] types here are the reference
//! implementations of that seam.
//!
//! # Examples
//!
//! ```rust
//! use tensor_extents::tensor::Tensor;
//!
//! let t = Tensor::<f32>::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], [2, 3]).unwrap();
//! assert_eq!(t.extents().as_slice(), &[2, 3]);
//! assert_eq!(t.strides(), &[3, 1]);
//! assert_eq!(t.at(4), 5.0);
//! ```
//!
//! > [!TIP]
//! > Layout is **row-major**: the last dimension moves fastest, so flat index `i` of a `[2, 3]`
//! > tensor is row `i / 3`, column `i % 3`. Index projection relies on every operand of an
//! > expression agreeing on this order.

use crate::expr::BinaryOp;
use crate::extents::Extents;
use crate::slice::SliceError;
use num_traits::Num;
use std::fmt::Debug;
use thiserror::Error;

pub mod container;
pub mod matrix;
pub mod storage;
pub mod vector;

pub use container::{
    MatrixContainer, MatrixExpression, TensorContainer, VectorContainer, VectorExpression,
};
pub use matrix::Matrix;
pub use storage::Storage;
pub use vector::Vector;

/// Error type for shape and index computations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TensorError {
    /// Two operands that are neither free scalars nor equal in shape met at a binary operator.
    #[error("Cannot apply {op} to tensors of shapes {lhs} and {rhs}")]
    ShapeMismatch {
        op: BinaryOp,
        lhs: Extents,
        rhs: Extents,
    },
    /// A slice, an index or a slice-sequence position could not be resolved.
    #[error("Index out of range: {0}")]
    IndexOutOfRange(#[from] SliceError),
    /// The data handed to a container does not match the shape it was given.
    #[error("Length mismatch: expected {expected} elements, got {got}")]
    LengthMismatch { expected: usize, got: usize },
    /// The requested extents are not a valid shape.
    #[error("Invalid extents: {0}")]
    InvalidExtents(String),
}

pub type Result<T> = std::result::Result<T, TensorError>;

/// Trait bound for values stored in containers and carried by scalar terminals.
///
/// # Requirements
/// - `Copy`: index projection hands out elements by value.
/// - `Num + PartialOrd`: the arithmetic and relational operators an expression can hold.
/// - `Send + Sync`: expression trees may be inspected from several threads at once.
pub trait Element: Num + Copy + Debug + PartialOrd + Send + Sync {}

impl<T> Element for T where T: Num + Copy + Debug + PartialOrd + Send + Sync {}

/// A dense N-dimensional array.
///
/// # Generics
///
/// - `T`: The element type.
/// - `S`: The backing [`Storage`]; `Vec<T>` by default, `[T; N]` for fixed-size data.
///
/// Unlike [`Matrix`] and [`Vector`], the rank is only known at run time: it is whatever the
/// [`Extents`] passed to [`Tensor::new`] say it is.
#[derive(Clone)]
pub struct Tensor<T, S = Vec<T>>
where
    T: Element,
    S: Storage<T>,
{
    extents: Extents,
    strides: Vec<usize>,
    data: S,
    _elem: std::marker::PhantomData<T>,
}

impl<T, S> Tensor<T, S>
where
    T: Element,
    S: Storage<T>,
{
    /// Creates a new Tensor from flat row-major data and a shape.
    ///
    /// # Arguments
    ///
    /// * `data` - A flat container holding the tensor elements.
    /// * `extents` - The shape of the tensor.
    ///
    /// # Errors
    ///
    /// Returns `TensorError::LengthMismatch` if the length of `data` does not match the product
    /// of `extents`.
    pub fn new(data: S, extents: impl Into<Extents>) -> Result<Self> {
        let extents = extents.into();
        let size = extents.product();
        if data.len() != size {
            return Err(TensorError::LengthMismatch {
                expected: size,
                got: data.len(),
            });
        }

        let strides = compute_strides(extents.as_slice());
        Ok(Self {
            extents,
            strides,
            data,
            _elem: std::marker::PhantomData,
        })
    }

    /// Returns the shape of the tensor.
    pub fn extents(&self) -> &Extents {
        &self.extents
    }

    /// Returns the row-major strides of the tensor.
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Returns the underlying data as a slice.
    pub fn data(&self) -> &[T] {
        self.data.as_slice()
    }

    /// Returns the total number of elements in the tensor.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns the element at flat index `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.size()`, like slice indexing.
    pub fn at(&self, index: usize) -> T {
        self.data.as_slice()[index]
    }
}

impl<T: Element> Tensor<T, Vec<T>> {
    /// Creates a new Tensor filled with zeros.
    pub fn zeros(extents: impl Into<Extents>) -> Self {
        Self::filled(extents.into(), T::zero())
    }

    /// Creates a new Tensor filled with ones.
    pub fn ones(extents: impl Into<Extents>) -> Self {
        Self::filled(extents.into(), T::one())
    }

    fn filled(extents: Extents, value: T) -> Self {
        let data = vec![value; extents.product()];
        let strides = compute_strides(extents.as_slice());
        Self {
            extents,
            strides,
            data,
            _elem: std::marker::PhantomData,
        }
    }
}

/// Computes row-major strides for a shape.
///
/// The last dimension has stride one; every other stride is the product of the sizes to its
/// right.
pub(crate) fn compute_strides(dims: &[usize]) -> Vec<usize> {
    let mut strides = vec![0; dims.len()];
    let mut stride = 1;
    for i in (0..dims.len()).rev() {
        strides[i] = stride;
        stride *= dims[i];
    }
    strides
}

impl<T, S> Debug for Tensor<T, S>
where
    T: Element,
    S: Storage<T>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tensor")
            .field("extents", &self.extents.as_slice())
            .field("data_len", &self.data.len())
            .finish()
    }
}
