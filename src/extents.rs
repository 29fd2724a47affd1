//! The shape vocabulary shared by every transform.
//!
//! An [`Extents`] is an ordered list of dimension sizes with at least one dimension. The
//! single-dimension extent `[1]` doubles as the **free scalar** shape: a plain number operand
//! reports it, and at a binary operator it absorbs into whatever shape the other side has.
//!
//! ```rust
//! use tensor_extents::Extents;
//!
//! let e = Extents::from([2, 3]);
//! assert_eq!(e.rank(), 2);
//! assert_eq!(e.product(), 6);
//! assert_eq!(e.to_string(), "[2, 3]");
//! assert!(Extents::free_scalar().is_free_scalar());
//! ```

use crate::tensor::{Result, TensorError};
use std::fmt;
use std::ops::Index;

/// Ordered dimension sizes of a tensor, matrix, vector or scalar operand.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extents {
    dims: Vec<usize>,
}

impl Extents {
    /// Creates extents from a list of dimension sizes.
    ///
    /// # Errors
    ///
    /// Returns `TensorError::InvalidExtents` if `dims` is empty.
    pub fn new(dims: Vec<usize>) -> Result<Self> {
        if dims.is_empty() {
            return Err(TensorError::InvalidExtents(
                "extents need at least one dimension".into(),
            ));
        }
        Ok(Self { dims })
    }

    /// The `[1]` shape reported by scalar operands.
    pub fn free_scalar() -> Self {
        Self { dims: vec![1] }
    }

    /// Returns `true` for exactly one dimension of size one.
    pub fn is_free_scalar(&self) -> bool {
        self.dims.as_slice() == [1]
    }

    /// Number of dimensions.
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Total number of elements.
    pub fn product(&self) -> usize {
        self.dims.iter().product()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.dims
    }
}

impl<const N: usize> From<[usize; N]> for Extents {
    /// Zero-length arrays are rejected at compile time.
    fn from(dims: [usize; N]) -> Self {
        const { assert!(N > 0, "extents need at least one dimension") };
        Self {
            dims: dims.to_vec(),
        }
    }
}

impl TryFrom<&[usize]> for Extents {
    type Error = TensorError;

    fn try_from(dims: &[usize]) -> Result<Self> {
        Self::new(dims.to_vec())
    }
}

impl Index<usize> for Extents {
    type Output = usize;

    fn index(&self, dim: usize) -> &usize {
        &self.dims[dim]
    }
}

impl fmt::Display for Extents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, d) in self.dims.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{d}")?;
        }
        write!(f, "]")
    }
}
