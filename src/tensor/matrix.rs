use crate::tensor::{Element, Result, TensorError};

/// A dense row-major matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T: Element> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Element> Matrix<T> {
    /// Creates a `rows x cols` matrix from row-major data.
    ///
    /// # Errors
    ///
    /// Returns `TensorError::LengthMismatch` if `data.len() != rows * cols`.
    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(TensorError::LengthMismatch {
                expected: rows * cols,
                got: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Element at row-major flat index `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= rows * cols`.
    pub fn at(&self, index: usize) -> T {
        self.data[index]
    }
}
