//! The seam between expression terminals and whatever holds the data.
//!
//! Each trait exposes only what the transforms need: a shape accessor and flat-index element
//! access. Lazy operands ([`MatrixExpression`], [`VectorExpression`]) report their shape without
//! work, and index projection reads them one element at a time through `at()`.

use crate::extents::Extents;
use crate::tensor::{Element, Matrix, Storage, Tensor, Vector};

/// A container whose shape is an arbitrary [`Extents`].
pub trait TensorContainer<T: Element>: Send + Sync {
    fn extents(&self) -> Extents;

    /// Element at row-major flat index `index`.
    fn at(&self, index: usize) -> T;
}

/// A two-dimensional container.
pub trait MatrixContainer<T: Element>: Send + Sync {
    /// Number of rows.
    fn size1(&self) -> usize;

    /// Number of columns.
    fn size2(&self) -> usize;

    /// Element at row-major flat index `index`.
    fn at(&self, index: usize) -> T;
}

/// A one-dimensional container.
pub trait VectorContainer<T: Element>: Send + Sync {
    fn size(&self) -> usize;

    fn at(&self, index: usize) -> T;
}

/// A lazily evaluated matrix-valued operand, e.g. a product that has not been computed yet.
pub trait MatrixExpression<T: Element>: Send + Sync {
    fn size1(&self) -> usize;

    fn size2(&self) -> usize;

    /// Materializes the operand.
    fn eval(&self) -> Matrix<T>;

    /// Element at row-major flat index `index`.
    ///
    /// The default materializes the whole operand; implementors that can compute a single
    /// element should override it.
    fn at(&self, index: usize) -> T {
        self.eval().at(index)
    }
}

/// A lazily evaluated vector-valued operand.
pub trait VectorExpression<T: Element>: Send + Sync {
    fn size(&self) -> usize;

    /// Materializes the operand.
    fn eval(&self) -> Vector<T>;

    /// Element at index `index`. The default materializes the whole operand.
    fn at(&self, index: usize) -> T {
        self.eval().at(index)
    }
}

impl<T, S> TensorContainer<T> for Tensor<T, S>
where
    T: Element,
    S: Storage<T>,
{
    fn extents(&self) -> Extents {
        Tensor::extents(self).clone()
    }

    fn at(&self, index: usize) -> T {
        Tensor::at(self, index)
    }
}

impl<T: Element> MatrixContainer<T> for Matrix<T> {
    fn size1(&self) -> usize {
        self.rows()
    }

    fn size2(&self) -> usize {
        self.cols()
    }

    fn at(&self, index: usize) -> T {
        Matrix::at(self, index)
    }
}

impl<T: Element> VectorContainer<T> for Vector<T> {
    fn size(&self) -> usize {
        Vector::size(self)
    }

    fn at(&self, index: usize) -> T {
        Vector::at(self, index)
    }
}
