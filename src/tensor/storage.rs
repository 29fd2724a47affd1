//! Storage abstraction for dense containers.
//!
//! A [`Tensor`](crate::tensor::Tensor) only needs its elements as one contiguous row-major
//! slice. `Vec<T>` covers data whose size is known at run time; `[T; N]` covers fixed-size data
//! that can live in a `const` item alongside a `StaticSlice`.

use crate::tensor::Element;
use std::fmt::Debug;

/// A trait for the contiguous memory behind a container.
pub trait Storage<T>: Clone + Debug + Send + Sync {
    /// Returns the data as an immutable slice.
    fn as_slice(&self) -> &[T];

    /// Returns the number of elements in the storage.
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns `true` if the storage contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Element> Storage<T> for Vec<T> {
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T: Element, const N: usize> Storage<T> for [T; N] {
    fn as_slice(&self) -> &[T] {
        self
    }
    fn len(&self) -> usize {
        N
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_storage() {
        let storage = vec![1.0, 2.0, 3.0];

        assert_eq!(Storage::as_slice(&storage), &[1.0, 2.0, 3.0]);
        assert_eq!(Storage::len(&storage), 3);
        assert!(!Storage::is_empty(&storage));
    }

    #[test]
    fn test_array_storage() {
        let storage = [1i32, 2, 3, 4];
        assert_eq!(Storage::len(&storage), 4);
        assert_eq!(Storage::as_slice(&storage)[3], 4);

        let empty: [f32; 0] = [];
        assert!(Storage::is_empty(&empty));
    }

    #[derive(Clone, Debug)]
    struct MockStorage {
        data: Vec<f32>,
    }

    impl Storage<f32> for MockStorage {
        fn as_slice(&self) -> &[f32] {
            &self.data
        }
    }

    #[test]
    fn test_storage_defaults() {
        let storage = MockStorage {
            data: vec![1.0, 2.0],
        };
        assert_eq!(storage.len(), 2);
        assert!(!storage.is_empty());

        let empty = MockStorage { data: vec![] };
        assert!(empty.is_empty());
    }
}
