use crate::tensor::Element;

/// A dense one-dimensional container.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector<T: Element> {
    data: Vec<T>,
}

impl<T: Element> Vector<T> {
    pub fn zeros(size: usize) -> Self {
        Self {
            data: vec![T::zero(); size],
        }
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// # Panics
    ///
    /// Panics if `index >= self.size()`.
    pub fn at(&self, index: usize) -> T {
        self.data[index]
    }
}

impl<T: Element> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector() {
        let v = Vector::from(vec![1.5, 2.5]);
        assert_eq!(v.size(), 2);
        assert_eq!(v.at(1), 2.5);
        assert_eq!(Vector::<f64>::zeros(3).data(), &[0.0; 3]);
    }
}
