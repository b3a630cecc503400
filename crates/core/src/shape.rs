//! Tensor shapes.

use serde::{Deserialize, Serialize};

/// Ordered sequence of non-negative dimension sizes.
///
/// Rank 0 (no dimensions) is a valid shape describing a scalar: it holds
/// exactly one element. Dimensions of size 0 are also valid and yield an
/// empty tensor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    dims: Vec<usize>,
}

impl Shape {
    /// Create a shape from dimension sizes. `vec![]` is the scalar shape.
    #[inline]
    pub fn new(dims: Vec<usize>) -> Self {
        Self { dims }
    }

    /// The rank-0 scalar shape.
    #[inline]
    pub fn scalar() -> Self {
        Self { dims: Vec::new() }
    }

    /// Number of dimensions.
    #[inline]
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Dimension sizes in order.
    #[inline]
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Total number of elements (product of dimensions; 1 for rank 0).
    #[inline]
    pub fn element_count(&self) -> usize {
        self.dims.iter().product()
    }
}

impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Shape::new(dims)
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, d) in self.dims.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", d)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_shape_has_one_element() {
        let s = Shape::scalar();
        assert_eq!(s.rank(), 0);
        assert_eq!(s.element_count(), 1);
    }

    #[test]
    fn test_element_count_is_product() {
        let s = Shape::new(vec![2, 3, 4]);
        assert_eq!(s.rank(), 3);
        assert_eq!(s.element_count(), 24);
    }

    #[test]
    fn test_zero_dim_gives_empty_tensor() {
        let s = Shape::new(vec![4, 0, 2]);
        assert_eq!(s.element_count(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Shape::new(vec![1, 3, 224, 224]).to_string(), "[1,3,224,224]");
        assert_eq!(Shape::scalar().to_string(), "[]");
    }
}
