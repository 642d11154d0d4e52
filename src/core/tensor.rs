use anyhow::{bail, Result};

use crate::core::errors::NetError;

/// Ordered 1-D sequence of values. Width is the number of elements.
#[derive(Clone)]
pub struct Tensor<T> {
    pub(crate) data: Vec<T>,
}

impl<T: Copy> Tensor<T> {
    pub(crate) fn init(data: Vec<T>) -> Tensor<T> {
        Tensor { data }
    }

    pub fn new_1d(data: &[T]) -> Result<Tensor<T>> {
        Ok(Tensor::init(data.to_vec()))
    }

    pub fn empty() -> Tensor<T> {
        Tensor::init(Vec::new())
    }

    // --- Data ---

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn numel(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub(crate) fn valid_width(&self, expected: usize) -> Result<()> {
        let actual = self.numel();

        if actual != expected {
            bail!(NetError::ShapeMismatch { expected, actual });
        }

        Ok(())
    }

    // --- Maps and Zips ---

    pub fn unary_map<R>(&self, f: impl Fn(T) -> R) -> Result<Tensor<R>> {
        let data = self.data.iter().map(|&elem| f(elem)).collect();

        Ok(Tensor { data })
    }

    pub fn binary_map<R>(&self, rhs: T, f: impl Fn(T, T) -> R) -> Result<Tensor<R>> {
        let data = self.data.iter().map(|&elem| f(elem, rhs)).collect();

        Ok(Tensor { data })
    }

    /// Elementwise combination of two tensors of equal width.
    pub fn zip<R>(&self, rhs: &Tensor<T>, f: impl Fn(T, T) -> R) -> Result<Tensor<R>> {
        rhs.valid_width(self.numel())?;

        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&lhs_elem, &rhs_elem)| f(lhs_elem, rhs_elem))
            .collect();

        Ok(Tensor { data })
    }
}

impl<T> FromIterator<T> for Tensor<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Tensor<T> {
        Tensor {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T: Copy + PartialEq> PartialEq for Tensor<T> {
    fn eq(&self, rhs: &Tensor<T>) -> bool {
        self.data == rhs.data
    }
}
