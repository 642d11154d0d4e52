use anyhow::Result;
use num_traits::{Float, Zero};
use std::ops::{Add, Mul};

use crate::Tensor;

impl<T> Tensor<T>
where
    T: Copy + Zero + Add<Output = T> + Mul<Output = T>,
{
    pub fn dot(&self, rhs: &Tensor<T>) -> Result<T> {
        self.zip(rhs, |l, r| l * r)?.sum()
    }
}

// --- Operations for floats ---

impl<F> Tensor<F>
where
    F: Float,
{
    pub fn exp(&self) -> Result<Tensor<F>> {
        self.unary_map(|elem| elem.exp())
    }

    /// Normalises into a probability distribution. Empty input is returned as is.
    pub fn softmax(&self) -> Result<Tensor<F>> {
        if self.is_empty() {
            return Ok(self.clone());
        }

        let exp = self.exp()?;
        let sum = exp.sum()?;

        exp.binary_map(sum, |elem, sum| elem / sum)
    }
}
