use anyhow::Result;
use num_traits::Zero;
use std::ops::Add;

use crate::{core::errors::NetError, Tensor};

/// Position and value of the largest element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxProb<T> {
    pub index: usize,
    pub prob: T,
}

impl<T> Tensor<T>
where
    T: Copy,
{
    pub fn sum(&self) -> Result<T>
    where
        T: Zero + Add<Output = T>,
    {
        Ok(self.data.iter().fold(T::zero(), |acc, &elem| acc + elem))
    }

    /// First occurrence wins on ties.
    pub fn argmax_with_probability(&self) -> Result<MaxProb<T>>
    where
        T: PartialOrd,
    {
        let mut elems = self.data.iter().copied().enumerate();
        let first = elems.next().ok_or(NetError::InvalidInput {
            operation: "argmax_with_probability",
        })?;

        let (index, prob) = elems.fold(first, |best, curr| {
            if curr.1 > best.1 {
                curr
            } else {
                best
            }
        });

        Ok(MaxProb { index, prob })
    }
}
