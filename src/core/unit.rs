use anyhow::{bail, Result};
use num_traits::Float;

use crate::core::{activation::Activation, errors::NetError};
use crate::Tensor;

/// A single neuron: weighted sum of the input plus bias, through an activation.
#[derive(Debug, Clone)]
pub struct Unit<F> {
    weight: Tensor<F>,
    bias: F,
    activation: Activation,
}

impl<F: Float> Unit<F> {
    pub fn new(weight: &[F], bias: F, activation: Activation) -> Result<Unit<F>> {
        if weight.is_empty() {
            bail!(NetError::InvalidInput {
                operation: "Unit::new"
            });
        }

        Ok(Unit {
            weight: Tensor::new_1d(weight)?,
            bias,
            activation,
        })
    }

    pub fn identity(weight: &[F], bias: F) -> Result<Unit<F>> {
        Unit::new(weight, bias, Activation::Identity)
    }

    pub fn forward(&self, input: &Tensor<F>) -> Result<F> {
        let sum = self.weight.dot(input)? + self.bias;

        Ok(self.activate(sum))
    }

    pub fn activate(&self, x: F) -> F {
        self.activation.apply(x)
    }

    // --- Attributes ---

    pub fn size(&self) -> usize {
        self.weight.numel()
    }

    pub fn weight(&self) -> &Tensor<F> {
        &self.weight
    }

    pub fn bias(&self) -> F {
        self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn set_activation(&mut self, activation: Activation) {
        self.activation = activation;
    }
}
