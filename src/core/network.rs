use anyhow::{bail, Result};
use num_traits::Float;
use tracing::debug;

use crate::core::{errors::NetError, layer::Layer, shape::Shape};
use crate::Tensor;

/// Linear stack of fully-connected layers.
#[derive(Debug, Clone)]
pub struct Network<F> {
    layers: Vec<Layer<F>>,
}

impl<F: Float> Network<F> {
    pub fn new(layers: &[Layer<F>]) -> Result<Network<F>> {
        if layers.is_empty() {
            bail!(NetError::EmptyNetwork);
        }

        for pair in layers.windows(2) {
            let (prev, next) = (pair[0].shape(), pair[1].shape());

            if !prev.feeds(&next) {
                bail!(NetError::ShapeMismatch {
                    expected: prev.output,
                    actual: next.input,
                });
            }
        }

        let network = Network {
            layers: layers.to_vec(),
        };
        debug!(depth = network.depth(), shape = %network.shape(), "built network");

        Ok(network)
    }

    pub fn forward(&self, input: &Tensor<F>) -> Result<Tensor<F>> {
        self.layers
            .iter()
            .enumerate()
            .try_fold(input.clone(), |hidden, (depth, layer)| {
                debug!(depth, width = hidden.numel(), "forward");
                layer.forward(&hidden)
            })
    }

    // --- Attributes ---

    pub fn shape(&self) -> Shape {
        let first = &self.layers[0];
        let last = &self.layers[self.layers.len() - 1];

        Shape::new(first.input_width(), last.size())
    }

    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    pub fn layers(&self) -> &[Layer<F>] {
        &self.layers
    }
}
