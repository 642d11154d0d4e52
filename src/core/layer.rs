use anyhow::{bail, Result};
use num_traits::Float;
use tracing::debug;

use crate::core::{activation::Activation, errors::NetError, shape::Shape, unit::Unit};
use crate::Tensor;

/// Fully-connected layer. Every unit reads the same input width and shares
/// the layer's activation.
#[derive(Debug, Clone)]
pub struct Layer<F> {
    units: Vec<Unit<F>>,
    activation: Activation,
}

impl<F: Float> Layer<F> {
    /// Builds a `tanh` layer.
    pub fn new(units: &[Unit<F>]) -> Result<Layer<F>> {
        Layer::with_activation(units, Activation::Tanh)
    }

    /// Copies `units` into the layer and overwrites their activation with `activation`.
    pub fn with_activation(units: &[Unit<F>], activation: Activation) -> Result<Layer<F>> {
        let expected = units.first().ok_or(NetError::EmptyLayer)?.size();

        if let Some(unit) = units.iter().find(|unit| unit.size() != expected) {
            bail!(NetError::ShapeMismatch {
                expected,
                actual: unit.size(),
            });
        }

        let units = units
            .iter()
            .map(|unit| {
                let mut unit = unit.clone();
                unit.set_activation(activation);
                unit
            })
            .collect::<Vec<Unit<F>>>();

        debug!(
            input = expected,
            output = units.len(),
            %activation,
            "built layer"
        );

        Ok(Layer { units, activation })
    }

    pub fn forward(&self, input: &Tensor<F>) -> Result<Tensor<F>> {
        input.valid_width(self.input_width())?;

        self.units
            .iter()
            .map(|unit| unit.forward(input))
            .collect::<Result<Tensor<F>>>()
    }

    // --- Attributes ---

    pub fn shape(&self) -> Shape {
        Shape::new(self.input_width(), self.size())
    }

    pub fn input_width(&self) -> usize {
        self.units[0].size()
    }

    pub fn size(&self) -> usize {
        self.units.len()
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn units(&self) -> &[Unit<F>] {
        &self.units
    }
}
