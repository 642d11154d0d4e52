use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetError {
    #[error("{operation} requires a non-empty vector.")]
    InvalidInput { operation: &'static str },

    #[error("Size mismatch, expected {expected}, found {actual}.")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("Layer requires at least one unit.")]
    EmptyLayer,

    #[error("Network requires at least one layer.")]
    EmptyNetwork,
}
