mod activation;
mod display;
mod errors;
mod layer;
mod network;
mod ops;
mod shape;
mod tensor;
mod unit;

pub use activation::Activation;
pub use errors::NetError;
pub use layer::Layer;
pub use network::Network;
pub use ops::MaxProb;
pub use shape::Shape;
pub use tensor::Tensor;
pub use unit::Unit;
