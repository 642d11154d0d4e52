mod elem_ops;
mod reduce_ops;

pub use reduce_ops::MaxProb;
