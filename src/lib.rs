/*!
```console
  _   _                       _
 | |_(_)_ __  _   _ _ __ ___ | |_ __
 | __| | '_ \| | | | '_ ` _ \| | '_ \
 | |_| | | | | |_| | | | | | | | |_) |
  \__|_|_| |_|\__, |_| |_| |_|_| .__/
              |___/            |_|
```

Feedforward inference with units, fully-connected layers and stacked networks.
*/

mod core;
pub use core::{Activation, Layer, MaxProb, NetError, Network, Shape, Tensor, Unit};
pub type Res<U> = anyhow::Result<U>;
