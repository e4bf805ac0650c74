//! Water pump driver implementations

pub mod relay;

pub use relay::{RelayPump, RelayPumpConfig};
