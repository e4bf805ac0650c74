//! Machine configuration
//!
//! Board-agnostic limits the controller decides against. Defaults match
//! the stock 8 kg drum.

#[cfg(feature = "toml")]
pub mod toml;
pub mod types;

pub use types::*;
