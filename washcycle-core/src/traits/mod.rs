//! Hardware abstraction traits
//!
//! These traits define the interface between the washing controller
//! and hardware-specific implementations.

pub mod detector;
pub mod engine;
pub mod pump;

pub use detector::DirtDetector;
pub use engine::{Engine, EngineError};
pub use pump::{PumpError, WaterPump};
