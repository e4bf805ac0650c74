//! Drum motor driver implementations

pub mod drum;

pub use drum::{DrumMotor, DrumMotorConfig, DrumState};
