//! Dirt sensor implementations

pub mod turbidity;

pub use turbidity::{AdcReader, CalibrationError, TurbidityCalibration, TurbiditySensor};
