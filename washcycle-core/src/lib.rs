//! Board-agnostic control logic for the washing machine
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Laundry value types (batch, program selection, status report)
//! - Hardware abstraction traits (dirt detector, water pump, engine)
//! - Machine configuration (capacity limits, autodetect threshold)
//! - The washing controller that validates, resolves and dispatches

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]


#[macro_use]
mod fmt;

pub mod config;
pub mod controller;
pub mod laundry;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{ConfigError, MachineConfig};
pub use controller::{CyclePhase, WashError, WashingMachine};
pub use laundry::{
    ErrorCode, LaundryBatch, LaundryStatus, Material, Outcome, Percentage, PercentageError,
    Program, ProgramConfiguration,
};
pub use traits::{DirtDetector, Engine, EngineError, PumpError, WaterPump};
