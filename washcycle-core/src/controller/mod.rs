//! Washing controller
//!
//! Validates a batch, resolves the program to run and drives the pump and
//! engine in a fixed order. The controller is the only place with decision
//! logic; actuators just do what they are told.

pub mod phase;
pub mod washing;

pub use phase::{CyclePhase, WashError};
pub use washing::{capacity_for, check_weight, program_for_dirt, WashingMachine};
