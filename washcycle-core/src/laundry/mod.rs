//! Laundry value types
//!
//! Immutable values passed into and returned from the controller. All of
//! them compare structurally so whole status reports can be asserted.

pub mod batch;
pub mod percentage;
pub mod program;
pub mod status;

pub use batch::{LaundryBatch, Material};
pub use percentage::{Percentage, PercentageError};
pub use program::{Program, ProgramConfiguration};
pub use status::{ErrorCode, LaundryStatus, Outcome};
