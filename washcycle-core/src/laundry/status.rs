//! Status report returned by a wash cycle

use super::program::Program;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Domain error code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ErrorCode {
    NoError,
    /// Batch exceeds the capacity for its material
    TooHeavy,
}

/// Overall result of a cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    Success,
    Failure,
}

/// Final report of one `start` call
///
/// Only buildable through [`LaundryStatus::success`] and
/// [`LaundryStatus::failure`], so `run_program` is set exactly when the
/// outcome is a success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LaundryStatus {
    error_code: ErrorCode,
    result: Outcome,
    run_program: Option<Program>,
}

impl LaundryStatus {
    /// Successful cycle that ran `program`
    pub const fn success(program: Program) -> Self {
        Self {
            error_code: ErrorCode::NoError,
            result: Outcome::Success,
            run_program: Some(program),
        }
    }

    /// Cycle refused before any actuator ran
    pub const fn failure(error_code: ErrorCode) -> Self {
        Self {
            error_code,
            result: Outcome::Failure,
            run_program: None,
        }
    }

    pub const fn error_code(&self) -> ErrorCode {
        self.error_code
    }

    pub const fn result(&self) -> Outcome {
        self.result
    }

    /// Program actually executed, `None` on failure
    pub const fn run_program(&self) -> Option<Program> {
        self.run_program
    }

    pub const fn is_success(&self) -> bool {
        matches!(self.result, Outcome::Success)
    }
}
