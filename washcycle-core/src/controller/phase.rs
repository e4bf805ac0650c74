//! Cycle phases and collaborator faults

use core::fmt;

use crate::traits::{EngineError, PumpError};

/// Actuator step of a wash cycle, in dispatch order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CyclePhase {
    /// Pouring water for the load
    Filling,
    /// Tumbling at wash speed
    Washing,
    /// Releasing the water
    Draining,
    /// Spinning the drum dry
    Spinning,
}

impl CyclePhase {
    pub const fn label(&self) -> &'static str {
        match self {
            CyclePhase::Filling => "filling",
            CyclePhase::Washing => "washing",
            CyclePhase::Draining => "draining",
            CyclePhase::Spinning => "spinning",
        }
    }
}

/// Fault raised by a collaborator during a cycle
///
/// Faults are never recovered by the controller. Whatever was running when
/// the fault happened is left as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WashError {
    Pump { phase: CyclePhase, error: PumpError },
    Engine { phase: CyclePhase, error: EngineError },
}

impl WashError {
    /// Phase in which the fault occurred
    pub const fn phase(&self) -> CyclePhase {
        match self {
            WashError::Pump { phase, .. } | WashError::Engine { phase, .. } => *phase,
        }
    }
}

impl fmt::Display for WashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WashError::Pump { phase, error } => {
                write!(f, "water pump failed while {}: {}", phase.label(), error)
            }
            WashError::Engine { phase, error } => {
                write!(f, "engine failed while {}: {}", phase.label(), error)
            }
        }
    }
}
