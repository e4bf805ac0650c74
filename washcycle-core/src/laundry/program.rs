//! Wash programs and the requested configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Wash program
///
/// Each concrete program has a fixed duration. `Autodetect` is a request to
/// pick one from the dirt reading; it is resolved before any actuator runs
/// and never reaches the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Program {
    Short,
    Medium,
    Long,
    Autodetect,
}

impl Program {
    /// Wash (and spin) duration in minutes
    ///
    /// Returns 0 for `Autodetect`, which has no duration of its own.
    pub const fn time_in_minutes(&self) -> u16 {
        match self {
            Program::Short => 30,
            Program::Medium => 60,
            Program::Long => 120,
            Program::Autodetect => 0,
        }
    }

    /// Check if this program must be resolved from a dirt reading
    pub const fn is_autodetect(&self) -> bool {
        matches!(self, Program::Autodetect)
    }
}

/// Program requested by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProgramConfiguration {
    program: Program,
    spin: bool,
}

impl ProgramConfiguration {
    pub const fn new(program: Program, spin: bool) -> Self {
        Self { program, spin }
    }

    pub const fn program(&self) -> Program {
        self.program
    }

    /// Whether the drum spins after the water is released
    pub const fn spin(&self) -> bool {
        self.spin
    }
}
