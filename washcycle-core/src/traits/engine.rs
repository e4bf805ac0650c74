//! Drum engine trait

use core::fmt;

/// Errors that can occur with engine operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EngineError {
    /// Duration of zero minutes requested
    InvalidDuration,
    /// Motor output could not be driven
    Drive,
    /// Safety interlock (door open) prevented operation
    Interlock,
    /// Drum did not turn
    Stall,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            EngineError::InvalidDuration => "invalid duration",
            EngineError::Drive => "motor drive fault",
            EngineError::Interlock => "interlock open",
            EngineError::Stall => "drum stalled",
        };
        f.write_str(msg)
    }
}

/// Drum motor
///
/// Both operations block until the requested time has elapsed or a fault
/// occurs.
pub trait Engine {
    /// Tumble the drum at wash speed
    fn run_washing(&mut self, minutes: u16) -> Result<(), EngineError>;

    /// Spin the drum at high speed to extract water
    fn spin(&mut self, minutes: u16) -> Result<(), EngineError>;
}

impl<T: Engine + ?Sized> Engine for &mut T {
    fn run_washing(&mut self, minutes: u16) -> Result<(), EngineError> {
        T::run_washing(self, minutes)
    }

    fn spin(&mut self, minutes: u16) -> Result<(), EngineError> {
        T::spin(self, minutes)
    }
}
