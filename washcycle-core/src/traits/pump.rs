//! Water pump trait

use core::fmt;

/// Errors that can occur with water handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PumpError {
    /// Requested volume cannot be poured (negative or above tank limit)
    InvalidVolume,
    /// Inlet valve could not be switched
    Valve,
    /// Drain pump could not be switched
    Drain,
    /// Water level did not reach the expected state
    LevelTimeout,
}

impl fmt::Display for PumpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            PumpError::InvalidVolume => "invalid water volume",
            PumpError::Valve => "inlet valve fault",
            PumpError::Drain => "drain pump fault",
            PumpError::LevelTimeout => "water level timeout",
        };
        f.write_str(msg)
    }
}

/// Water inlet and drain
pub trait WaterPump {
    /// Fill the drum with water for a load of `weight_kg`
    ///
    /// The weight is passed exactly as it was given to the controller.
    fn pour(&mut self, weight_kg: i32) -> Result<(), PumpError>;

    /// Drain all water from the drum
    fn release(&mut self) -> Result<(), PumpError>;
}

impl<T: WaterPump + ?Sized> WaterPump for &mut T {
    fn pour(&mut self, weight_kg: i32) -> Result<(), PumpError> {
        T::pour(self, weight_kg)
    }

    fn release(&mut self) -> Result<(), PumpError> {
        T::release(self)
    }
}
