//! Relay-driven drum motor
//!
//! Classic two-relay washer motor wiring:
//! - `run` switches mains to the motor
//! - `speed` selects the high-speed winding for spinning
//!
//! The speed relay is only switched while the motor is off, and the drum is
//! given `coast_ms` to stop after every run.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use washcycle_core::traits::{Engine, EngineError};

const MS_PER_MINUTE: u32 = 60_000;

/// Drum motor configuration
#[derive(Debug, Clone)]
pub struct DrumMotorConfig {
    /// Wait after switching the motor off before the next command
    pub coast_ms: u32,
}

impl Default for DrumMotorConfig {
    fn default() -> Self {
        Self { coast_ms: 2_000 }
    }
}

/// Drum motor state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DrumState {
    /// Motor off
    #[default]
    Stopped,
    /// Tumbling at wash speed
    Washing,
    /// High-speed spin
    Spinning,
}

/// Drum motor on a run relay and a speed-select relay
pub struct DrumMotor<R, S, T> {
    run: R,
    speed: S,
    delay: T,
    config: DrumMotorConfig,
    state: DrumState,
}

impl<R, S, T> DrumMotor<R, S, T>
where
    R: OutputPin,
    S: OutputPin,
    T: DelayNs,
{
    /// Create a new drum motor, forcing both relays off
    pub fn new(run: R, speed: S, delay: T, config: DrumMotorConfig) -> Result<Self, EngineError> {
        let mut motor = Self {
            run,
            speed,
            delay,
            config,
            state: DrumState::Stopped,
        };
        motor.run.set_low().map_err(|_| EngineError::Drive)?;
        motor.speed.set_low().map_err(|_| EngineError::Drive)?;
        Ok(motor)
    }

    pub fn state(&self) -> DrumState {
        self.state
    }

    /// Release the drivers
    pub fn free(self) -> (R, S, T) {
        (self.run, self.speed, self.delay)
    }

    fn run_for(&mut self, state: DrumState, minutes: u16) -> Result<(), EngineError> {
        if minutes == 0 {
            return Err(EngineError::InvalidDuration);
        }

        let high_speed = state == DrumState::Spinning;
        if high_speed {
            self.speed.set_high().map_err(|_| EngineError::Drive)?;
        } else {
            self.speed.set_low().map_err(|_| EngineError::Drive)?;
        }

        debug!("Drum {} for {} min", state, minutes);
        self.run.set_high().map_err(|_| EngineError::Drive)?;
        self.state = state;

        // One minute at a time keeps every delay inside u32 milliseconds
        for _ in 0..minutes {
            self.delay.delay_ms(MS_PER_MINUTE);
        }

        self.run.set_low().map_err(|_| EngineError::Drive)?;
        self.state = DrumState::Stopped;
        self.delay.delay_ms(self.config.coast_ms);

        if high_speed {
            self.speed.set_low().map_err(|_| EngineError::Drive)?;
        }
        Ok(())
    }
}

impl<R, S, T> Engine for DrumMotor<R, S, T>
where
    R: OutputPin,
    S: OutputPin,
    T: DelayNs,
{
    fn run_washing(&mut self, minutes: u16) -> Result<(), EngineError> {
        self.run_for(DrumState::Washing, minutes)
    }

    fn spin(&mut self, minutes: u16) -> Result<(), EngineError> {
        self.run_for(DrumState::Spinning, minutes)
    }
}
