//! Relay-switched water handling
//!
//! Water comes in through a solenoid inlet valve and leaves through a drain
//! pump, each on its own relay output. There is no level sensor, so the
//! fill is timed from the load weight:
//!
//! ```text
//! fill time = weight_kg × litres_per_kg × fill_ms_per_litre
//! ```

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use washcycle_core::traits::{PumpError, WaterPump};

/// Relay pump configuration
#[derive(Debug, Clone)]
pub struct RelayPumpConfig {
    /// Water needed per kilogram of laundry
    pub litres_per_kg: u32,
    /// Inlet flow, as milliseconds per litre
    pub fill_ms_per_litre: u32,
    /// Largest fill the tub holds
    pub max_litres: u32,
    /// Time the drain pump runs to empty the drum
    pub drain_ms: u32,
}

impl Default for RelayPumpConfig {
    fn default() -> Self {
        Self {
            litres_per_kg: 6,
            fill_ms_per_litre: 6_000, // 10 L/min mains inlet
            max_litres: 60,
            drain_ms: 90_000,
        }
    }
}

/// Inlet valve and drain pump on two relay outputs
pub struct RelayPump<V, D, T> {
    inlet: V,
    drain: D,
    delay: T,
    config: RelayPumpConfig,
    /// Litres poured since the last drain
    water_litres: u32,
}

impl<V, D, T> RelayPump<V, D, T>
where
    V: OutputPin,
    D: OutputPin,
    T: DelayNs,
{
    /// Create a new relay pump
    ///
    /// Both outputs are switched off before the driver is handed out.
    pub fn new(inlet: V, drain: D, delay: T, config: RelayPumpConfig) -> Result<Self, PumpError> {
        let mut pump = Self {
            inlet,
            drain,
            delay,
            config,
            water_litres: 0,
        };
        pump.inlet.set_low().map_err(|_| PumpError::Valve)?;
        pump.drain.set_low().map_err(|_| PumpError::Drain)?;
        Ok(pump)
    }

    /// Litres currently in the drum
    pub fn water_litres(&self) -> u32 {
        self.water_litres
    }

    pub fn config(&self) -> &RelayPumpConfig {
        &self.config
    }

    /// Litres needed for a load, or `None` if the load cannot be filled
    pub fn litres_for(&self, weight_kg: i32) -> Option<u32> {
        let weight = u32::try_from(weight_kg).ok()?;
        let litres = weight.checked_mul(self.config.litres_per_kg)?;
        let total = self.water_litres.checked_add(litres)?;
        (total <= self.config.max_litres).then_some(litres)
    }

    /// Release the drivers
    pub fn free(self) -> (V, D, T) {
        (self.inlet, self.drain, self.delay)
    }
}

impl<V, D, T> WaterPump for RelayPump<V, D, T>
where
    V: OutputPin,
    D: OutputPin,
    T: DelayNs,
{
    fn pour(&mut self, weight_kg: i32) -> Result<(), PumpError> {
        let Some(litres) = self.litres_for(weight_kg) else {
            warn!("Refusing to pour for {} kg", weight_kg);
            return Err(PumpError::InvalidVolume);
        };
        if litres == 0 {
            return Ok(());
        }
        let fill_ms = litres
            .checked_mul(self.config.fill_ms_per_litre)
            .ok_or(PumpError::InvalidVolume)?;

        debug!("Filling {} L ({} ms)", litres, fill_ms);
        self.inlet.set_high().map_err(|_| PumpError::Valve)?;
        self.delay.delay_ms(fill_ms);
        self.inlet.set_low().map_err(|_| PumpError::Valve)?;

        self.water_litres += litres;
        Ok(())
    }

    fn release(&mut self) -> Result<(), PumpError> {
        debug!("Draining {} L", self.water_litres);
        self.drain.set_high().map_err(|_| PumpError::Drain)?;
        self.delay.delay_ms(self.config.drain_ms);
        self.drain.set_low().map_err(|_| PumpError::Drain)?;

        self.water_litres = 0;
        Ok(())
    }
}
