//! Washing machine controller
//!
//! A cycle runs in a fixed order:
//!
//! ```text
//! check weight ─► (detect dirt) ─► pour ─► run washing ─► release ─► (spin)
//! ```
//!
//! An overweight batch is refused before anything moves. Dirt is only
//! detected for the autodetect program. Spin only runs when requested and
//! uses the same duration as the wash.

use super::phase::{CyclePhase, WashError};
use crate::config::{ConfigError, MachineConfig};
use crate::laundry::{
    ErrorCode, LaundryBatch, LaundryStatus, Material, Percentage, Program, ProgramConfiguration,
};
use crate::traits::{DirtDetector, Engine, WaterPump};

/// Maximum batch weight for a material
pub fn capacity_for(material: Material, config: &MachineConfig) -> i32 {
    if material.has_reduced_capacity() {
        config.capacity_kg / config.jeans_capacity_divisor.max(1)
    } else {
        config.capacity_kg
    }
}

/// Check a batch against its material capacity
///
/// Only overweight is refused. Zero and negative weights pass.
pub fn check_weight(batch: &LaundryBatch, config: &MachineConfig) -> Result<(), ErrorCode> {
    if batch.weight_kg() > capacity_for(batch.material(), config) {
        Err(ErrorCode::TooHeavy)
    } else {
        Ok(())
    }
}

/// Program chosen by autodetect for a dirt reading
///
/// Readings up to and including the threshold get the medium program,
/// anything dirtier gets the long one.
pub fn program_for_dirt(dirt: Percentage, config: &MachineConfig) -> Program {
    if dirt.value() <= config.autodetect_threshold {
        Program::Medium
    } else {
        Program::Long
    }
}

/// Washing machine controller
///
/// Owns its three collaborators for its whole lifetime. Pass `&mut` handles
/// to keep using the drivers elsewhere.
#[derive(Debug)]
pub struct WashingMachine<D, E, P> {
    detector: D,
    engine: E,
    pump: P,
    config: MachineConfig,
}

impl<D, E, P> WashingMachine<D, E, P>
where
    D: DirtDetector,
    E: Engine,
    P: WaterPump,
{
    /// Create a controller with the stock machine configuration
    pub fn new(detector: D, engine: E, pump: P) -> Self {
        Self {
            detector,
            engine,
            pump,
            config: MachineConfig::default(),
        }
    }

    /// Create a controller with a custom machine configuration
    pub fn with_config(
        detector: D,
        engine: E,
        pump: P,
        config: MachineConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            detector,
            engine,
            pump,
            config,
        })
    }

    /// Run one wash cycle
    ///
    /// Returns a failure status (and touches nothing) when the batch is too
    /// heavy. A pump or engine fault aborts the cycle on the spot and is
    /// returned as `Err`; no cleanup is attempted.
    pub fn start(
        &mut self,
        batch: &LaundryBatch,
        request: &ProgramConfiguration,
    ) -> Result<LaundryStatus, WashError> {
        if let Err(code) = check_weight(batch, &self.config) {
            warn!(
                "Batch of {} kg rejected, limit is {} kg",
                batch.weight_kg(),
                capacity_for(batch.material(), &self.config)
            );
            return Ok(LaundryStatus::failure(code));
        }

        let program = self.effective_program(batch, request.program());

        info!(
            "Starting {} min cycle, spin: {}",
            program.time_in_minutes(),
            request.spin()
        );

        match self.dispatch(batch, program, request.spin()) {
            Ok(()) => {
                info!("Cycle complete");
                Ok(LaundryStatus::success(program))
            }
            Err(e) => {
                error!("Cycle aborted: {}", e);
                Err(e)
            }
        }
    }

    fn effective_program(&mut self, batch: &LaundryBatch, requested: Program) -> Program {
        if !requested.is_autodetect() {
            return requested;
        }

        let dirt = self.detector.detect_dirt_degree(batch);
        let program = program_for_dirt(dirt, &self.config);
        debug!("Dirt degree {}% resolved to {}", dirt.value(), program);
        program
    }

    fn dispatch(
        &mut self,
        batch: &LaundryBatch,
        program: Program,
        spin: bool,
    ) -> Result<(), WashError> {
        let minutes = program.time_in_minutes();

        trace!("Phase: {}", CyclePhase::Filling);
        self.pump
            .pour(batch.weight_kg())
            .map_err(|error| WashError::Pump {
                phase: CyclePhase::Filling,
                error,
            })?;

        trace!("Phase: {}", CyclePhase::Washing);
        self.engine
            .run_washing(minutes)
            .map_err(|error| WashError::Engine {
                phase: CyclePhase::Washing,
                error,
            })?;

        trace!("Phase: {}", CyclePhase::Draining);
        self.pump.release().map_err(|error| WashError::Pump {
            phase: CyclePhase::Draining,
            error,
        })?;

        if spin {
            trace!("Phase: {}", CyclePhase::Spinning);
            self.engine.spin(minutes).map_err(|error| WashError::Engine {
                phase: CyclePhase::Spinning,
                error,
            })?;
        }

        Ok(())
    }
}

impl<D, E, P> WashingMachine<D, E, P> {
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn detector(&self) -> &D {
        &self.detector
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn pump(&self) -> &P {
        &self.pump
    }

    /// Take the collaborators back
    pub fn into_parts(self) -> (D, E, P) {
        (self.detector, self.engine, self.pump)
    }
}
