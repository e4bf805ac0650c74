//! Configuration type definitions

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stock drum capacity in kilograms
pub const DEFAULT_CAPACITY_KG: i32 = 8;

/// Capacity divisor applied to jeans
pub const DEFAULT_JEANS_CAPACITY_DIVISOR: i32 = 2;

/// Highest dirt degree that still resolves to the medium program
pub const DEFAULT_AUTODETECT_THRESHOLD: u8 = 50;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Input is not valid TOML or has unknown keys
    Parse,
    /// Capacity must be positive
    InvalidCapacity,
    /// Divisor must be at least 1
    InvalidDivisor,
    /// Threshold must be within 0-100
    InvalidThreshold,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ConfigError::Parse => "malformed configuration",
            ConfigError::InvalidCapacity => "capacity_kg must be positive",
            ConfigError::InvalidDivisor => "jeans_capacity_divisor must be at least 1",
            ConfigError::InvalidThreshold => "autodetect_threshold must be at most 100",
        };
        f.write_str(msg)
    }
}

/// Limits used by the washing controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct MachineConfig {
    /// Maximum batch weight (kg) for regular materials
    pub capacity_kg: i32,
    /// Jeans may load at most `capacity_kg / jeans_capacity_divisor`
    pub jeans_capacity_divisor: i32,
    /// Dirt degree at or below which autodetect picks the medium program
    pub autodetect_threshold: u8,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            capacity_kg: DEFAULT_CAPACITY_KG,
            jeans_capacity_divisor: DEFAULT_JEANS_CAPACITY_DIVISOR,
            autodetect_threshold: DEFAULT_AUTODETECT_THRESHOLD,
        }
    }
}

impl MachineConfig {
    /// Check that all limits are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity_kg <= 0 {
            return Err(ConfigError::InvalidCapacity);
        }
        if self.jeans_capacity_divisor < 1 {
            return Err(ConfigError::InvalidDivisor);
        }
        if self.autodetect_threshold > 100 {
            return Err(ConfigError::InvalidThreshold);
        }
        Ok(())
    }
}
