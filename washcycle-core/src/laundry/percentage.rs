//! Dirt degree reading

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors when building a percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PercentageError {
    /// Value is above 100
    OutOfRange,
}

impl fmt::Display for PercentageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PercentageError::OutOfRange => f.write_str("percentage above 100"),
        }
    }
}

/// Integer percentage in the range 0-100
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Percentage(u8);

impl Percentage {
    pub const ZERO: Self = Self(0);
    pub const FULL: Self = Self(100);

    /// Create a percentage, rejecting values above 100
    pub const fn new(value: u8) -> Result<Self, PercentageError> {
        if value > 100 {
            Err(PercentageError::OutOfRange)
        } else {
            Ok(Self(value))
        }
    }

    /// Create a percentage, clamping values above 100
    pub const fn saturating(value: u8) -> Self {
        if value > 100 {
            Self::FULL
        } else {
            Self(value)
        }
    }

    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Percentage {
    type Error = PercentageError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Percentage> for u8 {
    fn from(p: Percentage) -> Self {
        p.0
    }
}
