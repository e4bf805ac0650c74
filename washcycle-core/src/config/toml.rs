//! TOML configuration loading
//!
//! Accepts a flat document; missing keys keep their defaults.
//!
//! ```toml
//! capacity_kg = 8
//! jeans_capacity_divisor = 2
//! autodetect_threshold = 50
//! ```

use super::types::{ConfigError, MachineConfig};

impl MachineConfig {
    /// Parse and validate a TOML machine configuration
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let config: MachineConfig = ::toml::from_str(input).map_err(|e| {
            #[cfg(feature = "defmt")]
            defmt::warn!("TOML parse error: {}", defmt::Display2Format(&e));
            #[cfg(not(feature = "defmt"))]
            let _ = e;
            ConfigError::Parse
        })?;
        config.validate()?;
        debug!(
            "Loaded machine config: capacity {} kg, jeans divisor {}, threshold {}",
            config.capacity_kg,
            config.jeans_capacity_divisor,
            config.autodetect_threshold
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(MachineConfig::from_toml(""), Ok(MachineConfig::default()));
    }

    #[test]
    fn test_overrides() {
        let config = MachineConfig::from_toml(
            "# compact drum\ncapacity_kg = 7\nautodetect_threshold = 60\n",
        )
        .unwrap();
        assert_eq!(config.capacity_kg, 7);
        assert_eq!(config.jeans_capacity_divisor, 2);
        assert_eq!(config.autodetect_threshold, 60);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert_eq!(
            MachineConfig::from_toml("drum_colour = \"white\"\n"),
            Err(ConfigError::Parse)
        );
    }

    #[test]
    fn test_malformed_document_rejected() {
        assert_eq!(
            MachineConfig::from_toml("capacity_kg = \n"),
            Err(ConfigError::Parse)
        );
        assert_eq!(
            MachineConfig::from_toml("[machine\ncapacity_kg = 7\n"),
            Err(ConfigError::Parse)
        );
    }

    #[test]
    fn test_invalid_value_rejected() {
        assert_eq!(
            MachineConfig::from_toml("capacity_kg = -1\n"),
            Err(ConfigError::InvalidCapacity)
        );
        assert_eq!(
            MachineConfig::from_toml("capacity_kg = \"eight\"\n"),
            Err(ConfigError::Parse)
        );
    }
}
