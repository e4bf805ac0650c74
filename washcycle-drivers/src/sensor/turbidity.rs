//! Optical turbidity sensor
//!
//! Measures how much light passes through the wash water. Clear water gives
//! a high ADC reading; soiled water scatters light and the reading drops.
//! The reading is mapped linearly between two calibration points:
//!
//! ```text
//! raw >= clear_raw  →   0 %
//! raw <= dirty_raw  → 100 %
//! otherwise         → (clear_raw - raw) × 100 / (clear_raw - dirty_raw)
//! ```

use washcycle_core::laundry::{LaundryBatch, Percentage};
use washcycle_core::traits::DirtDetector;

/// ADC reading trait for platform abstraction
pub trait AdcReader {
    /// Read ADC value (12-bit, 0-4095)
    #[allow(clippy::result_unit_err)]
    fn read(&mut self) -> Result<u16, ()>;
}

/// Calibration rejected by the sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationError {
    /// Clear-water reading must be above the dirty-water reading
    Inverted,
    /// At least one sample per reading is needed
    NoSamples,
}

/// Calibration points for the turbidity sensor
#[derive(Debug, Clone)]
pub struct TurbidityCalibration {
    /// ADC reading in clean tap water
    pub clear_raw: u16,
    /// ADC reading in fully soiled water
    pub dirty_raw: u16,
    /// Samples averaged per reading
    pub samples: u8,
}

impl Default for TurbidityCalibration {
    fn default() -> Self {
        Self {
            clear_raw: 3_500,
            dirty_raw: 1_000,
            samples: 4,
        }
    }
}

/// Turbidity sensor on an ADC channel
pub struct TurbiditySensor<ADC> {
    adc: ADC,
    calibration: TurbidityCalibration,
}

impl<ADC: AdcReader> TurbiditySensor<ADC> {
    /// Create a new turbidity sensor
    pub fn new(adc: ADC, calibration: TurbidityCalibration) -> Result<Self, CalibrationError> {
        if calibration.clear_raw <= calibration.dirty_raw {
            return Err(CalibrationError::Inverted);
        }
        if calibration.samples == 0 {
            return Err(CalibrationError::NoSamples);
        }
        Ok(Self { adc, calibration })
    }

    /// Convert a raw ADC value to a dirt percentage
    pub fn raw_to_percentage(&self, raw: u16) -> Percentage {
        let clear = u32::from(self.calibration.clear_raw);
        let dirty = u32::from(self.calibration.dirty_raw);
        let raw = u32::from(raw);

        if raw >= clear {
            return Percentage::ZERO;
        }
        if raw <= dirty {
            return Percentage::FULL;
        }

        let pct = (clear - raw) * 100 / (clear - dirty);
        Percentage::saturating(pct as u8)
    }

    /// Average the configured number of samples
    fn sample(&mut self) -> Result<u16, ()> {
        let mut sum: u32 = 0;
        for _ in 0..self.calibration.samples {
            sum += u32::from(self.adc.read()?);
        }
        Ok((sum / u32::from(self.calibration.samples)) as u16)
    }
}

impl<ADC: AdcReader> DirtDetector for TurbiditySensor<ADC> {
    /// Read the dirt degree
    ///
    /// An ADC failure reads as fully soiled so autodetect falls back to the
    /// longest program.
    fn detect_dirt_degree(&mut self, batch: &LaundryBatch) -> Percentage {
        match self.sample() {
            Ok(raw) => {
                let pct = self.raw_to_percentage(raw);
                trace!(
                    "Turbidity raw {} -> {}% for {} kg",
                    raw,
                    pct.value(),
                    batch.weight_kg()
                );
                pct
            }
            Err(()) => {
                warn!("Turbidity ADC read failed, assuming fully soiled");
                Percentage::FULL
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use washcycle_core::laundry::Material;

    /// Mock ADC that returns a fixed value, or fails after `fail_after` reads
    struct MockAdc {
        value: u16,
        reads: u8,
        fail_after: Option<u8>,
    }

    impl MockAdc {
        fn new(value: u16) -> Self {
            Self {
                value,
                reads: 0,
                fail_after: None,
            }
        }
    }

    impl AdcReader for MockAdc {
        fn read(&mut self) -> Result<u16, ()> {
            if self.fail_after == Some(self.reads) {
                return Err(());
            }
            self.reads += 1;
            Ok(self.value)
        }
    }

    fn sensor(value: u16) -> TurbiditySensor<MockAdc> {
        TurbiditySensor::new(MockAdc::new(value), TurbidityCalibration::default()).unwrap()
    }

    const BATCH: LaundryBatch = LaundryBatch::new(5, Material::Cotton);

    #[test]
    fn test_calibration_endpoints() {
        let s = sensor(0);
        assert_eq!(s.raw_to_percentage(4095), Percentage::ZERO);
        assert_eq!(s.raw_to_percentage(3_500), Percentage::ZERO);
        assert_eq!(s.raw_to_percentage(1_000), Percentage::FULL);
        assert_eq!(s.raw_to_percentage(0), Percentage::FULL);
    }

    #[test]
    fn test_linear_mapping() {
        let s = sensor(0);
        // Midpoint of 3500..1000
        assert_eq!(s.raw_to_percentage(2_250).value(), 50);
        assert_eq!(s.raw_to_percentage(1_750).value(), 70);
    }

    #[test]
    fn test_detect_averages_samples() {
        let mut s = sensor(2_250);
        assert_eq!(s.detect_dirt_degree(&BATCH).value(), 50);
        assert_eq!(s.adc.reads, 4);
    }

    #[test]
    fn test_adc_failure_reads_fully_soiled() {
        let mut adc = MockAdc::new(3_500);
        adc.fail_after = Some(2);
        let mut s = TurbiditySensor::new(adc, TurbidityCalibration::default()).unwrap();
        assert_eq!(s.detect_dirt_degree(&BATCH), Percentage::FULL);
    }

    #[test]
    fn test_invalid_calibration() {
        let inverted = TurbidityCalibration {
            clear_raw: 1_000,
            dirty_raw: 3_500,
            ..TurbidityCalibration::default()
        };
        assert!(matches!(
            TurbiditySensor::new(MockAdc::new(0), inverted),
            Err(CalibrationError::Inverted)
        ));

        let no_samples = TurbidityCalibration {
            samples: 0,
            ..TurbidityCalibration::default()
        };
        assert!(matches!(
            TurbiditySensor::new(MockAdc::new(0), no_samples),
            Err(CalibrationError::NoSamples)
        ));
    }
}
