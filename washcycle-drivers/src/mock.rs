//! Mock HAL peripherals for driver tests

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin};

/// Output pin that remembers its level and can be told to fail
#[derive(Debug, Default)]
pub struct MockPin {
    pub high: bool,
    pub fail: bool,
    pub writes: u32,
}

impl MockPin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }
}

impl ErrorType for MockPin {
    type Error = ErrorKind;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        if self.fail {
            return Err(ErrorKind::Other);
        }
        self.writes += 1;
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        if self.fail {
            return Err(ErrorKind::Other);
        }
        self.writes += 1;
        self.high = true;
        Ok(())
    }
}

/// Delay that only adds up the requested time
#[derive(Default)]
pub struct MockDelay {
    pub total_ms: u64,
    pub calls: u32,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ms += u64::from(ns) / 1_000_000;
        self.calls += 1;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.total_ms += u64::from(ms);
        self.calls += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pin_is_low() {
        let mut pin = MockPin::default();
        assert!(!pin.high);
        assert!(!pin.fail);
        assert_eq!(pin.writes, 0);

        pin.set_high().unwrap();
        assert!(pin.high);
        assert_eq!(pin.writes, 1);
    }

    #[test]
    fn test_failing_pin() {
        let mut pin = MockPin::failing();
        assert_eq!(pin.set_high(), Err(ErrorKind::Other));
        assert_eq!(pin.writes, 0);
    }
}
