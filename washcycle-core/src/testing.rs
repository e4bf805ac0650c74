//! Recording test doubles
//!
//! All doubles of one rig share a call log so ordering across
//! collaborators can be asserted.

use core::cell::RefCell;

use heapless::Vec;

use crate::laundry::{LaundryBatch, Percentage};
use crate::traits::{DirtDetector, Engine, EngineError, PumpError, WaterPump};

pub const MAX_CALLS: usize = 8;

/// One observed collaborator call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    DetectDirt(LaundryBatch),
    Pour(i32),
    RunWashing(u16),
    Release,
    Spin(u16),
}

#[derive(Debug, Default)]
pub struct CallLog {
    calls: RefCell<Vec<Call, MAX_CALLS>>,
}

impl CallLog {
    pub fn record(&self, call: Call) {
        self.calls
            .borrow_mut()
            .push(call)
            .expect("call log overflow");
    }

    pub fn calls(&self) -> Vec<Call, MAX_CALLS> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(*c)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.borrow().is_empty()
    }
}

pub struct FixedDetector<'a> {
    log: &'a CallLog,
    reading: Percentage,
}

impl<'a> FixedDetector<'a> {
    pub fn new(log: &'a CallLog, reading: u8) -> Self {
        Self {
            log,
            reading: Percentage::new(reading).expect("reading within 0-100"),
        }
    }
}

impl DirtDetector for FixedDetector<'_> {
    fn detect_dirt_degree(&mut self, batch: &LaundryBatch) -> Percentage {
        self.log.record(Call::DetectDirt(*batch));
        self.reading
    }
}

pub struct RecordingPump<'a> {
    log: &'a CallLog,
    pub fail_pour: Option<PumpError>,
    pub fail_release: Option<PumpError>,
}

impl<'a> RecordingPump<'a> {
    pub fn new(log: &'a CallLog) -> Self {
        Self {
            log,
            fail_pour: None,
            fail_release: None,
        }
    }
}

impl WaterPump for RecordingPump<'_> {
    fn pour(&mut self, weight_kg: i32) -> Result<(), PumpError> {
        self.log.record(Call::Pour(weight_kg));
        self.fail_pour.map_or(Ok(()), Err)
    }

    fn release(&mut self) -> Result<(), PumpError> {
        self.log.record(Call::Release);
        self.fail_release.map_or(Ok(()), Err)
    }
}

pub struct RecordingEngine<'a> {
    log: &'a CallLog,
    pub fail_washing: Option<EngineError>,
    pub fail_spin: Option<EngineError>,
}

impl<'a> RecordingEngine<'a> {
    pub fn new(log: &'a CallLog) -> Self {
        Self {
            log,
            fail_washing: None,
            fail_spin: None,
        }
    }
}

impl Engine for RecordingEngine<'_> {
    fn run_washing(&mut self, minutes: u16) -> Result<(), EngineError> {
        self.log.record(Call::RunWashing(minutes));
        self.fail_washing.map_or(Ok(()), Err)
    }

    fn spin(&mut self, minutes: u16) -> Result<(), EngineError> {
        self.log.record(Call::Spin(minutes));
        self.fail_spin.map_or(Ok(()), Err)
    }
}
