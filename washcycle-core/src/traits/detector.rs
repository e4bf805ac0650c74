//! Dirt detector trait

use crate::laundry::{LaundryBatch, Percentage};

/// Sensor that estimates how soiled a batch is
///
/// Reading is infallible from the controller's point of view. Drivers that
/// can fail must decide on a fallback reading themselves.
pub trait DirtDetector {
    /// Read the dirt degree of the batch (0 = clean, 100 = fully soiled)
    ///
    /// Takes `&mut self` because ADC reads typically require mutable access.
    fn detect_dirt_degree(&mut self, batch: &LaundryBatch) -> Percentage;
}

impl<T: DirtDetector + ?Sized> DirtDetector for &mut T {
    fn detect_dirt_degree(&mut self, batch: &LaundryBatch) -> Percentage {
        T::detect_dirt_degree(self, batch)
    }
}
