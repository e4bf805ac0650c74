//! Laundry batch descriptor

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fabric of the load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Material {
    #[default]
    Cotton,
    /// Heavy when wet; only half the drum capacity is allowed
    Jeans,
    Wool,
    Synthetic,
    Delicate,
}

impl Material {
    /// Check if this material runs with a reduced capacity limit
    pub const fn has_reduced_capacity(&self) -> bool {
        matches!(self, Material::Jeans)
    }
}

/// One load of laundry
///
/// The weight is kept exactly as given. Negative values are not rejected
/// here or by the controller; they reach [`WaterPump::pour`] unchanged and
/// it is up to the pump implementation to refuse them.
///
/// [`WaterPump::pour`]: crate::traits::WaterPump::pour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LaundryBatch {
    weight_kg: i32,
    material: Material,
}

impl LaundryBatch {
    /// Create a batch from its weight in kilograms and material
    pub const fn new(weight_kg: i32, material: Material) -> Self {
        Self {
            weight_kg,
            material,
        }
    }

    /// Weight in kilograms, as given
    pub const fn weight_kg(&self) -> i32 {
        self.weight_kg
    }

    pub const fn material(&self) -> Material {
        self.material
    }
}
