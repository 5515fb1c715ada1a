/// Space calculator — Core Domain Types
///
/// Pure data. Behaviour lives in `tracker`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fuel units required to reach the destination. Fixed, not configurable.
pub const DESTINATION_THRESHOLD: f64 = 100.0;

/// Accumulated fuel for a single mission.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FuelTracker {
    pub(crate) fuel: f64,
}

/// Outcome of the destination check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelStatus {
    Sufficient,
    Insufficient,
}

impl FuelStatus {
    pub fn from_reachable(reachable: bool) -> Self {
        if reachable {
            FuelStatus::Sufficient
        } else {
            FuelStatus::Insufficient
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            FuelStatus::Sufficient => "We have enough fuel to reach Mars!",
            FuelStatus::Insufficient => "Not enough fuel to reach Mars.",
        }
    }
}

impl fmt::Display for FuelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
