/// Space calculator — Mission
///
/// The refuel-then-check scenario, kept separate from stdout so it can
/// be driven from tests.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{FuelStatus, FuelTracker};

/// Starting fuel and a single refuel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MissionPlan {
    pub initial_fuel: f64, // default 50
    pub refuel: f64,       // default 60
}

impl Default for MissionPlan {
    fn default() -> Self {
        Self {
            initial_fuel: 50.0,
            refuel: 60.0,
        }
    }
}

/// Fuel after the refuel, and whether it is enough.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MissionOutcome {
    pub fuel: f64,
    pub status: FuelStatus,
}

pub fn run_mission(plan: &MissionPlan) -> MissionOutcome {
    let mut tracker = FuelTracker::new(plan.initial_fuel);
    let fuel = tracker.add_fuel(plan.refuel);
    let status = tracker.status();
    info!(fuel, ?status, "mission evaluated");
    MissionOutcome { fuel, status }
}
