/// Space calculator — Tracker
///
/// Operations on `FuelTracker`. `add_fuel` and `try_add_fuel` are the
/// only mutators; everything else reads or ignores the fuel level.

use tracing::{debug, trace};

use crate::arithmetic::{checked_distance, distance, ensure_finite, meets_threshold};
use crate::domain::{FuelStatus, FuelTracker, DESTINATION_THRESHOLD};
use crate::error::{FuelError, Result};

impl FuelTracker {
    /// Create a tracker holding `initial_fuel`. Accepted as-is.
    pub fn new(initial_fuel: f64) -> Self {
        Self { fuel: initial_fuel }
    }

    /// Like `new`, but rejects NaN and infinities.
    pub fn try_new(initial_fuel: f64) -> Result<Self> {
        Ok(Self::new(ensure_finite("initial_fuel", initial_fuel)?))
    }

    pub fn fuel(&self) -> f64 {
        self.fuel
    }

    /// Add `amount` and return the new total.
    ///
    /// Negative amounts are not rejected and lower the total.
    pub fn add_fuel(&mut self, amount: f64) -> f64 {
        self.fuel += amount;
        debug!(amount, total = self.fuel, "fuel added");
        self.fuel
    }

    /// Checked `add_fuel`: the amount must be finite and non-negative,
    /// and the new total must stay finite. State is untouched on error.
    pub fn try_add_fuel(&mut self, amount: f64) -> Result<f64> {
        let amount = ensure_finite("amount", amount)?;
        if amount < 0.0 {
            return Err(FuelError::NegativeAmount(amount));
        }
        ensure_finite("fuel", self.fuel + amount)?;
        Ok(self.add_fuel(amount))
    }

    /// `speed * time`. Does not consult the fuel level.
    pub fn compute_distance(&self, speed: f64, time: f64) -> f64 {
        let d = distance(speed, time);
        trace!(speed, time, distance = d, "distance computed");
        d
    }

    pub fn try_compute_distance(&self, speed: f64, time: f64) -> Result<f64> {
        checked_distance(speed, time)
    }

    /// True iff fuel is at or above `DESTINATION_THRESHOLD`.
    pub fn can_reach_destination(&self) -> bool {
        let reachable = meets_threshold(self.fuel, DESTINATION_THRESHOLD);
        trace!(fuel = self.fuel, reachable, "destination check");
        reachable
    }

    pub fn status(&self) -> FuelStatus {
        FuelStatus::from_reachable(self.can_reach_destination())
    }
}
