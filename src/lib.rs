#![forbid(unsafe_code)]

//! Space calculator: fuel tracking, distance, and the destination check.

pub mod arithmetic;
pub mod domain;
pub mod error;
pub mod tracker;
pub mod mission;

pub use domain::{FuelStatus, FuelTracker, DESTINATION_THRESHOLD};
pub use error::{FuelError, Result};
pub use mission::{run_mission, MissionOutcome, MissionPlan};
