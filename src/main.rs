/// Space calculator — demonstration
///
/// Starts with 50 units, refuels 60, and prints whether the mission
/// can reach its destination.

use space_calculator::{run_mission, MissionPlan};

fn main() {
    // Diagnostics go to stderr so stdout carries only the verdict.
    tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_writer(std::io::stderr)
        .init();

    let outcome = run_mission(&MissionPlan::default());
    println!("{}", outcome.status);
}
