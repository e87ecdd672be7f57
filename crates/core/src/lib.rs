//! Vehicle Projection Core Library
//!
//! Computes single-interval projections for a simulated vehicle from a fixed
//! set of initial conditions:
//! - new velocity under constant acceleration (`v = u + a·t`, in SI units)
//! - new distance under constant velocity
//! - remaining fuel under a constant burn rate, floored at zero
//!
//! Every quantity carries its unit in its type, and every calculator
//! validates its inputs and returns [`SimError::InvalidUnitOrRange`] rather
//! than producing a wrong number.

// Core types and utilities
pub mod core_types;

pub mod config;
pub mod error;
pub mod physics;
pub mod report;
pub mod simulation;

// Re-export core types
pub use core_types::{
    Hours, Kilograms, KilogramsPerSecond, Kilometers, KilometersPerHour, MetersPerSecond,
    MetersPerSecondSquared, Seconds, Velocity,
};
pub use core_types::{
    parse_quantity, parse_speed_kmh, to_kilometers_per_hour, to_meters_per_second,
};

pub use config::{InputKey, SimulationConfig};
pub use error::SimError;
pub use physics::{compute_new_distance, compute_new_velocity, compute_remaining_fuel};
pub use simulation::{
    run_batch, Scenario, ScenarioOutcome, SimulationInputs, SimulationOutcome, SimulationResult,
};
