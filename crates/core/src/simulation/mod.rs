//! Projection run over a fixed set of initial conditions
//!
//! `SimulationInputs` holds the six named constants. A run feeds them into the
//! three calculators independently and collects a `SimulationOutcome`, which
//! keeps each quantity's result separately so one invalid input does not hide
//! the others.

use crate::core_types::units::{Kilograms, Kilometers, KilometersPerHour};
use crate::error::SimError;
use crate::physics::{compute_new_distance, compute_new_velocity, compute_remaining_fuel};
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

/// The initial conditions of a projection
///
/// Values are kept as raw numbers exactly as configured; each calculator
/// validates the ones it uses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationInputs {
    /// Initial velocity (km/h)
    pub initial_velocity_kmh: f64,
    /// Constant acceleration (m/s²)
    pub acceleration_mps2: f64,
    /// Elapsed time (s)
    pub time_s: f64,
    /// Initial distance (km)
    pub initial_distance_km: f64,
    /// Initial fuel (kg)
    pub initial_fuel_kg: f64,
    /// Fuel burn rate (kg/s)
    pub burn_rate_kg_per_s: f64,
}

impl SimulationInputs {
    /// Reference scenario: 10000 km/h, 3 m/s² for one hour, 5000 kg of fuel at 0.5 kg/s
    pub const REFERENCE: SimulationInputs = SimulationInputs {
        initial_velocity_kmh: 10_000.0,
        acceleration_mps2: 3.0,
        time_s: 3600.0,
        initial_distance_km: 0.0,
        initial_fuel_kg: 5000.0,
        burn_rate_kg_per_s: 0.5,
    };

    /// Run the three calculators against these inputs.
    pub fn run(&self) -> SimulationOutcome {
        let outcome = SimulationOutcome {
            velocity: compute_new_velocity(
                self.initial_velocity_kmh,
                self.acceleration_mps2,
                self.time_s,
            ),
            distance: compute_new_distance(
                self.initial_distance_km,
                self.initial_velocity_kmh,
                self.time_s,
            ),
            fuel: compute_remaining_fuel(
                self.burn_rate_kg_per_s,
                self.time_s,
                self.initial_fuel_kg,
            ),
        };
        debug!(failures = outcome.failures().count(), "simulation run complete");
        outcome
    }
}

impl Default for SimulationInputs {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// The three projected quantities of a fully successful run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationResult {
    #[serde(rename = "velocity_kmh")]
    pub velocity: KilometersPerHour,
    #[serde(rename = "distance_km")]
    pub distance: Kilometers,
    #[serde(rename = "fuel_kg")]
    pub fuel: Kilograms,
}

/// Per-quantity results of a run
#[derive(Debug)]
pub struct SimulationOutcome {
    pub velocity: Result<KilometersPerHour, SimError>,
    pub distance: Result<Kilometers, SimError>,
    pub fuel: Result<Kilograms, SimError>,
}

impl SimulationOutcome {
    /// Errors from the failed calculators, in report order (velocity, distance, fuel)
    pub fn failures(&self) -> impl Iterator<Item = &SimError> {
        [
            self.velocity.as_ref().err(),
            self.distance.as_ref().err(),
            self.fuel.as_ref().err(),
        ]
        .into_iter()
        .flatten()
    }

    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }

    /// Collapse into a single result.
    ///
    /// # Errors
    /// Returns the first failure in report order.
    pub fn into_result(self) -> Result<SimulationResult, SimError> {
        Ok(SimulationResult {
            velocity: self.velocity?,
            distance: self.distance?,
            fuel: self.fuel?,
        })
    }
}

/// A named set of inputs for batch runs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scenario {
    pub name: String,
    pub inputs: SimulationInputs,
}

/// Outcome of one scenario in a batch
#[derive(Debug)]
pub struct ScenarioOutcome {
    pub name: String,
    pub outcome: SimulationOutcome,
}

/// Run every scenario, in parallel, returning outcomes in input order.
pub fn run_batch(scenarios: &[Scenario]) -> Vec<ScenarioOutcome> {
    scenarios
        .par_iter()
        .map(|scenario| ScenarioOutcome {
            name: scenario.name.clone(),
            outcome: scenario.inputs.run(),
        })
        .collect()
}
