//! Report output
//!
//! The text report is one line per quantity in a fixed order: velocity,
//! distance, fuel, each value with two decimals and its unit.

use crate::error::SimError;
use crate::simulation::{ScenarioOutcome, SimulationOutcome, SimulationResult};
use serde::Serialize;
use std::io::{self, Write};

const VELOCITY_LABEL: &str = "Corrected New Velocity";
const DISTANCE_LABEL: &str = "Corrected New Distance";
const FUEL_LABEL: &str = "Corrected Remaining Fuel";

/// Write the report lines for every quantity that was computed.
///
/// Failed quantities are skipped and returned so the caller can report them.
///
/// # Errors
/// Returns any I/O error from `out`.
pub fn write_text<'a, W: Write>(
    out: &mut W,
    outcome: &'a SimulationOutcome,
) -> io::Result<Vec<&'a SimError>> {
    if let Ok(velocity) = &outcome.velocity {
        writeln!(out, "{VELOCITY_LABEL}: {velocity}")?;
    }
    if let Ok(distance) = &outcome.distance {
        writeln!(out, "{DISTANCE_LABEL}: {distance}")?;
    }
    if let Ok(fuel) = &outcome.fuel {
        writeln!(out, "{FUEL_LABEL}: {fuel}")?;
    }
    Ok(outcome.failures().collect())
}

/// Format a complete result as the three report lines.
pub fn format_text(result: &SimulationResult) -> String {
    format!(
        "{VELOCITY_LABEL}: {}\n{DISTANCE_LABEL}: {}\n{FUEL_LABEL}: {}\n",
        result.velocity, result.distance, result.fuel
    )
}

/// Write each scenario's report preceded by a `[name]` header line.
///
/// # Errors
/// Returns any I/O error from `out`.
pub fn write_batch_text<'a, W: Write>(
    out: &mut W,
    outcomes: &'a [ScenarioOutcome],
) -> io::Result<Vec<(&'a str, &'a SimError)>> {
    let mut failures = Vec::new();
    for scenario in outcomes {
        writeln!(out, "[{}]", scenario.name)?;
        for err in write_text(out, &scenario.outcome)? {
            failures.push((scenario.name.as_str(), err));
        }
    }
    Ok(failures)
}

/// Write a complete result as a JSON object.
///
/// # Errors
/// Returns an I/O error if serialization or writing fails.
pub fn write_json<W: Write>(out: &mut W, result: &SimulationResult) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, result)?;
    writeln!(out)
}

#[derive(Serialize)]
struct NamedResult<'a> {
    name: &'a str,
    #[serde(flatten)]
    result: SimulationResult,
}

/// Write the successful scenarios as a JSON array of `{name, velocity_kmh, distance_km, fuel_kg}`.
///
/// Scenarios with any failed quantity are left out and their errors returned.
///
/// # Errors
/// Returns an I/O error if serialization or writing fails.
pub fn write_batch_json<'a, W: Write>(
    out: &mut W,
    outcomes: &'a [ScenarioOutcome],
) -> io::Result<Vec<(&'a str, &'a SimError)>> {
    let mut rows = Vec::new();
    let mut failures = Vec::new();
    for scenario in outcomes {
        let outcome = &scenario.outcome;
        match (&outcome.velocity, &outcome.distance, &outcome.fuel) {
            (Ok(velocity), Ok(distance), Ok(fuel)) => rows.push(NamedResult {
                name: &scenario.name,
                result: SimulationResult {
                    velocity: *velocity,
                    distance: *distance,
                    fuel: *fuel,
                },
            }),
            _ => failures.extend(outcome.failures().map(|err| (scenario.name.as_str(), err))),
        }
    }
    serde_json::to_writer_pretty(&mut *out, &rows)?;
    writeln!(out)?;
    Ok(failures)
}
