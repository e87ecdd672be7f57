//! Constant burn-rate fuel projection
//!
//! Remaining fuel is floored at zero: burning longer than the tank allows
//! means the tank is empty, not that it holds negative fuel.

use crate::core_types::units::{Kilograms, KilogramsPerSecond, Seconds};
use crate::error::SimError;
use tracing::debug;

/// Calculate fuel remaining after burning at a constant rate.
///
/// `remaining = max(0, initial − rate × time)`
///
/// # Arguments
/// * `burn_rate_kg_per_s` - Fuel burn rate (kg/s, finite, ≥ 0)
/// * `time_seconds` - Elapsed time (s, finite, ≥ 0)
/// * `initial_fuel_kg` - Fuel at the start (kg, finite, ≥ 0)
///
/// # Errors
/// Returns `InvalidUnitOrRange` if any input is not finite or is negative.
pub fn compute_remaining_fuel(
    burn_rate_kg_per_s: f64,
    time_seconds: f64,
    initial_fuel_kg: f64,
) -> Result<Kilograms, SimError> {
    let burn_rate = KilogramsPerSecond::try_new("burn rate", burn_rate_kg_per_s)?;
    let time = Seconds::try_new("elapsed time", time_seconds)?;
    let initial = Kilograms::try_new("initial fuel", initial_fuel_kg)?;

    let used = burn_rate * time;
    let remaining = initial.saturating_sub(used);
    if used > initial {
        debug!(%initial, %used, "fuel exhausted, clamping remaining fuel to zero");
    }
    debug!(%burn_rate, %time, %initial, %remaining, "computed remaining fuel");
    Ok(remaining)
}
