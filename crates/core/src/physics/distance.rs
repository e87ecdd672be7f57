//! Constant-velocity distance projection

use crate::core_types::units::{Kilometers, KilometersPerHour, Seconds};
use crate::error::SimError;
use tracing::debug;

/// Calculate the distance covered after `time_seconds` at a constant velocity.
///
/// `distance = initial + velocity × (time / 3600)`, with time converted to
/// hours to match the velocity in km/h.
///
/// # Arguments
/// * `initial_distance_km` - Distance already travelled (km, finite, ≥ 0)
/// * `velocity_kmh` - Constant velocity (km/h, finite, ≥ 0)
/// * `time_seconds` - Elapsed time (s, finite, ≥ 0)
///
/// # Errors
/// Returns `InvalidUnitOrRange` if any input is not finite or is negative,
/// or if the result overflows.
pub fn compute_new_distance(
    initial_distance_km: f64,
    velocity_kmh: f64,
    time_seconds: f64,
) -> Result<Kilometers, SimError> {
    let initial = Kilometers::try_new("initial distance", initial_distance_km)?;
    let velocity = KilometersPerHour::try_new("velocity", velocity_kmh)?;
    let time = Seconds::try_new("elapsed time", time_seconds)?;

    let travelled = velocity * time.to_hours();
    let new_distance = Kilometers::try_new("new distance", *(initial + travelled))?;
    debug!(%initial, %velocity, %time, %new_distance, "computed new distance");
    Ok(new_distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_one_hour_at_constant_velocity() {
        let d = compute_new_distance(0.0, 10_000.0, 3600.0).unwrap();
        assert_relative_eq!(*d, 10_000.0, max_relative = 1e-12);
        assert_eq!(d.to_string(), "10000.00 km");
    }

    #[test]
    fn test_adds_to_initial_distance() {
        // 90 km/h for 20 minutes is 30 km
        let d = compute_new_distance(12.5, 90.0, 1200.0).unwrap();
        assert_relative_eq!(*d, 42.5, max_relative = 1e-12);
    }

    #[test]
    fn test_stationary_vehicle() {
        let d = compute_new_distance(7.0, 0.0, 3600.0).unwrap();
        assert_eq!(*d, 7.0);
    }

    #[test]
    fn test_negative_time_rejected() {
        let err = compute_new_distance(0.0, 10_000.0, -1.0).unwrap_err();
        assert!(err.is_invalid_unit_or_range());
        assert!(err.to_string().contains("elapsed time (s)"));
    }

    #[test]
    fn test_negative_distance_and_velocity_rejected() {
        assert!(compute_new_distance(-1.0, 10.0, 1.0).is_err());
        assert!(compute_new_distance(0.0, -10.0, 1.0).is_err());
    }

    #[test]
    fn test_non_numeric_inputs_rejected() {
        for (d, v, t) in [
            (f64::NAN, 10_000.0, 3600.0),
            (0.0, f64::NAN, 3600.0),
            (0.0, 10_000.0, f64::NAN),
            (0.0, f64::INFINITY, 3600.0),
        ] {
            let err = compute_new_distance(d, v, t).unwrap_err();
            assert!(err.is_invalid_unit_or_range(), "{d} {v} {t}");
        }
    }

    #[test]
    fn test_idempotent() {
        let a = compute_new_distance(3.0, 55.0, 900.0).unwrap();
        let b = compute_new_distance(3.0, 55.0, 900.0).unwrap();
        assert_eq!(a, b);
    }
}
