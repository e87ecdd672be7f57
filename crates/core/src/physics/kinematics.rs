//! Constant-acceleration velocity projection
//!
//! Implements `v = u + a·t` in SI units. The initial velocity is given in
//! km/h and the acceleration in m/s², so the initial velocity is converted to
//! m/s before the addition and the result converted back to km/h.

use crate::core_types::units::{KilometersPerHour, MetersPerSecondSquared, Seconds};
use crate::error::SimError;
use tracing::debug;

/// Calculate the velocity after `time_seconds` of constant acceleration.
///
/// # Arguments
/// * `initial_velocity_kmh` - Initial velocity (km/h, finite, ≥ 0)
/// * `acceleration_mps2` - Constant acceleration (m/s², finite, may be negative)
/// * `time_seconds` - Elapsed time (s, finite, ≥ 0)
///
/// # Returns
/// New velocity (km/h)
///
/// # Errors
/// Returns `InvalidUnitOrRange` if any input is not finite or out of range,
/// or if a deceleration would take the velocity below zero.
pub fn compute_new_velocity(
    initial_velocity_kmh: f64,
    acceleration_mps2: f64,
    time_seconds: f64,
) -> Result<KilometersPerHour, SimError> {
    let initial = KilometersPerHour::try_new("initial velocity", initial_velocity_kmh)?;
    let acceleration = MetersPerSecondSquared::try_new("acceleration", acceleration_mps2)?;
    let time = Seconds::try_new("elapsed time", time_seconds)?;

    let delta = acceleration * time;
    let final_mps = initial.to_mps().checked_add(delta).ok_or_else(|| {
        SimError::invalid(
            "new velocity",
            KilometersPerHour::UNIT,
            format!("{initial} changed by {delta} over {time} is not a valid speed"),
        )
    })?;

    // The m/s sum can be finite while its km/h form is not
    let new_velocity = KilometersPerHour::try_new("new velocity", *final_mps.to_kmh())?;
    debug!(%initial, %acceleration, %time, %new_velocity, "computed new velocity");
    Ok(new_velocity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::units::{to_kilometers_per_hour, to_meters_per_second};
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_scenario() {
        let v = compute_new_velocity(10_000.0, 3.0, 3600.0).unwrap();
        let expected = to_kilometers_per_hour(to_meters_per_second(10_000.0) + 3.0 * 3600.0);
        assert_relative_eq!(*v, expected, max_relative = 1e-12);
        // 2777.78 m/s + 10800 m/s = 13577.78 m/s
        assert_relative_eq!(*v, 48_880.0, max_relative = 1e-12);
        assert_eq!(format!("{:.2}", *v), "48880.00");
    }

    #[test]
    fn test_zero_time_returns_initial_velocity() {
        let v = compute_new_velocity(120.0, 9.81, 0.0).unwrap();
        assert_relative_eq!(*v, 120.0, max_relative = 1e-12);
    }

    #[test]
    fn test_acceleration_is_applied_in_si_units() {
        // 1 m/s² for 10 s adds 10 m/s = 36 km/h
        let v = compute_new_velocity(0.0, 1.0, 10.0).unwrap();
        assert_relative_eq!(*v, 36.0, max_relative = 1e-12);
    }

    #[test]
    fn test_deceleration_allowed_until_stop() {
        // 36 km/h = 10 m/s, braking at 2 m/s² for 5 s stops exactly
        let v = compute_new_velocity(36.0, -2.0, 5.0).unwrap();
        assert!(v.abs() < 1e-9);

        let err = compute_new_velocity(36.0, -2.0, 6.0).unwrap_err();
        assert!(err.is_invalid_unit_or_range());
        assert!(err.to_string().starts_with("invalid new velocity (km/h)"));
    }

    #[test]
    fn test_negative_time_rejected() {
        let err = compute_new_velocity(10_000.0, 3.0, -1.0).unwrap_err();
        assert!(err.is_invalid_unit_or_range());
        assert!(err.to_string().contains("elapsed time (s)"));
    }

    #[test]
    fn test_non_numeric_inputs_rejected() {
        for (u, a, t) in [
            (f64::NAN, 3.0, 3600.0),
            (10_000.0, f64::NAN, 3600.0),
            (10_000.0, 3.0, f64::NAN),
            (10_000.0, f64::INFINITY, 3600.0),
            (f64::NEG_INFINITY, 3.0, 3600.0),
        ] {
            let err = compute_new_velocity(u, a, t).unwrap_err();
            assert!(err.is_invalid_unit_or_range(), "{u} {a} {t}");
        }
    }

    #[test]
    fn test_negative_initial_velocity_rejected() {
        let err = compute_new_velocity(-1.0, 3.0, 10.0).unwrap_err();
        assert!(err.to_string().contains("initial velocity (km/h)"));
    }

    #[test]
    fn test_overflow_rejected() {
        assert!(compute_new_velocity(0.0, f64::MAX, f64::MAX).is_err());
    }

    #[test]
    fn test_overflow_in_conversion_back_to_kmh_rejected() {
        // 1e300 m/s² × 1e8 s = 1e308 m/s is finite, ×3.6 is not
        let err = compute_new_velocity(0.0, 1e300, 1e8).unwrap_err();
        assert!(err.is_invalid_unit_or_range());
        assert!(err.to_string().starts_with("invalid new velocity (km/h)"));
    }

    #[test]
    fn test_negative_zero_inputs_report_positive_zero() {
        let v = compute_new_velocity(-0.0, -3.0, 0.0).unwrap();
        assert!(v.is_sign_positive());
        assert_eq!(v.to_string(), "0.00 km/h");
    }

    #[test]
    fn test_idempotent() {
        let a = compute_new_velocity(500.0, 1.5, 120.0).unwrap();
        let b = compute_new_velocity(500.0, 1.5, 120.0).unwrap();
        assert_eq!(a, b);
    }
}
