//! Semantic unit types for type-safe physical quantity handling
//!
//! This module provides newtype wrappers for the quantities the projection
//! calculators work with, so that a km/h value can never be added to a
//! m/s value (or a time in seconds used where hours are expected) without an
//! explicit conversion.
//!
//! # Design Philosophy
//! - All types use f64 so that km/h ⇄ m/s round trips hold to ~1e-12
//! - Private inner fields with validated `try_new` constructors returning [`SimError`]
//! - Magnitudes (speed, distance, mass, time, burn rate) are finite and non-negative
//! - Acceleration and velocity changes are signed
//! - Cross-type arithmetic only where the physics is meaningful
//!   (`m/s² × s = Δm/s`, `km/h × h = km`, `kg/s × s = kg`)
//! - Total ordering via Ord trait (NaN cannot be constructed)
//!
//! # Usage
//! ```
//! use vehicle_sim_core::core_types::units::{KilometersPerHour, Seconds};
//!
//! let speed = KilometersPerHour::try_new("speed", 36.0).unwrap();
//! assert!((*speed.to_mps() - 10.0).abs() < 1e-12);
//!
//! let hour = Seconds::try_new("elapsed time", 3600.0).unwrap().to_hours();
//! assert_eq!(*hour, 1.0);
//! ```

use crate::error::{ensure_finite, ensure_non_negative, SimError};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Deref, Mul};

/// Meters in one kilometer
pub const METERS_PER_KILOMETER: f64 = 1000.0;

/// Seconds in one hour
pub const SECONDS_PER_HOUR: f64 = 3600.0;

// ============================================================================
// CONVERSION FUNCTIONS
// ============================================================================

/// Convert a velocity in km/h to m/s (×1000 ÷3600).
#[inline]
pub fn to_meters_per_second(velocity_kmh: f64) -> f64 {
    (velocity_kmh * METERS_PER_KILOMETER) / SECONDS_PER_HOUR
}

/// Convert a velocity in m/s to km/h (×3600 ÷1000).
#[inline]
pub fn to_kilometers_per_hour(velocity_ms: f64) -> f64 {
    (velocity_ms * SECONDS_PER_HOUR) / METERS_PER_KILOMETER
}

/// Parse a user-supplied quantity from text.
///
/// # Errors
/// Returns `InvalidUnitOrRange` if `text` is not a number or is not finite.
pub fn parse_quantity(
    quantity: &'static str,
    unit: &'static str,
    text: &str,
) -> Result<f64, SimError> {
    let trimmed = text.trim();
    let value: f64 = trimmed.parse().map_err(|_| {
        SimError::invalid(quantity, unit, format!("expected a number, got {trimmed:?}"))
    })?;
    ensure_finite(quantity, unit, value)
}

/// Parse a speed with an optional `km/h` or `m/s` suffix and express it in
/// km/h. Bare numbers are km/h.
///
/// Only finiteness is checked; the calculators apply the range rules.
///
/// # Errors
/// Returns `InvalidUnitOrRange` if the number is not a finite number.
pub fn parse_speed_kmh(quantity: &'static str, text: &str) -> Result<f64, SimError> {
    let (number, unit) = split_speed_unit(text);
    let value = parse_quantity(quantity, unit, number)?;
    if unit == MetersPerSecond::UNIT {
        ensure_finite(quantity, KilometersPerHour::UNIT, to_kilometers_per_hour(value))
    } else {
        Ok(value)
    }
}

fn split_speed_unit(text: &str) -> (&str, &'static str) {
    let text = text.trim();
    if let Some(number) = text.strip_suffix(MetersPerSecond::UNIT) {
        (number, MetersPerSecond::UNIT)
    } else {
        (
            text.strip_suffix(KilometersPerHour::UNIT).unwrap_or(text),
            KilometersPerHour::UNIT,
        )
    }
}

#[inline]
fn f64_total_cmp(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

// ============================================================================
// VELOCITY TYPES
// ============================================================================

/// Speed in meters per second (non-negative)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[repr(transparent)]
pub struct MetersPerSecond(f64);

impl Eq for MetersPerSecond {}

impl PartialOrd for MetersPerSecond {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MetersPerSecond {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for MetersPerSecond {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl MetersPerSecond {
    pub const UNIT: &'static str = "m/s";

    /// Create a validated speed.
    ///
    /// # Errors
    /// Returns `InvalidUnitOrRange` if `value` is not finite or is negative.
    pub fn try_new(quantity: &'static str, value: f64) -> Result<Self, SimError> {
        ensure_non_negative(quantity, Self::UNIT, value).map(MetersPerSecond)
    }

    /// Convert to km/h
    #[inline]
    #[must_use]
    pub fn to_kmh(self) -> KilometersPerHour {
        KilometersPerHour(to_kilometers_per_hour(self.0))
    }

    /// Apply a signed change in velocity.
    ///
    /// Returns `None` if the result would be negative or not finite.
    #[must_use]
    pub fn checked_add(self, delta: MetersPerSecondDelta) -> Option<MetersPerSecond> {
        let result = self.0 + delta.0;
        (result.is_finite() && result >= 0.0).then_some(MetersPerSecond(result))
    }
}

impl From<MetersPerSecond> for f64 {
    fn from(v: MetersPerSecond) -> f64 {
        v.0
    }
}

impl fmt::Display for MetersPerSecond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} m/s", self.0)
    }
}

/// Speed in kilometers per hour (non-negative)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[repr(transparent)]
pub struct KilometersPerHour(f64);

impl Eq for KilometersPerHour {}

impl PartialOrd for KilometersPerHour {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for KilometersPerHour {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for KilometersPerHour {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl KilometersPerHour {
    pub const UNIT: &'static str = "km/h";

    /// Create a validated speed.
    ///
    /// # Errors
    /// Returns `InvalidUnitOrRange` if `value` is not finite or is negative.
    pub fn try_new(quantity: &'static str, value: f64) -> Result<Self, SimError> {
        ensure_non_negative(quantity, Self::UNIT, value).map(KilometersPerHour)
    }

    /// Convert to m/s
    #[inline]
    #[must_use]
    pub fn to_mps(self) -> MetersPerSecond {
        MetersPerSecond(to_meters_per_second(self.0))
    }
}

impl From<KilometersPerHour> for MetersPerSecond {
    fn from(k: KilometersPerHour) -> MetersPerSecond {
        k.to_mps()
    }
}

impl From<MetersPerSecond> for KilometersPerHour {
    fn from(m: MetersPerSecond) -> KilometersPerHour {
        m.to_kmh()
    }
}

impl From<KilometersPerHour> for f64 {
    fn from(v: KilometersPerHour) -> f64 {
        v.0
    }
}

// Cross-type operation: km/h × hours = kilometers
impl Mul<Hours> for KilometersPerHour {
    type Output = Kilometers;
    fn mul(self, rhs: Hours) -> Kilometers {
        Kilometers(self.0 * rhs.0)
    }
}

impl fmt::Display for KilometersPerHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} km/h", self.0)
    }
}

/// Signed change in velocity, m/s
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[repr(transparent)]
pub struct MetersPerSecondDelta(f64);

impl MetersPerSecondDelta {
    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for MetersPerSecondDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+.2} m/s", self.0)
    }
}

/// A velocity magnitude tagged with the unit it was given in
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Velocity {
    KilometersPerHour(KilometersPerHour),
    MetersPerSecond(MetersPerSecond),
}

impl Velocity {
    /// Parse a speed with an optional `km/h` or `m/s` suffix. Bare numbers are km/h.
    ///
    /// # Errors
    /// Returns `InvalidUnitOrRange` if the number is not finite or is negative.
    pub fn parse(quantity: &'static str, text: &str) -> Result<Velocity, SimError> {
        let (number, unit) = split_speed_unit(text);
        let value = parse_quantity(quantity, unit, number)?;
        if unit == MetersPerSecond::UNIT {
            MetersPerSecond::try_new(quantity, value).map(Velocity::MetersPerSecond)
        } else {
            KilometersPerHour::try_new(quantity, value).map(Velocity::KilometersPerHour)
        }
    }

    /// The unit this value is tagged with
    pub fn unit(self) -> &'static str {
        match self {
            Velocity::KilometersPerHour(_) => KilometersPerHour::UNIT,
            Velocity::MetersPerSecond(_) => MetersPerSecond::UNIT,
        }
    }

    /// Express the velocity in m/s
    #[must_use]
    pub fn to_mps(self) -> MetersPerSecond {
        match self {
            Velocity::KilometersPerHour(v) => v.to_mps(),
            Velocity::MetersPerSecond(v) => v,
        }
    }

    /// Express the velocity in km/h
    #[must_use]
    pub fn to_kmh(self) -> KilometersPerHour {
        match self {
            Velocity::KilometersPerHour(v) => v,
            Velocity::MetersPerSecond(v) => v.to_kmh(),
        }
    }
}

impl From<KilometersPerHour> for Velocity {
    fn from(v: KilometersPerHour) -> Self {
        Velocity::KilometersPerHour(v)
    }
}

impl From<MetersPerSecond> for Velocity {
    fn from(v: MetersPerSecond) -> Self {
        Velocity::MetersPerSecond(v)
    }
}

impl fmt::Display for Velocity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Velocity::KilometersPerHour(v) => v.fmt(f),
            Velocity::MetersPerSecond(v) => v.fmt(f),
        }
    }
}

// ============================================================================
// ACCELERATION
// ============================================================================

/// Acceleration in m/s² (signed; negative is deceleration)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[repr(transparent)]
pub struct MetersPerSecondSquared(f64);

impl Deref for MetersPerSecondSquared {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl MetersPerSecondSquared {
    pub const UNIT: &'static str = "m/s²";

    /// Create a validated acceleration.
    ///
    /// # Errors
    /// Returns `InvalidUnitOrRange` if `value` is not finite.
    pub fn try_new(quantity: &'static str, value: f64) -> Result<Self, SimError> {
        ensure_finite(quantity, Self::UNIT, value).map(MetersPerSecondSquared)
    }
}

// Cross-type operation: acceleration × time = change in velocity
impl Mul<Seconds> for MetersPerSecondSquared {
    type Output = MetersPerSecondDelta;
    fn mul(self, rhs: Seconds) -> MetersPerSecondDelta {
        MetersPerSecondDelta(self.0 * rhs.0)
    }
}

impl fmt::Display for MetersPerSecondSquared {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} m/s²", self.0)
    }
}

// ============================================================================
// TIME TYPES
// ============================================================================

/// Time duration in seconds
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[repr(transparent)]
pub struct Seconds(f64);

impl Eq for Seconds {}

impl PartialOrd for Seconds {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Seconds {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Seconds {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Seconds {
    pub const UNIT: &'static str = "s";

    /// Create a validated duration.
    ///
    /// # Errors
    /// Returns `InvalidUnitOrRange` if `value` is not finite or is negative.
    pub fn try_new(quantity: &'static str, value: f64) -> Result<Self, SimError> {
        ensure_non_negative(quantity, Self::UNIT, value).map(Seconds)
    }

    /// Convert to hours
    #[inline]
    #[must_use]
    pub fn to_hours(self) -> Hours {
        Hours(self.0 / SECONDS_PER_HOUR)
    }
}

impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} s", self.0)
    }
}

/// Time duration in hours
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[repr(transparent)]
pub struct Hours(f64);

impl Deref for Hours {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} h", self.0)
    }
}

// ============================================================================
// DISTANCE
// ============================================================================

/// Distance in kilometers (non-negative)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[repr(transparent)]
pub struct Kilometers(f64);

impl Eq for Kilometers {}

impl PartialOrd for Kilometers {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Kilometers {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Kilometers {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Kilometers {
    pub const UNIT: &'static str = "km";

    /// Create a validated distance.
    ///
    /// # Errors
    /// Returns `InvalidUnitOrRange` if `value` is not finite or is negative.
    pub fn try_new(quantity: &'static str, value: f64) -> Result<Self, SimError> {
        ensure_non_negative(quantity, Self::UNIT, value).map(Kilometers)
    }
}

impl Add for Kilometers {
    type Output = Kilometers;
    fn add(self, rhs: Kilometers) -> Kilometers {
        Kilometers(self.0 + rhs.0)
    }
}

impl From<Kilometers> for f64 {
    fn from(k: Kilometers) -> f64 {
        k.0
    }
}

impl fmt::Display for Kilometers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} km", self.0)
    }
}

// ============================================================================
// MASS TYPES
// ============================================================================

/// Mass in kilograms (non-negative)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[repr(transparent)]
pub struct Kilograms(f64);

impl Eq for Kilograms {}

impl PartialOrd for Kilograms {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Kilograms {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Kilograms {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Kilograms {
    pub const UNIT: &'static str = "kg";

    /// Create a validated mass.
    ///
    /// # Errors
    /// Returns `InvalidUnitOrRange` if `value` is not finite or is negative.
    pub fn try_new(quantity: &'static str, value: f64) -> Result<Self, SimError> {
        ensure_non_negative(quantity, Self::UNIT, value).map(Kilograms)
    }

    /// Subtract, clamping at zero since mass can't be negative
    #[must_use]
    pub fn saturating_sub(self, rhs: Kilograms) -> Kilograms {
        // +0.0 clears the sign of a zero result
        Kilograms((self.0 - rhs.0).max(0.0) + 0.0)
    }
}

impl From<Kilograms> for f64 {
    fn from(k: Kilograms) -> f64 {
        k.0
    }
}

impl fmt::Display for Kilograms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} kg", self.0)
    }
}

/// Mass flow rate in kg/s (non-negative)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[repr(transparent)]
pub struct KilogramsPerSecond(f64);

impl Deref for KilogramsPerSecond {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl KilogramsPerSecond {
    pub const UNIT: &'static str = "kg/s";

    /// Create a validated burn rate.
    ///
    /// # Errors
    /// Returns `InvalidUnitOrRange` if `value` is not finite or is negative.
    pub fn try_new(quantity: &'static str, value: f64) -> Result<Self, SimError> {
        ensure_non_negative(quantity, Self::UNIT, value).map(KilogramsPerSecond)
    }
}

// Cross-type operation: rate × time = mass
impl Mul<Seconds> for KilogramsPerSecond {
    type Output = Kilograms;
    fn mul(self, rhs: Seconds) -> Kilograms {
        Kilograms(self.0 * rhs.0)
    }
}

impl fmt::Display for KilogramsPerSecond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} kg/s", self.0)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_kmh_to_mps() {
        assert_abs_diff_eq!(to_meters_per_second(36.0), 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(to_meters_per_second(3600.0), 1000.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mps_to_kmh() {
        let mps = MetersPerSecond(10.0);
        let kmh = mps.to_kmh();
        assert_abs_diff_eq!(kmh.0, 36.0, epsilon = 1e-12);
    }

    #[test]
    fn test_conversion_round_trip() {
        let samples = [
            0.0, 1.0, -1.0, 0.1, 3.6, 42.195, 299_792.458, 10_000.0, -12_345.678, 1e-9, 1e12,
        ];
        for x in samples {
            let back = to_kilometers_per_hour(to_meters_per_second(x));
            assert_relative_eq!(back, x, epsilon = 1e-9, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_typed_round_trip_preserves_magnitude() {
        let speed = KilometersPerHour(10_000.0);
        let back = speed.to_mps().to_kmh();
        assert_relative_eq!(back.0, 10_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_velocity_tag_conversions() {
        let v: Velocity = KilometersPerHour(72.0).into();
        assert_eq!(v.unit(), "km/h");
        assert_abs_diff_eq!(*v.to_mps(), 20.0, epsilon = 1e-12);

        let v: Velocity = MetersPerSecond(20.0).into();
        assert_eq!(v.unit(), "m/s");
        assert_abs_diff_eq!(*v.to_kmh(), 72.0, epsilon = 1e-12);
        assert_eq!(v.to_mps(), MetersPerSecond(20.0));
    }

    #[test]
    fn test_velocity_parse_with_unit_suffix() {
        let v = Velocity::parse("initial velocity", "10 m/s").unwrap();
        assert_eq!(v, Velocity::MetersPerSecond(MetersPerSecond(10.0)));
        assert_eq!(*v.to_kmh(), 36.0);

        let v = Velocity::parse("initial velocity", " 72km/h ").unwrap();
        assert_eq!(v, Velocity::KilometersPerHour(KilometersPerHour(72.0)));

        let v = Velocity::parse("initial velocity", "90").unwrap();
        assert_eq!(v.unit(), "km/h");
        assert_eq!(v.to_string(), "90.00 km/h");
    }

    #[test]
    fn test_velocity_parse_rejects_bad_text() {
        for text in ["fast", "5 m/s²", "-1 m/s", "inf km/h", "m/s"] {
            let err = Velocity::parse("initial velocity", text).unwrap_err();
            assert!(err.is_invalid_unit_or_range(), "{text}");
        }
    }

    #[test]
    fn test_parse_speed_kmh_converts_suffix() {
        assert_relative_eq!(parse_speed_kmh("initial velocity", "10 m/s").unwrap(), 36.0);
        assert_eq!(parse_speed_kmh("initial velocity", "72 km/h").unwrap(), 72.0);
        assert_eq!(parse_speed_kmh("initial velocity", "-5").unwrap(), -5.0);
        assert!(parse_speed_kmh("initial velocity", "1e308 m/s").is_err());
        assert!(parse_speed_kmh("initial velocity", "fast").is_err());
    }

    #[test]
    fn test_negative_zero_is_normalised() {
        let fuel = Kilograms::try_new("fuel", -0.0).unwrap();
        assert!(fuel.is_sign_positive());
        assert_eq!(fuel.to_string(), "0.00 kg");

        let speed = KilometersPerHour::try_new("speed", -0.0).unwrap();
        assert_eq!(speed.to_string(), "0.00 km/h");
        assert_eq!(Kilograms(0.0).saturating_sub(Kilograms(0.0)).to_string(), "0.00 kg");
    }

    #[test]
    fn test_seconds_to_hours() {
        let h = Seconds(5400.0).to_hours();
        assert_abs_diff_eq!(h.0, 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_kmh_times_hours_equals_km() {
        let distance = KilometersPerHour(60.0) * Hours(2.0);
        assert_abs_diff_eq!(distance.0, 120.0, epsilon = 1e-12);
    }

    #[test]
    fn test_acceleration_times_time_is_velocity_change() {
        let dv = MetersPerSecondSquared(-2.0) * Seconds(3.0);
        assert_eq!(dv.value(), -6.0);
        assert_eq!(MetersPerSecond(10.0).checked_add(dv), Some(MetersPerSecond(4.0)));
        assert_eq!(MetersPerSecond(5.0).checked_add(dv), None);
    }

    #[test]
    fn test_rate_times_time_is_mass() {
        let used = KilogramsPerSecond(0.5) * Seconds(3600.0);
        assert_eq!(used, Kilograms(1800.0));
    }

    #[test]
    fn test_kilograms_saturating_sub_clamps_at_zero() {
        assert_eq!(Kilograms(10.0).saturating_sub(Kilograms(4.0)), Kilograms(6.0));
        assert_eq!(Kilograms(10.0).saturating_sub(Kilograms(40.0)), Kilograms(0.0));
    }

    #[test]
    fn test_try_new_rejects_invalid_values() {
        assert!(Seconds::try_new("elapsed time", -1.0).is_err());
        assert!(Kilometers::try_new("distance", f64::NAN).is_err());
        assert!(KilogramsPerSecond::try_new("burn rate", -0.1).is_err());
        assert!(MetersPerSecondSquared::try_new("acceleration", f64::INFINITY).is_err());
        assert!(MetersPerSecondSquared::try_new("acceleration", -3.0).is_ok());
    }

    #[test]
    fn test_try_new_error_carries_unit() {
        let err = KilometersPerHour::try_new("initial velocity", -5.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid initial velocity (km/h): must be non-negative, got -5"
        );
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("elapsed time", "s", " 3600 ").ok(), Some(3600.0));
        assert_eq!(parse_quantity("acceleration", "m/s²", "-1.5").ok(), Some(-1.5));

        let err = parse_quantity("elapsed time", "s", "one hour").unwrap_err();
        assert!(err.is_invalid_unit_or_range());
        assert!(err.to_string().contains("\"one hour\""));

        assert!(parse_quantity("elapsed time", "s", "NaN").is_err());
        assert!(parse_quantity("elapsed time", "s", "inf").is_err());
        assert!(parse_quantity("elapsed time", "s", "").is_err());
    }

    #[test]
    fn test_display_uses_two_decimals() {
        assert_eq!(KilometersPerHour(48_880.0).to_string(), "48880.00 km/h");
        assert_eq!(Kilometers(10_000.0).to_string(), "10000.00 km");
        assert_eq!(Kilograms(3200.0).to_string(), "3200.00 kg");
    }

    #[test]
    fn test_total_ordering() {
        assert!(Kilograms(1.0) < Kilograms(2.0));
        assert_eq!(Seconds(5.0).max(Seconds(3.0)), Seconds(5.0));
    }
}
