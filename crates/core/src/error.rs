//! Error types for projection calculations and configuration loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the simulator.
///
/// `InvalidUnitOrRange` is the only error a calculator returns. The
/// configuration variants cover reading and parsing a TOML file.
#[derive(Debug, Error)]
pub enum SimError {
    /// A quantity was missing, non-numeric, non-finite, or outside its valid range.
    #[error("invalid {quantity} ({unit}): {reason}")]
    InvalidUnitOrRange {
        /// Human-readable name of the quantity (e.g. `"elapsed time"`)
        quantity: &'static str,
        /// Unit the quantity was expected in (e.g. `"s"`)
        unit: &'static str,
        /// What was wrong with the value
        reason: String,
    },

    /// The configuration file could not be read.
    #[error("failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML.
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The configuration is valid TOML but has the wrong shape.
    #[error("invalid config: {0}")]
    ConfigInvalid(String),
}

impl SimError {
    /// Create an `InvalidUnitOrRange` error.
    ///
    /// # Arguments
    /// * `quantity` - The name of the invalid quantity (e.g. `"burn rate"`)
    /// * `unit` - The expected unit (e.g. `"kg/s"`)
    /// * `reason` - A description of the validation failure
    pub fn invalid(quantity: &'static str, unit: &'static str, reason: impl Into<String>) -> Self {
        SimError::InvalidUnitOrRange {
            quantity,
            unit,
            reason: reason.into(),
        }
    }

    /// Returns true for the calculation error kind.
    pub fn is_invalid_unit_or_range(&self) -> bool {
        matches!(self, SimError::InvalidUnitOrRange { .. })
    }
}

/// Check that `value` is a finite number.
///
/// # Errors
/// Returns `InvalidUnitOrRange` if `value` is NaN or infinite.
pub(crate) fn ensure_finite(
    quantity: &'static str,
    unit: &'static str,
    value: f64,
) -> Result<f64, SimError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SimError::invalid(
            quantity,
            unit,
            format!("must be a finite number, got {value}"),
        ))
    }
}

/// Check that `value` is a finite, non-negative number.
///
/// `-0.0` is accepted and returned as `0.0`.
///
/// # Errors
/// Returns `InvalidUnitOrRange` if `value` is NaN, infinite, or negative.
pub(crate) fn ensure_non_negative(
    quantity: &'static str,
    unit: &'static str,
    value: f64,
) -> Result<f64, SimError> {
    let value = ensure_finite(quantity, unit, value)?;
    if value < 0.0 {
        return Err(SimError::invalid(
            quantity,
            unit,
            format!("must be non-negative, got {value}"),
        ));
    }
    Ok(value + 0.0)
}
