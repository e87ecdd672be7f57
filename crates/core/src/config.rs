//! Named configuration values
//!
//! The six initial conditions can be supplied from a TOML file and then
//! overridden one at a time from text (the CLI does this). Keys that are not
//! present keep the reference values.
//!
//! ```toml
//! initial_velocity_kmh = 10000
//! acceleration_mps2 = 3.0
//! time_s = 3600
//!
//! [[scenarios]]
//! name = "long burn"
//! time_s = 20000
//! ```

use crate::core_types::units::{
    parse_quantity, parse_speed_kmh, Kilograms, KilogramsPerSecond, Kilometers,
    KilometersPerHour, MetersPerSecondSquared, Seconds,
};
use crate::error::SimError;
use crate::simulation::{Scenario, SimulationInputs};
use std::path::Path;
use toml::{Table, Value};
use tracing::{debug, warn};

/// One of the six configurable initial conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKey {
    InitialVelocity,
    Acceleration,
    Time,
    InitialDistance,
    InitialFuel,
    BurnRate,
}

impl InputKey {
    pub const ALL: [InputKey; 6] = [
        InputKey::InitialVelocity,
        InputKey::Acceleration,
        InputKey::Time,
        InputKey::InitialDistance,
        InputKey::InitialFuel,
        InputKey::BurnRate,
    ];

    /// Configuration file key
    pub fn key(self) -> &'static str {
        match self {
            InputKey::InitialVelocity => "initial_velocity_kmh",
            InputKey::Acceleration => "acceleration_mps2",
            InputKey::Time => "time_s",
            InputKey::InitialDistance => "initial_distance_km",
            InputKey::InitialFuel => "initial_fuel_kg",
            InputKey::BurnRate => "burn_rate_kg_per_s",
        }
    }

    /// Human-readable quantity name used in error messages
    pub fn quantity(self) -> &'static str {
        match self {
            InputKey::InitialVelocity => "initial velocity",
            InputKey::Acceleration => "acceleration",
            InputKey::Time => "elapsed time",
            InputKey::InitialDistance => "initial distance",
            InputKey::InitialFuel => "initial fuel",
            InputKey::BurnRate => "burn rate",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            InputKey::InitialVelocity => KilometersPerHour::UNIT,
            InputKey::Acceleration => MetersPerSecondSquared::UNIT,
            InputKey::Time => Seconds::UNIT,
            InputKey::InitialDistance => Kilometers::UNIT,
            InputKey::InitialFuel => Kilograms::UNIT,
            InputKey::BurnRate => KilogramsPerSecond::UNIT,
        }
    }

    pub fn from_key(key: &str) -> Option<InputKey> {
        Self::ALL.into_iter().find(|k| k.key() == key)
    }

    fn slot(self, inputs: &mut SimulationInputs) -> &mut f64 {
        match self {
            InputKey::InitialVelocity => &mut inputs.initial_velocity_kmh,
            InputKey::Acceleration => &mut inputs.acceleration_mps2,
            InputKey::Time => &mut inputs.time_s,
            InputKey::InitialDistance => &mut inputs.initial_distance_km,
            InputKey::InitialFuel => &mut inputs.initial_fuel_kg,
            InputKey::BurnRate => &mut inputs.burn_rate_kg_per_s,
        }
    }

    /// Read this quantity from a TOML value.
    ///
    /// # Errors
    /// Returns `InvalidUnitOrRange` if the value is not a finite number.
    fn read(self, value: &Value) -> Result<f64, SimError> {
        let number = match value {
            Value::Float(f) => *f,
            Value::Integer(i) => *i as f64,
            other => {
                return Err(SimError::invalid(
                    self.quantity(),
                    self.unit(),
                    format!("expected a number, got {} {other}", other.type_str()),
                ))
            }
        };
        if !number.is_finite() {
            return Err(SimError::invalid(
                self.quantity(),
                self.unit(),
                format!("must be a finite number, got {number}"),
            ));
        }
        Ok(number)
    }
}

/// Base inputs plus optional named scenarios
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub inputs: SimulationInputs,
    pub scenarios: Vec<Scenario>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            inputs: SimulationInputs::REFERENCE,
            scenarios: Vec::new(),
        }
    }
}

impl SimulationConfig {
    /// Load a configuration file.
    ///
    /// # Errors
    /// Returns `ConfigRead` if the file cannot be read, otherwise as
    /// [`SimulationConfig::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self, SimError> {
        let text = std::fs::read_to_string(path).map_err(|source| SimError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config file");
        Self::from_toml_str(&text)
    }

    /// Parse a configuration from TOML text.
    ///
    /// # Errors
    /// Returns `ConfigParse` for TOML syntax errors, `InvalidUnitOrRange` for
    /// non-numeric quantities, and `ConfigInvalid` for a malformed
    /// `scenarios` array.
    pub fn from_toml_str(text: &str) -> Result<Self, SimError> {
        let table: Table = text.parse()?;

        let mut inputs = SimulationInputs::REFERENCE;
        let mut scenario_tables = None;
        for (key, value) in &table {
            if key == "scenarios" {
                scenario_tables = Some(value);
            } else if let Some(input) = InputKey::from_key(key) {
                *input.slot(&mut inputs) = input.read(value)?;
            } else {
                warn!(key = %key, "ignoring unknown config key");
            }
        }

        let scenarios = match scenario_tables {
            Some(value) => parse_scenarios(value, inputs)?,
            None => Vec::new(),
        };

        Ok(Self { inputs, scenarios })
    }

    /// Override one quantity from user-supplied text, in the base inputs and
    /// every scenario.
    ///
    /// The initial velocity may carry a `km/h` or `m/s` suffix; it is stored
    /// in km/h. Range checks are left to the calculators so that one bad
    /// value does not stop the others from being reported.
    ///
    /// # Errors
    /// Returns `InvalidUnitOrRange` if the text is not a finite number.
    pub fn override_value(&mut self, key: InputKey, text: &str) -> Result<(), SimError> {
        let value = match key {
            InputKey::InitialVelocity => parse_speed_kmh(key.quantity(), text)?,
            _ => parse_quantity(key.quantity(), key.unit(), text)?,
        };
        *key.slot(&mut self.inputs) = value;
        for scenario in &mut self.scenarios {
            *key.slot(&mut scenario.inputs) = value;
        }
        debug!(key = key.key(), value, "applied override");
        Ok(())
    }
}

fn parse_scenarios(value: &Value, base: SimulationInputs) -> Result<Vec<Scenario>, SimError> {
    let Value::Array(entries) = value else {
        return Err(SimError::ConfigInvalid(format!(
            "`scenarios` must be an array of tables, got {}",
            value.type_str()
        )));
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let Value::Table(table) = entry else {
                return Err(SimError::ConfigInvalid(format!(
                    "scenario {} must be a table, got {}",
                    index + 1,
                    entry.type_str()
                )));
            };

            let mut name = format!("scenario {}", index + 1);
            let mut inputs = base;
            for (key, value) in table {
                if key == "name" {
                    name = value
                        .as_str()
                        .ok_or_else(|| {
                            SimError::ConfigInvalid(format!(
                                "scenario {} name must be a string",
                                index + 1
                            ))
                        })?
                        .to_owned();
                } else if let Some(input) = InputKey::from_key(key) {
                    *input.slot(&mut inputs) = input.read(value)?;
                } else {
                    warn!(key = %key, scenario = index + 1, "ignoring unknown scenario key");
                }
            }
            Ok(Scenario { name, inputs })
        })
        .collect()
}
