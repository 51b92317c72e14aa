//! Simulation-service result payload and sizing display values.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One feasible PV/battery pair from the sizing search.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct PvBatteryPoint {
    /// PV array size (kW).
    pub pv: f64,
    /// Minimum battery size for that array (kWh).
    pub battery: f64,
}

/// Result returned by the external sizing simulation.
///
/// Every field defaults when absent; a missing profile behaves as an empty
/// series and a missing size as zero.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SimulationResult {
    /// Optimal PV array size (kW), `None` when no feasible pair exists.
    pub pv_kw: Option<f64>,
    /// Optimal battery size (kWh), `None` when no feasible pair exists.
    pub battery_kwh: Option<f64>,
    /// Feasible PV/battery trade-off curve.
    pub pv_battery_curve: Vec<PvBatteryPoint>,
    /// Hourly load (kW).
    pub load_profile: Vec<f64>,
    /// Hourly solar generation.
    pub solar_profile: Vec<f64>,
}

/// Error loading a simulation result.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read \"{path}\": {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid simulation result: {0}")]
    Json(#[from] serde_json::Error),
}

impl SimulationResult {
    /// Parses a result from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Json`] if the JSON is malformed or mistyped.
    pub fn from_json_str(s: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Reads a result from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] if the file cannot be read or parsed.
    pub fn from_json_file(path: &Path) -> Result<Self, LoadError> {
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Sizing rounded up for display.
    pub fn optimal_sizing(&self) -> OptimalSizing {
        OptimalSizing {
            pv_kw: ceil_or_zero(self.pv_kw),
            battery_kwh: ceil_or_zero(self.battery_kwh),
        }
    }
}

/// Recommended system size, rounded up to whole units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OptimalSizing {
    /// PV array size (kW).
    pub pv_kw: f64,
    /// Battery bank size (kWh).
    pub battery_kwh: f64,
}

fn ceil_or_zero(value: Option<f64>) -> f64 {
    match value {
        Some(v) if !v.is_nan() => v.ceil(),
        _ => 0.0,
    }
}
