//! TOML-based dashboard configuration and preset definitions.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::calendar::{
    Calendar, DEFAULT_DAYS_IN_MONTH, DEFAULT_SUMMER_END, DEFAULT_SUMMER_START, MONTH_LABELS, MONTHS,
};

/// Top-level dashboard configuration parsed from TOML.
///
/// All fields have defaults matching the northern-hemisphere reference
/// year. Load from TOML with [`DashboardConfig::from_toml_file`] or use
/// [`DashboardConfig::northern`] for the built-in default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardConfig {
    /// Reference-year calendar parameters.
    #[serde(default)]
    pub calendar: CalendarConfig,
}

/// Reference-year calendar parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarConfig {
    /// Length of each month, January first.
    pub days_in_month: [usize; MONTHS],
    /// First summer month (0-indexed).
    pub summer_start_month: usize,
    /// Last summer month (0-indexed, inclusive). May precede the start to
    /// wrap around the year end.
    pub summer_end_month: usize,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            days_in_month: DEFAULT_DAYS_IN_MONTH,
            summer_start_month: DEFAULT_SUMMER_START,
            summer_end_month: DEFAULT_SUMMER_END,
        }
    }
}

impl CalendarConfig {
    /// Builds the calendar described by this configuration.
    pub fn calendar(&self) -> Calendar {
        Calendar::new(
            self.days_in_month,
            self.summer_start_month,
            self.summer_end_month,
        )
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"calendar.summer_start_month"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl DashboardConfig {
    /// Returns the northern-hemisphere preset (summer April–September).
    pub fn northern() -> Self {
        Self::default()
    }

    /// Returns the southern-hemisphere preset (summer October–March).
    pub fn southern() -> Self {
        Self {
            calendar: CalendarConfig {
                summer_start_month: 9,
                summer_end_month: 2,
                ..CalendarConfig::default()
            },
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["northern", "southern"];

    /// Loads a configuration from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "northern" => Ok(Self::northern()),
            "southern" => Ok(Self::southern()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let cal = &self.calendar;

        for (days, label) in cal.days_in_month.iter().zip(MONTH_LABELS) {
            if !(1..=31).contains(days) {
                errors.push(ConfigError {
                    field: "calendar.days_in_month".into(),
                    message: format!("{label} must have 1..=31 days, got {days}"),
                });
            }
        }
        if cal.summer_start_month >= MONTHS {
            errors.push(ConfigError {
                field: "calendar.summer_start_month".into(),
                message: format!("must be < {MONTHS}"),
            });
        }
        if cal.summer_end_month >= MONTHS {
            errors.push(ConfigError {
                field: "calendar.summer_end_month".into(),
                message: format!("must be < {MONTHS}"),
            });
        }

        errors
    }
}
