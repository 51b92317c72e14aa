//! Dashboard aggregations for off-grid PV and battery sizing results.

/// Synthetic reference-year calendar.
pub mod calendar;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod io;
pub mod result;
/// Summary, monthly band, and seasonal profile derivations.
pub mod stats;
