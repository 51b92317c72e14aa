//! Derived statistics over hourly load and solar series.
//!
//! Every derivation is a pure function of its input slice and the injected
//! [`Calendar`](crate::calendar::Calendar). Degenerate input (empty, short,
//! long) yields zeros or an empty vector; none of them fail.

pub mod monthly_band;
pub mod seasonal_profile;
pub mod summary;

pub use monthly_band::{MonthlyBandPoint, compute_monthly_solar_band};
pub use seasonal_profile::{SeasonalHourPoint, compute_seasonal_hourly_profile};
pub use summary::{SummaryStats, compute_summary_stats};

/// Rounds to two decimal places for chart display. NaN stays NaN.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
