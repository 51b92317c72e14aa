//! Headline load statistics: peak, average daily, and annual total.

use std::fmt;

use serde::Serialize;

use crate::calendar::Calendar;

/// kWh per MWh.
const KWH_PER_MWH: f64 = 1000.0;

/// Summary scalars derived from the hourly load series.
///
/// All three values are rounded up to the next whole unit so the displayed
/// figures never understate the load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStats {
    /// Highest hourly load (kW).
    pub peak: f64,
    /// Average daily consumption (kWh).
    pub avg_daily: f64,
    /// Annual consumption (MWh).
    pub total_annual: f64,
}

impl SummaryStats {
    /// All-zero statistics, reported for an empty load series.
    pub const ZERO: Self = Self {
        peak: 0.0,
        avg_daily: 0.0,
        total_annual: 0.0,
    };
}

/// Computes summary statistics from an hourly load series.
///
/// The running peak is seeded at zero, so a series of negative values
/// reports a peak of zero. The daily average always divides by the length
/// of the reference year, not by the number of days actually present.
///
/// # Arguments
///
/// * `load` - Hourly load (kW), nominally one reference year long
/// * `calendar` - Reference-year calendar
///
/// # Examples
///
/// ```
/// use offgrid_calc::calendar::Calendar;
/// use offgrid_calc::stats::compute_summary_stats;
///
/// let load = vec![10.0; 8760];
/// let stats = compute_summary_stats(&load, &Calendar::default());
/// assert_eq!(stats.peak, 10.0);
/// assert_eq!(stats.avg_daily, 240.0);
/// assert_eq!(stats.total_annual, 88.0);
/// ```
pub fn compute_summary_stats(load: &[f64], calendar: &Calendar) -> SummaryStats {
    if load.is_empty() {
        return SummaryStats::ZERO;
    }

    let peak = load
        .iter()
        .fold(0.0_f64, |max, &v| if v > max { v } else { max });
    let total: f64 = load.iter().sum();
    let total = or_zero(total);

    SummaryStats {
        peak: or_zero(peak).ceil(),
        avg_daily: (total / calendar.days_in_year() as f64).ceil(),
        total_annual: (total / KWH_PER_MWH).ceil(),
    }
}

/// Replaces NaN with zero.
fn or_zero(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value }
}

impl fmt::Display for SummaryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Peak Load: {} kW", self.peak)?;
        writeln!(f, "Avg Daily Load: {} kWh", self.avg_daily)?;
        write!(f, "Annual Consumption: {} MWh", self.total_annual)
    }
}
