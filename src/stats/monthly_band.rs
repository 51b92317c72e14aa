//! Per-month spread of daily solar totals.

use serde::Serialize;

use super::round2;
use crate::calendar::{Calendar, HOURS_PER_DAY, MONTH_LABELS};

/// Max, min, and average daily solar total for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyBandPoint {
    /// Short month label (`"Jan"` .. `"Dec"`).
    pub month: &'static str,
    /// Largest daily total in the month.
    pub max: f64,
    /// Smallest daily total in the month.
    pub min: f64,
    /// Mean daily total, divided by the calendar month length.
    pub avg: f64,
}

/// Computes the monthly solar reliability band.
///
/// Daily totals are taken over the reference year only; hours missing from a
/// short series count as zero, and hours past the year end are dropped.
/// Returns twelve points ordered January to December, or an empty vector for
/// an empty series.
///
/// # Arguments
///
/// * `solar` - Hourly solar generation, nominally one reference year long
/// * `calendar` - Reference-year calendar
pub fn compute_monthly_solar_band(solar: &[f64], calendar: &Calendar) -> Vec<MonthlyBandPoint> {
    if solar.is_empty() {
        return Vec::new();
    }

    let daily_sums = daily_sums(solar, calendar.days_in_year());

    let mut start = 0;
    calendar
        .days_in_month()
        .iter()
        .zip(MONTH_LABELS)
        .map(|(&days, month)| {
            let end = (start + days).min(daily_sums.len());
            let run = &daily_sums[start.min(end)..end];
            start += days;
            band_point(month, run, days)
        })
        .collect()
}

/// Sums each day of the reference year, reading only in-bounds hours.
fn daily_sums(solar: &[f64], days: usize) -> Vec<f64> {
    (0..days)
        .map(|d| {
            let start = (d * HOURS_PER_DAY).min(solar.len());
            let end = (start + HOURS_PER_DAY).min(solar.len());
            solar[start..end].iter().sum()
        })
        .collect()
}

fn band_point(month: &'static str, run: &[f64], days: usize) -> MonthlyBandPoint {
    if run.is_empty() {
        return MonthlyBandPoint {
            month,
            max: 0.0,
            min: 0.0,
            avg: 0.0,
        };
    }

    let max = run.iter().copied().fold(f64::NEG_INFINITY, nan_max);
    let min = run.iter().copied().fold(f64::INFINITY, nan_min);
    let avg = run.iter().sum::<f64>() / days as f64;

    MonthlyBandPoint {
        month,
        max: round2(max),
        min: round2(min),
        avg: round2(avg),
    }
}

/// Maximum that propagates NaN instead of skipping it.
fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else if b > a {
        b
    } else {
        a
    }
}

/// Minimum that propagates NaN instead of skipping it.
fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else if b < a {
        b
    } else {
        a
    }
}
