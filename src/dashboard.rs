//! Dashboard data assembled from one simulation result.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::calendar::Calendar;
use crate::result::{OptimalSizing, SimulationResult};
use crate::stats::{
    MonthlyBandPoint, SeasonalHourPoint, SummaryStats, compute_monthly_solar_band,
    compute_seasonal_hourly_profile, compute_summary_stats,
};

/// Every derived view of a simulation result.
///
/// Built once per result; the derivations are independent of each other and
/// never touch the input series.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    /// Recommended system size.
    pub sizing: OptimalSizing,
    /// Headline load statistics.
    pub stats: SummaryStats,
    /// Monthly solar band, January first.
    pub solar_band: Vec<MonthlyBandPoint>,
    /// Seasonal hourly load profile, hour 0 first.
    pub seasonal_profile: Vec<SeasonalHourPoint>,
}

impl Dashboard {
    /// Computes all dashboard views for `result`.
    pub fn build(result: &SimulationResult, calendar: &Calendar) -> Self {
        debug!(
            load_hours = result.load_profile.len(),
            solar_hours = result.solar_profile.len(),
            "building dashboard"
        );
        let dashboard = Self {
            sizing: result.optimal_sizing(),
            stats: compute_summary_stats(&result.load_profile, calendar),
            solar_band: compute_monthly_solar_band(&result.solar_profile, calendar),
            seasonal_profile: compute_seasonal_hourly_profile(&result.load_profile, calendar),
        };
        debug!(
            band_points = dashboard.solar_band.len(),
            profile_points = dashboard.seasonal_profile.len(),
            "dashboard ready"
        );
        dashboard
    }

    /// Plain-text simulation report dated `date`.
    pub fn report<'a>(&'a self, date: &'a str) -> Report<'a> {
        Report {
            dashboard: self,
            date,
        }
    }
}

/// Printable simulation report; see [`Dashboard::report`].
pub struct Report<'a> {
    dashboard: &'a Dashboard,
    date: &'a str,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.dashboard;
        writeln!(f, "OffGridCalc Simulation Report")?;
        writeln!(f, "===========================")?;
        writeln!(f, "Date: {}", self.date)?;
        writeln!(f)?;
        writeln!(f, "Optimal Configuration")?;
        writeln!(f, "---------------------")?;
        writeln!(f, "PV Array Size: {} kW", d.sizing.pv_kw)?;
        writeln!(f, "Battery Bank: {} kWh", d.sizing.battery_kwh)?;
        writeln!(f)?;
        writeln!(f, "Load Statistics")?;
        writeln!(f, "---------------")?;
        writeln!(f, "{}", d.stats)?;
        writeln!(f)?;
        writeln!(f, "---------------------------")?;
        write!(f, "Generated by OffGridCalc")
    }
}
