//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use offgrid_calc::calendar::Calendar;
use offgrid_calc::result::SimulationResult;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Hours in the default reference year.
pub const YEAR_HOURS: usize = 8760;

/// Default reference-year calendar.
pub fn calendar() -> Calendar {
    Calendar::default()
}

/// Reproducible random series in `[0, max)`.
pub fn random_series(len: usize, max: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(0.0..max)).collect()
}

/// Daylight-shaped solar series: zero at night, a triangle peaking at noon.
pub fn daylight_solar(len: usize) -> Vec<f64> {
    (0..len)
        .map(|h| {
            let hour = (h % 24) as f64;
            (1.0 - (hour - 12.0).abs() / 6.0).max(0.0)
        })
        .collect()
}

/// Simulation result with one year of random load and daylight solar.
pub fn sample_result(seed: u64) -> SimulationResult {
    SimulationResult {
        pv_kw: Some(5.4),
        battery_kwh: Some(18.2),
        pv_battery_curve: Vec::new(),
        load_profile: random_series(YEAR_HOURS, 5.0, seed),
        solar_profile: daylight_solar(YEAR_HOURS),
    }
}
