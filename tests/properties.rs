//! Property checks over reproducible random series.

mod common;

use offgrid_calc::calendar::MONTH_LABELS;
use offgrid_calc::dashboard::Dashboard;
use offgrid_calc::stats::{
    compute_monthly_solar_band, compute_seasonal_hourly_profile, compute_summary_stats,
};

/// Rounding to two decimals can reorder values by at most this much.
const ROUNDING_EPS: f64 = 0.01;

#[test]
fn peak_equals_series_maximum() {
    for seed in 0..10 {
        let load = common::random_series(common::YEAR_HOURS, 20.0, seed);
        let max = load.iter().copied().fold(0.0_f64, f64::max);
        let stats = compute_summary_stats(&load, &common::calendar());
        assert_eq!(stats.peak, max.ceil(), "seed {seed}");
    }
}

#[test]
fn summary_is_whole_and_monotonic() {
    let cal = common::calendar();
    for seed in 0..10 {
        let mut load = common::random_series(common::YEAR_HOURS, 3.0, seed);
        let before = compute_summary_stats(&load, &cal);
        assert_eq!(before.avg_daily.fract(), 0.0);
        assert_eq!(before.total_annual.fract(), 0.0);

        load[(seed as usize * 97) % common::YEAR_HOURS] += 50.0;
        let after = compute_summary_stats(&load, &cal);
        assert!(after.peak >= before.peak);
        assert!(after.avg_daily >= before.avg_daily);
        assert!(after.total_annual >= before.total_annual);
    }
}

#[test]
fn band_has_twelve_ordered_points_for_any_length() {
    let cal = common::calendar();
    for len in [1, 23, 24, 700, 4000, common::YEAR_HOURS, 8784, 10_000] {
        let solar = common::random_series(len, 1.0, len as u64);
        let band = compute_monthly_solar_band(&solar, &cal);
        let labels: Vec<&str> = band.iter().map(|p| p.month).collect();
        assert_eq!(labels, MONTH_LABELS.to_vec(), "len {len}");
    }
}

#[test]
fn band_min_avg_max_ordering() {
    let cal = common::calendar();
    for seed in 0..10 {
        let solar = common::random_series(common::YEAR_HOURS, 1.0, seed);
        for p in compute_monthly_solar_band(&solar, &cal) {
            assert!(p.min <= p.avg + ROUNDING_EPS, "{} seed {seed}", p.month);
            assert!(p.avg <= p.max + ROUNDING_EPS, "{} seed {seed}", p.month);
        }
    }
}

#[test]
fn profile_max_dominates_average() {
    let cal = common::calendar();
    for seed in 0..10 {
        let load = common::random_series(common::YEAR_HOURS, 8.0, seed);
        let profile = compute_seasonal_hourly_profile(&load, &cal);
        assert_eq!(profile.len(), 24);
        for (h, p) in profile.iter().enumerate() {
            assert_eq!(p.hour, h);
            assert!(p.summer_max + ROUNDING_EPS >= p.summer_avg);
            assert!(p.winter_max + ROUNDING_EPS >= p.winter_avg);
        }
    }
}

#[test]
fn derivations_are_idempotent() {
    let cal = common::calendar();
    let result = common::sample_result(7);
    let first = Dashboard::build(&result, &cal);
    let second = Dashboard::build(&result, &cal);
    assert_eq!(first.stats, second.stats);
    assert_eq!(first.solar_band, second.solar_band);
    assert_eq!(first.seasonal_profile, second.seasonal_profile);
}

#[test]
fn inputs_are_left_untouched() {
    let cal = common::calendar();
    let result = common::sample_result(3);
    let snapshot = result.clone();
    let _ = Dashboard::build(&result, &cal);
    assert_eq!(result, snapshot);
}
