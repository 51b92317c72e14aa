//! Average and peak load by hour of day, split by season.

use serde::Serialize;

use super::round2;
use crate::calendar::{Calendar, HOURS_PER_DAY, Season};

/// Load statistics for one hour of the day across both seasons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeasonalHourPoint {
    /// Hour of day (0..24).
    pub hour: usize,
    /// Mean summer load at this hour (kW).
    pub summer_avg: f64,
    /// Mean winter load at this hour (kW).
    pub winter_avg: f64,
    /// Highest summer load at this hour (kW).
    pub summer_max: f64,
    /// Highest winter load at this hour (kW).
    pub winter_max: f64,
}

/// Running sum, count, and max for each hour of the day.
#[derive(Debug, Clone, Default)]
struct HourAccumulator {
    sum: [f64; HOURS_PER_DAY],
    count: [usize; HOURS_PER_DAY],
    max: [f64; HOURS_PER_DAY],
}

impl HourAccumulator {
    fn add(&mut self, hour: usize, value: f64) {
        self.sum[hour] += value;
        self.count[hour] += 1;
        if value > self.max[hour] {
            self.max[hour] = value;
        }
    }

    /// Mean at `hour`; zero when nothing was observed.
    fn avg(&self, hour: usize) -> f64 {
        self.sum[hour] / self.count[hour].max(1) as f64
    }
}

/// Computes the seasonal hourly load profile.
///
/// Scans the load series once, stopping at whichever comes first: the end of
/// the series or the end of the reference year. Returns 24 points ordered by
/// hour, or an empty vector for an empty series.
///
/// # Arguments
///
/// * `load` - Hourly load (kW), nominally one reference year long
/// * `calendar` - Reference-year calendar
pub fn compute_seasonal_hourly_profile(load: &[f64], calendar: &Calendar) -> Vec<SeasonalHourPoint> {
    if load.is_empty() {
        return Vec::new();
    }

    let mut summer = HourAccumulator::default();
    let mut winter = HourAccumulator::default();

    for (h, &value) in load.iter().enumerate().take(calendar.hours_in_year()) {
        let Some(entry) = calendar.entry(h) else {
            break;
        };
        match entry.season {
            Season::Summer => summer.add(entry.hour_of_day, value),
            Season::Winter => winter.add(entry.hour_of_day, value),
        }
    }

    (0..HOURS_PER_DAY)
        .map(|hour| SeasonalHourPoint {
            hour,
            summer_avg: round2(summer.avg(hour)),
            winter_avg: round2(winter.avg(hour)),
            summer_max: round2(summer.max[hour]),
            winter_max: round2(winter.max[hour]),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series_gives_no_points() {
        assert!(compute_seasonal_hourly_profile(&[], &Calendar::default()).is_empty());
    }

    #[test]
    fn always_24_points_in_order() {
        let profile = compute_seasonal_hourly_profile(&[1.0; 5], &Calendar::default());
        let hours: Vec<usize> = profile.iter().map(|p| p.hour).collect();
        assert_eq!(hours, (0..24).collect::<Vec<_>>());
    }

    #[test]
    fn single_winter_spike() {
        let mut load = vec![0.0; 8760];
        load[0] = 100.0;
        let profile = compute_seasonal_hourly_profile(&load, &Calendar::default());
        assert_eq!(profile[0].winter_max, 100.0);
        assert!(profile.iter().all(|p| p.summer_max == 0.0));
        // 100 spread over 182 winter days
        assert_eq!(profile[0].winter_avg, 0.55);
    }

    #[test]
    fn one_observation_averages_to_itself() {
        let profile = compute_seasonal_hourly_profile(&[100.0], &Calendar::default());
        assert_eq!(profile[0].winter_avg, 100.0);
        assert_eq!(profile[0].winter_max, 100.0);
        // unobserved hours report zero rather than NaN
        assert_eq!(profile[1].winter_avg, 0.0);
        assert_eq!(profile[0].summer_avg, 0.0);
    }

    #[test]
    fn seasons_split_by_month() {
        let cal = Calendar::default();
        let load: Vec<f64> = (0..8760)
            .map(|h| match cal.entry(h).map(|e| e.season) {
                Some(Season::Summer) => 3.0,
                _ => 1.0,
            })
            .collect();
        let profile = compute_seasonal_hourly_profile(&load, &cal);
        for p in &profile {
            assert_eq!(p.summer_avg, 3.0);
            assert_eq!(p.winter_avg, 1.0);
            assert_eq!(p.summer_max, 3.0);
            assert_eq!(p.winter_max, 1.0);
        }
    }

    #[test]
    fn scan_stops_at_year_end() {
        let mut load = vec![1.0; 8784];
        for v in &mut load[8760..] {
            *v = 500.0;
        }
        let profile = compute_seasonal_hourly_profile(&load, &Calendar::default());
        assert!(profile.iter().all(|p| p.winter_max == 1.0));
    }

    #[test]
    fn nan_poisons_average_but_not_max() {
        let load = [f64::NAN, 2.0];
        let profile = compute_seasonal_hourly_profile(&load, &Calendar::default());
        assert!(profile[0].winter_avg.is_nan());
        assert_eq!(profile[0].winter_max, 0.0);
        assert_eq!(profile[1].winter_avg, 2.0);
    }
}
