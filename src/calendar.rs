//! Synthetic reference-year calendar for hourly series.
//!
//! Maps hour indices onto calendar coordinates without a date library. The
//! reference year is always non-leap; a default [`Calendar`] covers 365 days
//! (8760 hours) with summer running April through September.

use std::fmt;

use serde::Serialize;

/// Hours in one calendar day.
pub const HOURS_PER_DAY: usize = 24;

/// Number of months in the reference year.
pub const MONTHS: usize = 12;

/// Month lengths of the non-leap reference year.
pub const DEFAULT_DAYS_IN_MONTH: [usize; MONTHS] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Short month labels, January first.
pub const MONTH_LABELS: [&str; MONTHS] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// First summer month (0-indexed, April).
pub const DEFAULT_SUMMER_START: usize = 3;

/// Last summer month (0-indexed, September).
pub const DEFAULT_SUMMER_END: usize = 8;

/// Two-way seasonal partition of the reference year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Summer,
    Winter,
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Summer => write!(f, "summer"),
            Season::Winter => write!(f, "winter"),
        }
    }
}

/// Calendar coordinates of a single hour in the reference year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarEntry {
    /// Day of year, starting at 0.
    pub day_of_year: usize,
    /// Hour within the day (0..24).
    pub hour_of_day: usize,
    /// Month index (0 = January).
    pub month: usize,
    /// Season the month belongs to.
    pub season: Season,
}

/// Immutable reference-year calendar.
///
/// Built once from month lengths and a summer month range, then passed by
/// reference into every aggregation.
///
/// # Examples
///
/// ```
/// use offgrid_calc::calendar::{Calendar, Season};
///
/// let cal = Calendar::default();
/// assert_eq!(cal.hours_in_year(), 8760);
/// assert_eq!(cal.day_to_month(31), Some(1));
/// assert_eq!(cal.season(6), Season::Summer);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    days_in_month: [usize; MONTHS],
    summer_start: usize,
    summer_end: usize,
    /// Expanded day index → month index lookup.
    day_to_month: Vec<usize>,
}

impl Calendar {
    /// Creates a calendar from month lengths and an inclusive summer range.
    ///
    /// A range with `summer_start > summer_end` wraps around the year end
    /// (e.g. October through March).
    ///
    /// # Arguments
    ///
    /// * `days_in_month` - Length of each month, January first
    /// * `summer_start` - First summer month (0-indexed)
    /// * `summer_end` - Last summer month (0-indexed, inclusive)
    pub fn new(days_in_month: [usize; MONTHS], summer_start: usize, summer_end: usize) -> Self {
        let day_to_month = days_in_month
            .iter()
            .enumerate()
            .flat_map(|(month, &days)| std::iter::repeat_n(month, days))
            .collect();
        Self {
            days_in_month,
            summer_start,
            summer_end,
            day_to_month,
        }
    }

    /// Month lengths, January first.
    pub fn days_in_month(&self) -> &[usize; MONTHS] {
        &self.days_in_month
    }

    /// Total days in the reference year.
    pub fn days_in_year(&self) -> usize {
        self.day_to_month.len()
    }

    /// Total hours in the reference year.
    pub fn hours_in_year(&self) -> usize {
        self.days_in_year() * HOURS_PER_DAY
    }

    /// Month containing the given day of year, or `None` past the year end.
    pub fn day_to_month(&self, day: usize) -> Option<usize> {
        self.day_to_month.get(day).copied()
    }

    /// Whether the month falls inside the summer range.
    pub fn is_summer(&self, month: usize) -> bool {
        if self.summer_start <= self.summer_end {
            (self.summer_start..=self.summer_end).contains(&month)
        } else {
            month >= self.summer_start || month <= self.summer_end
        }
    }

    /// Season of the given month.
    pub fn season(&self, month: usize) -> Season {
        if self.is_summer(month) {
            Season::Summer
        } else {
            Season::Winter
        }
    }

    /// Calendar coordinates of an hour index, or `None` past the year end.
    pub fn entry(&self, hour_index: usize) -> Option<CalendarEntry> {
        let day_of_year = hour_index / HOURS_PER_DAY;
        let month = self.day_to_month(day_of_year)?;
        Some(CalendarEntry {
            day_of_year,
            hour_of_day: hour_index % HOURS_PER_DAY,
            month,
            season: self.season(month),
        })
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new(DEFAULT_DAYS_IN_MONTH, DEFAULT_SUMMER_START, DEFAULT_SUMMER_END)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_year_is_non_leap() {
        let cal = Calendar::default();
        assert_eq!(cal.days_in_year(), 365);
        assert_eq!(cal.hours_in_year(), 8760);
    }

    #[test]
    fn month_boundaries() {
        let cal = Calendar::default();
        assert_eq!(cal.day_to_month(0), Some(0));
        assert_eq!(cal.day_to_month(30), Some(0));
        assert_eq!(cal.day_to_month(31), Some(1));
        assert_eq!(cal.day_to_month(58), Some(1));
        assert_eq!(cal.day_to_month(59), Some(2));
        assert_eq!(cal.day_to_month(364), Some(11));
    }

    #[test]
    fn day_past_year_end_has_no_month() {
        let cal = Calendar::default();
        assert_eq!(cal.day_to_month(365), None);
        assert_eq!(cal.entry(8760), None);
    }

    #[test]
    fn summer_is_april_through_september() {
        let cal = Calendar::default();
        let summer: Vec<usize> = (0..MONTHS).filter(|&m| cal.is_summer(m)).collect();
        assert_eq!(summer, vec![3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn wrapping_summer_range() {
        let cal = Calendar::new(DEFAULT_DAYS_IN_MONTH, 9, 2);
        let summer: Vec<usize> = (0..MONTHS).filter(|&m| cal.is_summer(m)).collect();
        assert_eq!(summer, vec![0, 1, 2, 9, 10, 11]);
    }

    #[test]
    fn entry_coordinates() {
        let cal = Calendar::default();
        // Day 100 is April 11th, hour 5.
        let e = cal.entry(100 * 24 + 5);
        assert_eq!(
            e,
            Some(CalendarEntry {
                day_of_year: 100,
                hour_of_day: 5,
                month: 3,
                season: Season::Summer,
            })
        );

        let first = cal.entry(0).map(|e| e.season);
        assert_eq!(first, Some(Season::Winter));
    }
}
