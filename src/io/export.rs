//! CSV export of dashboard series and plain-text report export.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use tracing::info;

use crate::dashboard::Dashboard;
use crate::stats::{MonthlyBandPoint, SeasonalHourPoint};

/// Column header for the monthly solar band.
const BAND_HEADER: &str = "month,max,min,avg";

/// Column header for the seasonal hourly profile.
const PROFILE_HEADER: &str = "hour,summer_avg,winter_avg,summer_max,winter_max";

/// Exports the monthly solar band to a CSV file at the given path.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_band_csv(band: &[MonthlyBandPoint], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    write_band_csv(band, io::BufWriter::new(file))?;
    info!(path = %path.display(), rows = band.len(), "solar band written");
    Ok(())
}

/// Writes the monthly solar band as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_band_csv(band: &[MonthlyBandPoint], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(BAND_HEADER.split(','))?;

    for p in band {
        wtr.write_record(&[
            p.month.to_string(),
            format!("{:.2}", p.max),
            format!("{:.2}", p.min),
            format!("{:.2}", p.avg),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Exports the seasonal hourly profile to a CSV file at the given path.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_profile_csv(profile: &[SeasonalHourPoint], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    write_profile_csv(profile, io::BufWriter::new(file))?;
    info!(path = %path.display(), rows = profile.len(), "seasonal profile written");
    Ok(())
}

/// Writes the seasonal hourly profile as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_profile_csv(profile: &[SeasonalHourPoint], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(PROFILE_HEADER.split(','))?;

    for p in profile {
        wtr.write_record(&[
            p.hour.to_string(),
            format!("{:.2}", p.summer_avg),
            format!("{:.2}", p.winter_avg),
            format!("{:.2}", p.summer_max),
            format!("{:.2}", p.winter_max),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes the plain-text simulation report to `path`.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn export_report(dashboard: &Dashboard, date: &str, path: &Path) -> io::Result<()> {
    fs::write(path, dashboard.report(date).to_string())?;
    info!(path = %path.display(), "report written");
    Ok(())
}
