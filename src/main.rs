//! offgrid-calc entry point — CLI wiring, config loading, and exports.

use std::io;
use std::process;

use offgrid_calc::cli::{self, CliOptions};
use offgrid_calc::config::DashboardConfig;
use offgrid_calc::dashboard::Dashboard;
use offgrid_calc::io::export::{export_band_csv, export_profile_csv, export_report};
use offgrid_calc::result::SimulationResult;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn load_config(cli: &CliOptions) -> DashboardConfig {
    // --config takes priority, then --preset, then the northern default
    let loaded = if let Some(ref path) = cli.config {
        DashboardConfig::from_toml_file(path)
    } else if let Some(ref name) = cli.preset {
        DashboardConfig::from_preset(name)
    } else {
        Ok(DashboardConfig::northern())
    };

    let config = loaded.unwrap_or_else(|e| {
        eprintln!("{e}");
        process::exit(1);
    });

    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }
    config
}

fn main() {
    init_tracing();

    let cli = cli::parse_args().unwrap_or_else(|e| {
        eprintln!("error: {e}");
        cli::print_usage();
        process::exit(1);
    });

    let config = load_config(&cli);
    let calendar = config.calendar.calendar();

    let result = SimulationResult::from_json_file(&cli.result).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        process::exit(1);
    });

    let dashboard = Dashboard::build(&result, &calendar);
    let date = chrono::Local::now().date_naive().to_string();

    println!("{}", dashboard.report(&date));

    println!("\n--- Solar Band (daily kWh) ---");
    for p in &dashboard.solar_band {
        println!(
            "{:<4} max {:>8.2}  min {:>8.2}  avg {:>8.2}",
            p.month, p.max, p.min, p.avg
        );
    }

    println!("\n--- Seasonal Load Profile (kW) ---");
    for p in &dashboard.seasonal_profile {
        println!(
            "{:02}h  summer avg {:>7.2} max {:>7.2}  winter avg {:>7.2} max {:>7.2}",
            p.hour, p.summer_avg, p.summer_max, p.winter_avg, p.winter_max
        );
    }

    if let Some(ref path) = cli.band_out {
        if let Err(e) = export_band_csv(&dashboard.solar_band, path) {
            eprintln!("error: failed to write band CSV: {e}");
            process::exit(1);
        }
    }
    if let Some(ref path) = cli.profile_out {
        if let Err(e) = export_profile_csv(&dashboard.seasonal_profile, path) {
            eprintln!("error: failed to write profile CSV: {e}");
            process::exit(1);
        }
    }
    if let Some(ref path) = cli.report_out {
        if let Err(e) = export_report(&dashboard, &date, path) {
            eprintln!("error: failed to write report: {e}");
            process::exit(1);
        }
    }
}
