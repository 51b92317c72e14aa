use std::env;
use std::path::PathBuf;

pub struct CliOptions {
    pub result: PathBuf,
    pub config: Option<PathBuf>,
    pub preset: Option<String>,
    pub band_out: Option<PathBuf>,
    pub profile_out: Option<PathBuf>,
    pub report_out: Option<PathBuf>,
}

pub fn parse_args() -> Result<CliOptions, String> {
    let args: Vec<String> = env::args().skip(1).collect();
    parse_args_from(args)
}

fn parse_args_from(args: Vec<String>) -> Result<CliOptions, String> {
    if args.len() == 1 && (args[0] == "--help" || args[0] == "-h") {
        print_usage();
        std::process::exit(0);
    }
    parse_options(&args)
}

fn parse_options(args: &[String]) -> Result<CliOptions, String> {
    let mut i = 0usize;
    let mut result = None;
    let mut config = None;
    let mut preset = None;
    let mut band_out = None;
    let mut profile_out = None;
    let mut report_out = None;

    while i < args.len() {
        match args[i].as_str() {
            "--result" => {
                i += 1;
                let path = args.next_or_err(
                    i,
                    "missing value for --result (expected a JSON file path)",
                )?;
                if result.replace(PathBuf::from(path)).is_some() {
                    return Err("--result provided more than once".to_string());
                }
            }
            "--config" => {
                i += 1;
                let path = args.next_or_err(
                    i,
                    "missing value for --config (expected a TOML file path)",
                )?;
                if config.replace(PathBuf::from(path)).is_some() {
                    return Err("--config provided more than once".to_string());
                }
            }
            "--preset" => {
                i += 1;
                let name =
                    args.next_or_err(i, "missing value for --preset (expected a preset name)")?;
                if preset.replace(name.to_string()).is_some() {
                    return Err("--preset provided more than once".to_string());
                }
            }
            "--band-out" => {
                i += 1;
                let path =
                    args.next_or_err(i, "missing value for --band-out (expected a file path)")?;
                if band_out.replace(PathBuf::from(path)).is_some() {
                    return Err("--band-out provided more than once".to_string());
                }
            }
            "--profile-out" => {
                i += 1;
                let path = args.next_or_err(
                    i,
                    "missing value for --profile-out (expected a file path)",
                )?;
                if profile_out.replace(PathBuf::from(path)).is_some() {
                    return Err("--profile-out provided more than once".to_string());
                }
            }
            "--report-out" => {
                i += 1;
                let path = args.next_or_err(
                    i,
                    "missing value for --report-out (expected a file path)",
                )?;
                if report_out.replace(PathBuf::from(path)).is_some() {
                    return Err("--report-out provided more than once".to_string());
                }
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => return Err(format!("unknown argument: {other}")),
        }
        i += 1;
    }

    if config.is_some() && preset.is_some() {
        return Err(
            "arguments `--config` and `--preset` are mutually exclusive; choose one source"
                .to_string(),
        );
    }

    let result = result.ok_or_else(|| "missing required argument --result".to_string())?;

    Ok(CliOptions {
        result,
        config,
        preset,
        band_out,
        profile_out,
        report_out,
    })
}

trait SliceArgExt {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String>;
}

impl SliceArgExt for [String] {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String> {
        self.get(index)
            .map(String::as_str)
            .ok_or_else(|| err.to_string())
    }
}

pub fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  offgrid-calc --result <path> [--config <path> | --preset <name>] \
         [--band-out <path>] [--profile-out <path>] [--report-out <path>]"
    );
}
