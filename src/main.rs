//! Health Calculator CLI
//!
//! Reads one JSON user record and prints every health metric as JSON.

use std::io::Read;
use std::path::PathBuf;

use healthcalc::{BuildInfo, HealthCalculator, HealthResult};
use tracing_subscriber::EnvFilter;

/// Get the record path from the first argument or the environment
fn get_record_path() -> Option<PathBuf> {
    std::env::args()
        .nth(1)
        .or_else(|| std::env::var("HEALTHCALC_USER_PATH").ok())
        .map(PathBuf::from)
}

fn read_record(path: Option<&PathBuf>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

fn run(json: &str) -> HealthResult<String> {
    let calculator = HealthCalculator::from_json(json)?;
    let report = calculator.report();
    Ok(serde_json::to_string_pretty(&report)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("healthcalc=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    eprintln!("{}", BuildInfo::CURRENT);

    let path = get_record_path();
    match &path {
        Some(p) => eprintln!("Reading user record from {}", p.display()),
        None => eprintln!("Reading user record from stdin..."),
    }
    let json = read_record(path.as_ref())?;

    match run(&json) {
        Ok(report) => {
            println!("{}", report);
            Ok(())
        }
        Err(e) => {
            tracing::error!("{}", e);
            Err(e.into())
        }
    }
}
