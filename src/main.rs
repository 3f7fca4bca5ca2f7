// src/main.rs
use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use test_result_parser::extractors;
use test_result_parser::utils::{self, AppError};

/// Prints "<passes> <total>" for a JUnit XML, TAP, or plain-text test report
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Test results file (.xml = JUnit, .tap = TAP, anything else = text)
    #[arg(allow_hyphen_values = true)]
    report: Option<PathBuf>,

    /// Anything after the report path is accepted and ignored
    #[arg(hide = true, allow_hyphen_values = true)]
    extra: Vec<OsString>,
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::debug!("Starting with args: {:?}", args);
    if !args.extra.is_empty() {
        tracing::debug!("Ignoring {} extra argument(s)", args.extra.len());
    }

    // 3. Usage and missing-file problems are reported on stdout with exit 1
    let path = match check_args(&args) {
        Ok(path) => path,
        Err(e) => {
            println!("{}", e);
            std::process::exit(1);
        }
    };

    // 4. Extract and print; extraction errors propagate as a failed run
    let count = extractors::extract_path(&path)?;
    println!("{}", count);

    Ok(())
}

fn check_args(args: &Args) -> Result<PathBuf, AppError> {
    let path = args.report.clone().ok_or(AppError::Usage)?;
    if !path.exists() {
        tracing::error!("Report {} does not exist", path.display());
        return Err(AppError::NotFound(path));
    }
    Ok(path)
}
