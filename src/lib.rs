// src/lib.rs
//! Pulls `passes total` counts out of JUnit XML, TAP, or plain-text test
//! reports.
pub mod extractors;
pub mod utils;

pub use extractors::{extract_path, Report, ReportFormat, ResultCount, ResultExtractor};
pub use utils::{AppError, ExtractError};
