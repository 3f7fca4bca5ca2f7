// src/extractors/mod.rs
pub mod junit;
pub mod tap;
pub mod text;

use std::fmt;
use std::path::Path;

use crate::utils::error::ExtractError;

// Re-export key extraction types for convenience
pub use junit::JunitExtractor;
pub use tap::TapExtractor;
pub use text::TextExtractor;

/// Raw contents of a test report, read once and never modified.
#[derive(Debug, Clone)]
pub struct Report {
    bytes: Vec<u8>,
}

impl Report {
    /// Reads the whole file into memory.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, ExtractError> {
        let bytes = std::fs::read(path.as_ref())?;
        tracing::debug!("Read {} bytes from {}", bytes.len(), path.as_ref().display());
        Ok(Self { bytes })
    }

    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self { bytes: bytes.into() }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// UTF-8 view of the report.
    pub fn text(&self) -> Result<&str, ExtractError> {
        Ok(std::str::from_utf8(&self.bytes)?)
    }
}

/// Pass and total counts pulled out of a report.
///
/// `passes <= total` is expected for sane reports but not enforced: a JUnit
/// document whose failures exceed its test count yields a negative `passes`.
/// Counts are i128 wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResultCount {
    pub passes: i128,
    pub total: i128,
}

impl ResultCount {
    pub fn new(passes: i128, total: i128) -> Self {
        Self { passes, total }
    }
}

impl fmt::Display for ResultCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.passes, self.total)
    }
}

/// A strategy for counting results in one report format.
pub trait ResultExtractor {
    /// Short name used in log messages.
    fn name(&self) -> &'static str;

    fn extract(&self, report: &Report) -> Result<ResultCount, ExtractError>;

    /// Reads `path` and extracts from its contents.
    fn extract_file(&self, path: &Path) -> Result<ResultCount, ExtractError> {
        let report = Report::read(path)?;
        self.extract(&report)
    }
}

/// Report formats recognised by file name suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Junit,
    Tap,
    Text,
}

impl ReportFormat {
    /// Picks a format from the path's textual suffix. Case-sensitive;
    /// anything that is not `.xml` or `.tap` is treated as free text.
    pub fn from_path(path: &Path) -> Self {
        let name = path.to_string_lossy();
        if name.ends_with(".xml") {
            ReportFormat::Junit
        } else if name.ends_with(".tap") {
            ReportFormat::Tap
        } else {
            ReportFormat::Text
        }
    }

    pub fn extractor(self) -> &'static dyn ResultExtractor {
        match self {
            ReportFormat::Junit => &JunitExtractor,
            ReportFormat::Tap => &TapExtractor,
            ReportFormat::Text => &TextExtractor,
        }
    }
}

/// Detects the format of `path`, then reads and extracts it.
pub fn extract_path(path: &Path) -> Result<ResultCount, ExtractError> {
    let format = ReportFormat::from_path(path);
    let extractor = format.extractor();
    tracing::info!("Using {} extractor for {}", extractor.name(), path.display());

    let count = extractor.extract_file(path)?;
    tracing::info!("Extracted {} passes out of {} tests", count.passes, count.total);
    Ok(count)
}
