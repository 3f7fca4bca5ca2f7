// src/extractors/tap.rs

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Report, ResultCount, ResultExtractor};
use crate::utils::error::ExtractError;

// A test point: "ok 3" or "not ok 12", anchored to the start of a line.
// Indented lines (subtests) and lines without an ordinal are not test points.
static TEST_POINT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^(ok|not ok)\s+\d+").expect("Failed to compile TEST_POINT_RE")
});

/// Counts test points in Test Anything Protocol output.
#[derive(Debug, Default, Clone, Copy)]
pub struct TapExtractor;

impl TapExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl ResultExtractor for TapExtractor {
    fn name(&self) -> &'static str {
        "tap"
    }

    fn extract(&self, report: &Report) -> Result<ResultCount, ExtractError> {
        // CR-only and CRLF files count their lines the same as LF files
        let content = report.text()?.replace("\r\n", "\n").replace('\r', "\n");

        let mut count = ResultCount::default();
        for caps in TEST_POINT_RE.captures_iter(&content) {
            tracing::trace!("TAP test point: {:?}", &caps[0]);
            count.total += 1;
            if &caps[1] == "ok" {
                count.passes += 1;
            }
        }

        tracing::debug!("Found {} TAP test points, {} ok", count.total, count.passes);
        Ok(count)
    }
}
