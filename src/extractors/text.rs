// src/extractors/text.rs

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Report, ResultCount, ResultExtractor};
use crate::utils::error::ExtractError;

/// Which count a summary pattern feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Pass,
    Fail,
    Total,
}

// Summary patterns, tried in this order. Within a category the last pattern
// that matches wins. Fail counts are matched but never used.
static SUMMARY_PATTERNS: Lazy<Vec<(Regex, Category)>> = Lazy::new(|| {
    [
        (r"(?i)(\d+)\s+pass", Category::Pass),
        (r"(?i)(\d+)\s+passed", Category::Pass),
        (r"(?i)(\d+)\s+fail", Category::Fail),
        (r"(?i)(\d+)\s+failed", Category::Fail),
        (r"(?i)(\d+)\s+test", Category::Total),
        (r"(?i)Tests:\s*(\d+)", Category::Total),
    ]
    .iter()
    .map(|(pat, category)| {
        (
            Regex::new(pat).expect("Failed to compile SUMMARY_PATTERNS"),
            *category,
        )
    })
    .collect()
});

/// Best-effort scan of a plain-text test summary, used when the file name
/// doesn't identify a structured format.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextExtractor;

impl TextExtractor {
    pub fn new() -> Self {
        Self
    }

    /// First match of `re` in `content`, parsed as an integer.
    fn first_number(re: &Regex, content: &str) -> Option<i128> {
        let caps = re.captures(content)?;
        let digits = &caps[1];
        match digits.parse::<i128>() {
            Ok(n) => Some(n),
            Err(e) => {
                tracing::warn!("Ignoring unparseable count {:?} for pattern {}: {}", digits, re.as_str(), e);
                None
            }
        }
    }
}

impl ResultExtractor for TextExtractor {
    fn name(&self) -> &'static str {
        "text"
    }

    fn extract(&self, report: &Report) -> Result<ResultCount, ExtractError> {
        let content = report.text()?;

        let mut count = ResultCount::default();
        for (re, category) in SUMMARY_PATTERNS.iter() {
            let Some(n) = Self::first_number(re, content) else {
                tracing::trace!("No match for pattern {}", re.as_str());
                continue;
            };
            tracing::debug!("Pattern {} matched {} ({:?})", re.as_str(), n, category);

            match category {
                Category::Pass => count.passes = n,
                Category::Total => count.total = n,
                Category::Fail => {}
            }
        }

        Ok(count)
    }
}
