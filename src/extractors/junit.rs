// src/extractors/junit.rs

use std::borrow::Cow;

use encoding_rs::Encoding;
use once_cell::sync::Lazy;
use regex::bytes::Regex;
use roxmltree::{Document, Node, ParsingOptions};

use super::{Report, ResultCount, ResultExtractor};
use crate::utils::error::ExtractError;

// encoding="..." inside a leading <?xml ...?> declaration
static XML_ENCODING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^<\?xml[^>]*?\bencoding\s*=\s*["']([A-Za-z0-9._:-]+)["']"#)
        .expect("Failed to compile XML_ENCODING_RE")
});

/// Reads the counters declared on the root element of a JUnit-style XML
/// report (`tests`, `failures`, `errors`). Individual test cases are not
/// inspected.
#[derive(Debug, Default, Clone, Copy)]
pub struct JunitExtractor;

impl JunitExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Decodes the report to text. A byte order mark wins over the XML
    /// declaration; with neither, the report must be UTF-8.
    fn decode(report: &Report) -> Result<Cow<'_, str>, ExtractError> {
        let bytes = report.bytes();
        if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
            tracing::debug!("Report has a {} byte order mark", encoding.name());
            return Self::decode_as(encoding, &bytes[bom_len..]);
        }

        let Some(caps) = XML_ENCODING_RE.captures(bytes) else {
            return Ok(Cow::Borrowed(report.text()?));
        };
        let label = &caps[1];
        let encoding = Encoding::for_label(label).ok_or_else(|| {
            ExtractError::UnknownEncoding(String::from_utf8_lossy(label).into_owned())
        })?;
        tracing::debug!("Report declares encoding {}", encoding.name());
        Self::decode_as(encoding, bytes)
    }

    fn decode_as<'a>(encoding: &'static Encoding, bytes: &'a [u8]) -> Result<Cow<'a, str>, ExtractError> {
        encoding
            .decode_without_bom_handling_and_without_replacement(bytes)
            .ok_or(ExtractError::Malformed(encoding.name()))
    }

    /// Reads an integer attribute from `node`, `0` when absent.
    fn counter(node: Node, name: &str) -> Result<i128, ExtractError> {
        match node.attribute(name) {
            None => {
                tracing::debug!("Root attribute '{}' absent, using 0", name);
                Ok(0)
            }
            Some(raw) => raw.trim().parse::<i128>().map_err(|_| ExtractError::InvalidAttribute {
                name: name.to_string(),
                value: raw.to_string(),
            }),
        }
    }
}

impl ResultExtractor for JunitExtractor {
    fn name(&self) -> &'static str {
        "junit"
    }

    fn extract(&self, report: &Report) -> Result<ResultCount, ExtractError> {
        let xml = Self::decode(report)?;

        // DTDs show up in some generators' output; entities are still not fetched
        let mut options = ParsingOptions::default();
        options.allow_dtd = true;
        let document = Document::parse_with_options(&xml, options)?;

        let root = document.root_element();
        tracing::debug!("JUnit root element: <{}>", root.tag_name().name());

        let tests = Self::counter(root, "tests")?;
        let failures = Self::counter(root, "failures")?;
        let errors = Self::counter(root, "errors")?;
        tracing::debug!("tests={} failures={} errors={}", tests, failures, errors);

        let passes = tests.saturating_sub(failures).saturating_sub(errors);
        Ok(ResultCount::new(passes, tests))
    }
}
