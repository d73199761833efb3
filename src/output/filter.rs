//! Results-file filter producing a CSV report
//!
//! Reads a broken-link results file back in, drops the noise statuses, and
//! writes a numbered CSV grouped by host. Statuses 0 and 999 are excluded
//! here as report policy only; the checker itself always reports 0 as broken.

use crate::SweepError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Literal separator between link and status in a results line
const STATUS_SEPARATOR: &str = " - HTTP status code: ";

/// Optional prefix emitted by inline "found" logging; stripped when present
const BROKEN_PREFIX: &str = "Broken link found: ";

/// Statuses excluded from the report: 0 (no HTTP response) and 999
/// (bot-blocking responses from sites like LinkedIn)
const EXCLUDED_STATUSES: [u16; 2] = [0, 999];

/// One row of the filtered report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Grouping key: the host segment of the link
    pub page_url: String,

    /// The broken link itself
    pub link: String,

    /// Its recorded HTTP status
    pub status: u16,
}

/// Parses one results-file line into a link and status
///
/// Lines without the literal separator yield `None`, as do lines whose
/// status is not an integer. A leading `Broken link found: ` prefix is
/// stripped if present.
pub fn parse_result_line(line: &str) -> Option<(String, u16)> {
    let (link_part, status_part) = line.split_once(STATUS_SEPARATOR)?;

    let link = link_part
        .strip_prefix(BROKEN_PREFIX)
        .unwrap_or(link_part)
        .trim()
        .to_string();

    let status = status_part.trim().parse().ok()?;

    Some((link, status))
}

/// Extracts the report grouping key from a link
///
/// The key is the third slash-delimited segment, i.e. the host for a
/// `scheme://host/...` link. Links without that structure have no key.
fn page_url_key(link: &str) -> Option<&str> {
    link.split('/').nth(2).filter(|segment| !segment.is_empty())
}

/// Filters a results file into a CSV report
///
/// Output columns are `No.,Page URL,Link,HTTP Status Code` with 1-based row
/// numbering. Lines that fail to parse, carry an excluded status, or have a
/// malformed link are skipped with a warning.
///
/// # Arguments
///
/// * `input` - Path to a broken-link results file
/// * `output` - Destination CSV path; truncated if it exists
///
/// # Returns
///
/// * `Ok(usize)` - Number of rows written (excluding the header)
/// * `Err(SweepError)` - Input unreadable or output unwritable
pub fn filter_report(input: &Path, output: &Path) -> Result<usize, SweepError> {
    let content = std::fs::read_to_string(input)?;

    let mut rows = Vec::new();
    for line in content.lines() {
        let Some((link, status)) = parse_result_line(line) else {
            if !line.trim().is_empty() {
                tracing::warn!("Skipping unparseable line: {}", line);
            }
            continue;
        };

        if EXCLUDED_STATUSES.contains(&status) {
            continue;
        }

        let Some(page_url) = page_url_key(&link) else {
            tracing::warn!("Skipping link without a host segment: {}", link);
            continue;
        };

        rows.push(ReportRow {
            page_url: page_url.to_string(),
            link,
            status,
        });
    }

    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "No.,Page URL,Link,HTTP Status Code")?;
    for (index, row) in rows.iter().enumerate() {
        writeln!(
            writer,
            "{},{},{},{}",
            index + 1,
            row.page_url,
            row.link,
            row.status
        )?;
    }
    writer.flush()?;

    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_plain_line() {
        let parsed = parse_result_line("http://x/y - HTTP status code: 500");
        assert_eq!(parsed, Some(("http://x/y".to_string(), 500)));
    }

    #[test]
    fn test_parse_strips_found_prefix() {
        let parsed =
            parse_result_line("Broken link found: http://x/y - HTTP status code: 404");
        assert_eq!(parsed, Some(("http://x/y".to_string(), 404)));
    }

    #[test]
    fn test_parse_rejects_line_without_separator() {
        assert_eq!(parse_result_line("just some text"), None);
    }

    #[test]
    fn test_parse_rejects_non_numeric_status() {
        assert_eq!(parse_result_line("http://x/y - HTTP status code: abc"), None);
    }

    #[test]
    fn test_page_url_key_is_host() {
        assert_eq!(page_url_key("https://example.com/a/b"), Some("example.com"));
        assert_eq!(page_url_key("http://x/y"), Some("x"));
    }

    #[test]
    fn test_page_url_key_missing_for_malformed_link() {
        assert_eq!(page_url_key("example.com/a"), None);
        assert_eq!(page_url_key("mailto:a@example.com"), None);
    }

    #[test]
    fn test_filter_excludes_sentinel_statuses() {
        let mut input = NamedTempFile::new().unwrap();
        writeln!(input, "http://a.test/one - HTTP status code: 404").unwrap();
        writeln!(input, "http://a.test/two - HTTP status code: 0").unwrap();
        writeln!(input, "http://a.test/three - HTTP status code: 999").unwrap();
        writeln!(input, "http://a.test/four - HTTP status code: 503").unwrap();
        input.flush().unwrap();

        let output = NamedTempFile::new().unwrap();
        let count = filter_report(input.path(), output.path()).unwrap();
        assert_eq!(count, 2);

        let csv = std::fs::read_to_string(output.path()).unwrap();
        assert_eq!(
            csv,
            "No.,Page URL,Link,HTTP Status Code\n\
             1,a.test,http://a.test/one,404\n\
             2,a.test,http://a.test/four,503\n"
        );
    }

    #[test]
    fn test_filter_skips_garbage_lines() {
        let mut input = NamedTempFile::new().unwrap();
        writeln!(input, "noise without separator").unwrap();
        writeln!(input, "http://a.test/x - HTTP status code: 500").unwrap();
        input.flush().unwrap();

        let output = NamedTempFile::new().unwrap();
        let count = filter_report(input.path(), output.path()).unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_filter_missing_input_fails() {
        let output = NamedTempFile::new().unwrap();
        let result = filter_report(Path::new("/nonexistent/results.txt"), output.path());
        assert!(result.is_err());
    }
}
