//! Broken-link results file writer

use crate::checker::CheckResult;
use crate::SweepError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes broken links to a text file, one per line
///
/// Line format is exactly `<url> - HTTP status code: <code>` where `<code>`
/// is an integer (0 for transport failure). Downstream tooling splits on the
/// literal separator, so the format must not drift.
///
/// # Arguments
///
/// * `path` - Destination file; truncated if it exists
/// * `broken` - The broken results to record
pub fn write_broken_links(path: &Path, broken: &[CheckResult]) -> Result<(), SweepError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for result in broken {
        writeln!(writer, "{} - HTTP status code: {}", result.url, result.status)?;
    }

    writer.flush()?;
    Ok(())
}
