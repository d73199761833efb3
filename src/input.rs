//! URL-list ingestion
//!
//! The alternative to crawling: a newline-delimited file of URLs to check
//! directly. Blank lines are ignored; there is no comment syntax. An
//! unreadable file is fatal to the run, unlike per-URL failures later on.

use crate::SweepError;
use std::path::Path;

/// Reads a newline-delimited URL list
///
/// # Arguments
///
/// * `path` - Path to the list file
///
/// # Returns
///
/// * `Ok(Vec<String>)` - The trimmed, non-blank lines in file order
/// * `Err(SweepError)` - The file could not be read
pub fn read_url_list(path: &Path) -> Result<Vec<String>, SweepError> {
    let content = std::fs::read_to_string(path).map_err(|source| SweepError::InputList {
        path: path.display().to_string(),
        source,
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_list(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_read_simple_list() {
        let file = create_list("http://a.test/\nhttp://b.test/page\n");
        let urls = read_url_list(file.path()).unwrap();
        assert_eq!(urls, vec!["http://a.test/", "http://b.test/page"]);
    }

    #[test]
    fn test_blank_lines_ignored() {
        let file = create_list("http://a.test/\n\n   \nhttp://b.test/\n\n");
        let urls = read_url_list(file.path()).unwrap();
        assert_eq!(urls.len(), 2);
    }

    #[test]
    fn test_whitespace_trimmed() {
        let file = create_list("  http://a.test/  \n");
        let urls = read_url_list(file.path()).unwrap();
        assert_eq!(urls, vec!["http://a.test/"]);
    }

    #[test]
    fn test_empty_file_yields_empty_list() {
        let file = create_list("");
        assert!(read_url_list(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let result = read_url_list(Path::new("/nonexistent/urls.txt"));
        assert!(matches!(result, Err(SweepError::InputList { .. })));
    }
}
