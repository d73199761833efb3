//! Check result and classification rule

/// Sentinel status code for any transport-level failure
///
/// DNS failures, refused connections, timeouts, and TLS errors are all
/// collapsed into this one value; no HTTP response was received, so there is
/// no real status code to report.
pub const STATUS_UNREACHABLE: u16 = 0;

/// The outcome of checking a single URL
///
/// `status` is the final HTTP status code after redirects, or
/// [`STATUS_UNREACHABLE`] when the request never produced a response.
/// Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CheckResult {
    /// The URL that was checked
    pub url: String,

    /// Final HTTP status code, or 0 for a transport failure
    pub status: u16,
}

impl CheckResult {
    /// Creates a result for a URL that never produced an HTTP response
    pub fn unreachable(url: String) -> Self {
        Self {
            url,
            status: STATUS_UNREACHABLE,
        }
    }

    /// Returns true when this link counts as broken
    ///
    /// A link is broken iff its status is exactly 0 (transport failure) or
    /// >= 400 (client/server error). Everything else is healthy, including
    /// the unusual sub-200 informational codes.
    pub fn is_broken(&self) -> bool {
        self.status == STATUS_UNREACHABLE || self.status >= 400
    }
}
