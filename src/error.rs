//! Error taxonomy for the scraping client.
//!
//! The core distinguishes the cases the facade historically collapsed:
//! a failed request, a page whose structure no longer matches what the
//! parser expects, and a genuinely empty result set (which is not an
//! error at all: `search` returns an empty vector for it).

/// All errors the scraping client can produce.
#[derive(thiserror::Error, Debug)]
pub enum ScrapeError {
    /// The upstream site could not be reached, timed out, or answered
    /// with a non-success status.
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// The page was fetched but the expected structure (results grid,
    /// detail labels) was absent. Usually means the upstream markup
    /// changed out from under the parser.
    #[error("page structure mismatch: {0}")]
    ParseMismatch(&'static str),
}
