//! Error taxonomy for the scraping pipeline.
//!
//! Every stage of a site's pipeline returns [`ScrapeError`]. Transport,
//! status and body failures are kept apart so callers can log the offending
//! status code without string matching.

use crate::models::Field;
use thiserror::Error;

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Everything that can stop a single site's pipeline.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// The site could not be reached, or the body could not be read.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The site answered with something other than `200 OK`.
    #[error("unexpected HTTP status {code}")]
    HttpStatus { code: u16 },

    /// The site URL is not a valid absolute URL.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The body could not be turned into a document.
    #[error("could not parse document: {0}")]
    Parse(String),

    /// A profile selector failed to compile.
    #[error("invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// An extraction task died before reaching the join barrier.
    #[error("{field} extraction task panicked")]
    Extraction { field: Field },
}

impl ScrapeError {
    /// Create a selector compilation error.
    pub fn selector(selector: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }

    /// Whether a caller-level retry could plausibly succeed.
    ///
    /// Transport failures, `429` and `5xx` are transient; everything else
    /// will fail the same way on the next attempt.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::HttpStatus { code } => *code == 429 || (500..600).contains(code),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_message_carries_code() {
        let err = ScrapeError::HttpStatus { code: 503 };
        assert_eq!(err.to_string(), "unexpected HTTP status 503");
    }

    #[test]
    fn test_extraction_message_names_field() {
        let err = ScrapeError::Extraction {
            field: Field::Description,
        };
        assert_eq!(err.to_string(), "description extraction task panicked");
    }

    #[test]
    fn test_transient_classification() {
        assert!(ScrapeError::HttpStatus { code: 503 }.is_transient());
        assert!(ScrapeError::HttpStatus { code: 429 }.is_transient());
        assert!(!ScrapeError::HttpStatus { code: 404 }.is_transient());
        assert!(!ScrapeError::Parse("bad".into()).is_transient());
        assert!(!ScrapeError::selector("..", "nope").is_transient());
    }
}
