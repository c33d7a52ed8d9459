//! Error types for the stagemarkt client
//!
//! One error enum covers request building, HTTP transport, response
//! mapping and file export.

use thiserror::Error;

/// Error type for all stagemarkt client operations
#[derive(Error, Debug)]
pub enum StagemarktError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Response body did not match the expected JSON shape
    #[error("Failed to decode JSON response: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Response was valid JSON but could not be mapped
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Invalid URL format
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Rate limited by server (HTTP 429)
    #[error("Rate limited - too many requests")]
    RateLimited,

    /// Resource not found on server (HTTP 404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Server answered with a non-success status other than 404/429
    #[error("Unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// Search parameter rejected before any request was sent
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Export target has an extension no exporter handles
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// Writing an export file failed
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV writer failed
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Excel workbook could not be built or saved
    #[error("Excel error: {0}")]
    XlsxError(#[from] rust_xlsxwriter::XlsxError),
}

/// Result type alias for stagemarkt operations
pub type Result<T> = std::result::Result<T, StagemarktError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_parse_error() {
        let error = StagemarktError::ParseError("missing body.data".to_string());
        assert_eq!(error.to_string(), "Failed to parse response: missing body.data");
    }

    #[test]
    fn test_error_display_invalid_url() {
        let error = StagemarktError::InvalidUrl("not-a-url".to_string());
        assert_eq!(error.to_string(), "Invalid URL: not-a-url");
    }

    #[test]
    fn test_error_display_rate_limited() {
        let error = StagemarktError::RateLimited;
        assert_eq!(error.to_string(), "Rate limited - too many requests");
    }

    #[test]
    fn test_error_display_not_found() {
        let error = StagemarktError::NotFound("/education-detail".to_string());
        assert_eq!(error.to_string(), "Not found: /education-detail");
    }

    #[test]
    fn test_error_display_unexpected_status() {
        let error = StagemarktError::UnexpectedStatus {
            status: 503,
            url: "https://stagemarkt.nl/api/query-hub/education-search".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unexpected HTTP status 503 from https://stagemarkt.nl/api/query-hub/education-search"
        );
    }

    #[test]
    fn test_error_display_invalid_input() {
        let error = StagemarktError::InvalidInput("place cannot be empty".to_string());
        assert_eq!(error.to_string(), "Invalid input: place cannot be empty");
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: StagemarktError = json_err.into();
        assert!(matches!(error, StagemarktError::JsonError(_)));
        assert!(error.to_string().starts_with("Failed to decode JSON response"));
    }

    #[test]
    fn test_error_from_xlsx() {
        let error: StagemarktError = rust_xlsxwriter::XlsxError::ParameterError("row".to_string()).into();
        assert!(matches!(error, StagemarktError::XlsxError(_)));
        assert!(error.to_string().starts_with("Excel error"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such dir");
        let error: StagemarktError = io_err.into();
        assert_eq!(error.to_string(), "I/O error: no such dir");
    }
}
