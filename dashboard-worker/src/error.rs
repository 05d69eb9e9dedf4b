//! Error types for the dashboard worker
//!
//! Uses thiserror for ergonomic error definitions.
//! Upstream failures never panic; they degrade to fallback views.

use thiserror::Error;

/// Custom Result type using our Error
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Dashboard errors
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport errors talking to the orders endpoint
    #[error("HTTP error: {0}")]
    Http(String),

    /// Orders endpoint answered with a non-success status
    #[error("Orders API error: HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Body parsed, but it was not an array of orders
    #[error("Expected an array of orders, got: {0}")]
    UnexpectedShape(String),

    /// Worker runtime errors
    #[error("Worker error: {0}")]
    Worker(String),
}

impl From<worker::Error> for DashboardError {
    fn from(err: worker::Error) -> Self {
        DashboardError::Worker(err.to_string())
    }
}

impl From<reqwest::Error> for DashboardError {
    fn from(err: reqwest::Error) -> Self {
        DashboardError::Http(err.to_string())
    }
}

impl From<DashboardError> for worker::Error {
    fn from(err: DashboardError) -> Self {
        worker::Error::RustError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DashboardError::Upstream {
            status: 502,
            body: "Bad Gateway".into(),
        };
        assert_eq!(err.to_string(), "Orders API error: HTTP 502: Bad Gateway");
    }

    #[test]
    fn test_error_conversion() {
        let json_err = serde_json::from_str::<i32>("invalid").unwrap_err();
        let err: DashboardError = json_err.into();
        assert!(matches!(err, DashboardError::Json(_)));
    }

    #[test]
    fn test_unexpected_shape_is_distinct() {
        let err = DashboardError::UnexpectedShape(r#"{"message":"down"}"#.into());
        assert!(!matches!(err, DashboardError::Json(_)));
        assert!(err.to_string().contains("Expected an array"));
    }
}
