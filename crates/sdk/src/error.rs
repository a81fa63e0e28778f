//! Error types for the Rocketlane SDK.

/// Result type for SDK operations.
pub type RocketlaneResult<T> = Result<T, RocketlaneError>;

/// Error types that can occur when calling Rocketlane.
#[derive(Debug, thiserror::Error)]
pub enum RocketlaneError {
    /// A required argument was absent, null or blank.
    #[error("Missing required parameter '{0}'.")]
    MissingParameter(String),

    /// An argument had a shape that cannot be sent.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// An argument the operation does not accept.
    #[error("Unknown parameter '{name}' for operation '{operation}'")]
    UnknownParameter { operation: String, name: String },

    /// No operation with this name exists.
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Rocketlane answered with a non-2xx status.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

impl RocketlaneError {
    /// Create an API error from a status code and response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = match body.trim() {
            "" => format!("HTTP {}", status),
            text => text.to_string(),
        };
        Self::Api { status, message }
    }

    /// True for errors raised before any request was sent.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::MissingParameter(_)
                | Self::InvalidParameter { .. }
                | Self::UnknownParameter { .. }
                | Self::UnknownOperation(_)
                | Self::Config(_)
                | Self::InvalidUrl(_)
        )
    }

    /// HTTP status of an API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
