//! Error types for the Playground client SDK.

/// Default message used when an error response carries no `detail` field.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Errors that can occur when using the Playground client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx API response
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message from the response body's `detail` field, or a generic default
        message: String,
        /// Decoded response body (`{}` when the body was not valid JSON)
        details: serde_json::Value,
    },

    /// A 2xx response whose body could not be converted to the expected type
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Endpoint path does not start with `/`
    #[error("Invalid endpoint: {0}")]
    InvalidUrl(String),

    /// Serialization/deserialization error on the request side
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Returns the HTTP status code for API errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns the server-supplied detail payload for API errors.
    pub fn details(&self) -> Option<&serde_json::Value> {
        match self {
            ClientError::Api { details, .. } => Some(details),
            _ => None,
        }
    }

    /// Returns true if this error is a 404 response.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_extraction() {
        let err = ClientError::Api {
            status: 404,
            message: "Dataset not found".to_string(),
            details: serde_json::json!({"detail": "Dataset not found"}),
        };
        assert_eq!(err.status(), Some(404));
        assert!(err.is_not_found());

        let config = ClientError::Config("bad url".to_string());
        assert_eq!(config.status(), None);
        assert!(!config.is_not_found());
    }

    #[test]
    fn test_details_extraction() {
        let err = ClientError::Api {
            status: 500,
            message: GENERIC_ERROR_MESSAGE.to_string(),
            details: serde_json::json!({}),
        };
        assert_eq!(err.details(), Some(&serde_json::json!({})));

        let invalid = ClientError::InvalidResponse("not a page".to_string());
        assert_eq!(invalid.details(), None);
    }

    #[test]
    fn test_display_includes_message() {
        let err = ClientError::Api {
            status: 403,
            message: "Access denied".to_string(),
            details: serde_json::Value::Object(Default::default()),
        };
        assert!(err.to_string().contains("Access denied"));
        assert!(err.to_string().contains("403"));
    }
}
