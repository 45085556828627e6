//! Error types for the lava-api library

use thiserror::Error;

/// Result type alias for lava-api operations
pub type Result<T> = std::result::Result<T, LavaError>;

/// Main error type for lava-api operations
#[derive(Error, Debug)]
pub enum LavaError {
    /// Configuration error (bad or missing token, invalid base URL)
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Network or transport failure, including a malformed response body
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// The remote service returned a `status: "error"` envelope
    #[error("Remote error {code}: {message}")]
    Remote { message: String, code: i64 },
}

impl LavaError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a remote error from an error envelope
    pub fn remote(message: impl Into<String>, code: i64) -> Self {
        Self::Remote {
            message: message.into(),
            code,
        }
    }

    /// Numeric error code reported by the remote service, if any
    pub fn code(&self) -> Option<i64> {
        match self {
            Self::Remote { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for LavaError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for LavaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Transport {
            message: format!("malformed response body: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_display() {
        let err = LavaError::remote("Invalid token", 5);
        assert_eq!(err.to_string(), "Remote error 5: Invalid token");
        assert_eq!(err.code(), Some(5));
    }

    #[test]
    fn test_config_error_has_no_code() {
        let err = LavaError::config("token must not be empty");
        assert_eq!(err.code(), None);
        assert!(err.to_string().contains("token must not be empty"));
    }

    #[test]
    fn test_json_error_maps_to_transport() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = LavaError::from(parse_err);
        assert!(matches!(err, LavaError::Transport { .. }));
        assert!(err.to_string().contains("malformed response body"));
    }
}
