//! Error types for the Outline MCP system.
//!
//! All errors in the system are represented by the [`Error`] enum.
//! Tools distinguish two categories at their boundary: client errors
//! (anything the remote API or the transport reported) and everything else.

use thiserror::Error as ThisError;

/// The core error type for all Outline operations.
#[derive(ThisError, Debug)]
pub enum Error {
    /// Remote call failed: network, auth, 4xx/5xx, undecodable body
    #[error("{message}")]
    Client { message: String },

    /// The API answered, but not with the shape we expected
    #[error("Invalid API response: {reason}")]
    InvalidResponse { reason: String },

    /// Invalid configuration
    #[error("Configuration error: {reason}")]
    ConfigError { reason: String },

    /// JSON (de)serialization failure outside the client
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic unclassified error
    #[error("{0}")]
    Other(String),
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a client error
    pub fn client(message: impl Into<String>) -> Self {
        Error::Client {
            message: message.into(),
        }
    }

    /// Create an invalid response error
    pub fn invalid_response(reason: impl Into<String>) -> Self {
        Error::InvalidResponse {
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(reason: impl Into<String>) -> Self {
        Error::ConfigError {
            reason: reason.into(),
        }
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// True for errors raised by the remote API client
    pub fn is_client(&self) -> bool {
        matches!(self, Error::Client { .. })
    }
}
