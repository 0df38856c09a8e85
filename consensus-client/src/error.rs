//! Client error types

use thiserror::Error;

/// Fallback message when a failure response carries nothing usable
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Message for a validation failure without a readable first issue
pub const VALIDATION_ERROR_MESSAGE: &str = "Validation error";

/// Transport-level failure: no response exists to classify
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network call could not complete (connect, TLS, body read)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// In-process router call failed
    #[error("in-process call failed: {0}")]
    InProcess(String),
}

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Server reported a failure (any non-2xx response)
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Transport failure, carried unchanged
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Success status with an undecodable body
    #[error("invalid response body (status {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// Request body could not be serialized
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Form body could not be encoded
    #[error("form encoding error: {0}")]
    Form(#[from] serde_urlencoded::ser::Error),

    /// Request could not be built from the given input
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Local I/O while preparing a request
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Create a classified HTTP error
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// HTTP status of a classified or decode error
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } | Self::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-provided (or fallback) message of a classified error
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Http { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Whether this is a classified 401
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Http { status: 401, .. })
    }

    /// Whether the server answered at all
    pub fn is_http(&self) -> bool {
        matches!(self, Self::Http { .. })
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
