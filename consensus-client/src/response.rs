//! Response interpretation
//!
//! Classifies a [`RawResponse`] into a decoded value or a [`ClientError`].
//! Every 401 passes through the [`UnauthorizedHandler`] before the error is
//! returned, whatever endpoint produced it.

use std::sync::Arc;

use http::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{
    ClientError, ClientResult, UNEXPECTED_ERROR_MESSAGE, VALIDATION_ERROR_MESSAGE,
};
use crate::session::UnauthorizedHandler;
use crate::transport::RawResponse;

/// Per-endpoint fallback copy for failure responses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorCopy {
    /// Decodable body without a recognizable `detail`
    pub missing_detail: &'static str,
    /// Body that is not JSON at all
    pub undecodable: &'static str,
}

impl ErrorCopy {
    pub const GENERIC: Self = Self {
        missing_detail: UNEXPECTED_ERROR_MESSAGE,
        undecodable: UNEXPECTED_ERROR_MESSAGE,
    };

    pub const LOGIN: Self = Self {
        missing_detail: "Login failed",
        undecodable: "Invalid credentials",
    };

    pub const UPLOAD: Self = Self {
        missing_detail: "Upload failed",
        undecodable: UNEXPECTED_ERROR_MESSAGE,
    };
}

impl Default for ErrorCopy {
    fn default() -> Self {
        Self::GENERIC
    }
}

/// One entry of a validation failure list
#[derive(Debug, Deserialize)]
struct ValidationIssue {
    #[serde(default)]
    msg: Option<String>,
}

/// Shape of the `detail` field of an error body
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorDetail {
    Message(String),
    Issues(Vec<Value>),
}

/// Message carried by an error body, if it has a recognizable `detail`.
///
/// - string `detail` → verbatim
/// - array `detail` → first item's `msg`, else `"Validation error"`
pub fn extract_detail_message(body: &Value) -> Option<String> {
    let detail = body.get("detail")?;
    match ErrorDetail::deserialize(detail).ok()? {
        ErrorDetail::Message(message) => Some(message),
        ErrorDetail::Issues(issues) => Some(
            issues
                .into_iter()
                .next()
                .and_then(|first| ValidationIssue::deserialize(first).ok())
                .and_then(|issue| issue.msg)
                .unwrap_or_else(|| VALIDATION_ERROR_MESSAGE.to_string()),
        ),
    }
}

/// Turns raw responses into values or classified errors
#[derive(Clone)]
pub struct ResponseInterpreter {
    handler: Arc<dyn UnauthorizedHandler>,
}

impl ResponseInterpreter {
    pub fn new(handler: Arc<dyn UnauthorizedHandler>) -> Self {
        Self { handler }
    }

    /// Interpret a response.
    ///
    /// A 204 decodes `T` from JSON `null` without touching the body, so
    /// `()` and `Option<_>` succeed.
    pub fn interpret<T: DeserializeOwned>(
        &self,
        response: RawResponse,
        copy: ErrorCopy,
    ) -> ClientResult<T> {
        let status = response.status;

        if status == StatusCode::NO_CONTENT {
            return T::deserialize(Value::Null).map_err(|source| ClientError::Decode {
                status: status.as_u16(),
                source,
            });
        }

        if status == StatusCode::UNAUTHORIZED {
            self.handler.on_unauthorized();
        }

        let decoded = serde_json::from_slice::<Value>(&response.body);

        if status.is_success() {
            let value = decoded.map_err(|source| ClientError::Decode {
                status: status.as_u16(),
                source,
            })?;
            return T::deserialize(value).map_err(|source| ClientError::Decode {
                status: status.as_u16(),
                source,
            });
        }

        let message = match decoded {
            Ok(body) => {
                extract_detail_message(&body).unwrap_or_else(|| copy.missing_detail.to_string())
            }
            Err(_) => copy.undecodable.to_string(),
        };

        tracing::debug!(status = status.as_u16(), %message, "Request failed");
        Err(ClientError::http(status.as_u16(), message))
    }
}

impl std::fmt::Debug for ResponseInterpreter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseInterpreter").finish_non_exhaustive()
    }
}
