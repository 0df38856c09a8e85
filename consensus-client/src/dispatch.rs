//! Request dispatcher
//!
//! Turns a [`RequestDescriptor`] into exactly one transport call. Attaches
//! the bearer credential when one is held, never a placeholder.

use std::sync::Arc;

use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderMap, HeaderValue};

use crate::error::{ClientError, ClientResult};
use crate::request::{RequestBody, RequestDescriptor};
use crate::token::TokenStore;
use crate::transport::{PreparedBody, PreparedRequest, RawResponse, Transport};

/// Builds and issues requests against the configured base URL
#[derive(Clone)]
pub struct Dispatcher {
    transport: Arc<dyn Transport>,
    tokens: Arc<dyn TokenStore>,
    base_url: String,
}

impl Dispatcher {
    pub fn new(
        transport: Arc<dyn Transport>,
        tokens: Arc<dyn TokenStore>,
        base_url: &str,
    ) -> Self {
        Self {
            transport,
            tokens,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a descriptor path
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Serialize the descriptor into a transport request.
    pub fn prepare(&self, descriptor: RequestDescriptor) -> ClientResult<PreparedRequest> {
        let mut headers = HeaderMap::new();

        if let Some(kind) = descriptor.content_kind()
            && let Some(value) = kind.header_value()
        {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(value));
        }

        if let Some(token) = self.tokens.get() {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| ClientError::Config(format!("Invalid token: {e}")))?;
            headers.insert(AUTHORIZATION, value);
        }

        let body = match descriptor.body {
            RequestBody::Empty => PreparedBody::Empty,
            RequestBody::Json(value) => PreparedBody::Bytes(serde_json::to_vec(&value)?),
            RequestBody::Form(encoded) => PreparedBody::Bytes(encoded.into_bytes()),
            RequestBody::Multipart(form) => PreparedBody::Multipart(form),
        };

        Ok(PreparedRequest {
            method: descriptor.method,
            url: self.url(&descriptor.path),
            headers,
            body,
        })
    }

    /// Issue one request. Transport failures come back unclassified.
    pub async fn send(&self, descriptor: RequestDescriptor) -> ClientResult<RawResponse> {
        let method = descriptor.method.clone();
        let path = descriptor.path.clone();
        let request = self.prepare(descriptor)?;

        let response = self.transport.execute(request).await.map_err(|e| {
            tracing::debug!(%method, %path, "Transport failure: {}", e);
            ClientError::Transport(e)
        })?;

        tracing::debug!(%method, %path, status = response.status.as_u16(), "Request completed");
        Ok(response)
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
