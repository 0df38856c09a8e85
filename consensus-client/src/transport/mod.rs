//! Transports
//!
//! A transport issues exactly one call for a fully prepared request and
//! hands back the raw response. It never classifies: a failed call is a
//! [`TransportError`], anything the server answered is a [`RawResponse`].

mod network;
#[cfg(feature = "in-process")]
mod oneshot;

pub use network::NetworkTransport;
#[cfg(feature = "in-process")]
pub use oneshot::OneshotTransport;

use async_trait::async_trait;
use http::{HeaderMap, Method, StatusCode};

use crate::error::TransportError;
use crate::request::MultipartForm;

/// Serialized request body
#[derive(Debug, Clone, Default)]
pub enum PreparedBody {
    #[default]
    Empty,
    Bytes(Vec<u8>),
    /// Encoded by the transport, which owns the boundary header
    Multipart(MultipartForm),
}

/// Request ready to go on the wire
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: PreparedBody,
}

/// Raw server answer
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// HTTP transport trait
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: PreparedRequest) -> Result<RawResponse, TransportError>;
}
