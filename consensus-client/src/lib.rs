//! Consensus Client - HTTP client for the fuzzy-consensus API
//!
//! Every call funnels through the same path:
//! [`ConsensusClient`] endpoint → [`Dispatcher`] (attaches the bearer token)
//! → [`Transport`] → [`ResponseInterpreter`] (classifies, runs the session
//! interceptor on 401) → typed value or [`ClientError`].
//!
//! No retries, no caching. The only persistent state is the session token.

pub mod client;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod request;
pub mod response;
pub mod session;
pub mod token;
pub mod transport;

pub use client::{ClientBuilder, ConsensusClient, PhotoUpload};
pub use config::ClientConfig;
pub use dispatch::Dispatcher;
pub use error::{ClientError, ClientResult, TransportError};
pub use request::{ContentKind, MultipartForm, RequestBody, RequestDescriptor};
pub use response::{ErrorCopy, ResponseInterpreter};
pub use session::{
    Navigator, RecordingNavigator, SessionInterceptor, TracingNavigator, UnauthorizedHandler,
};
pub use token::{FileTokenStore, MemoryTokenStore, TokenStore};
pub use transport::{NetworkTransport, RawResponse, Transport};
#[cfg(feature = "in-process")]
pub use transport::OneshotTransport;

// Re-export shared types for convenience
pub use shared::client::{PasswordChange, RegisterRequest, TokenResponse};
pub use shared::models;
