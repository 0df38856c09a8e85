//! Core `ConsensusClient` definition and shared call path.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::dispatch::Dispatcher;
use crate::error::ClientResult;
use crate::request::RequestDescriptor;
use crate::response::{ErrorCopy, ResponseInterpreter};
use crate::token::TokenStore;

use super::builder::ClientBuilder;

/// HTTP client for the consensus API.
///
/// Cheap to clone; clones share the token store. Calls may run
/// concurrently; no ordering is imposed between them.
///
/// # Example
///
/// ```no_run
/// use consensus_client::{ClientConfig, ConsensusClient};
///
/// # async fn example() -> Result<(), consensus_client::ClientError> {
/// let client = ConsensusClient::new(ClientConfig::new("http://localhost:8000"))?;
/// client.login("expert@example.com", "secret").await?;
/// let projects = client.projects().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ConsensusClient {
    pub(crate) dispatcher: Dispatcher,
    pub(crate) interpreter: ResponseInterpreter,
    pub(crate) tokens: Arc<dyn TokenStore>,
    pub(crate) config: ClientConfig,
}

impl ConsensusClient {
    /// Network client with a persistent token store.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        ClientBuilder::new(config).build()
    }

    /// Builder for injecting transport, token store or navigator.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Returns the token store.
    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    /// Returns the current credential, if any.
    pub fn token(&self) -> Option<String> {
        self.tokens.get()
    }

    /// Checks if a credential is held.
    pub fn is_authenticated(&self) -> bool {
        self.tokens.get().is_some()
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Dispatch one descriptor and interpret the answer.
    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        descriptor: RequestDescriptor,
        copy: ErrorCopy,
    ) -> ClientResult<T> {
        let response = self.dispatcher.send(descriptor).await?;
        self.interpreter.interpret(response, copy)
    }
}

impl std::fmt::Debug for ConsensusClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsensusClient")
            .field("base_url", &self.dispatcher.base_url())
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}
