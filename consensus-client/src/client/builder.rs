//! Builder for `ConsensusClient` construction.

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::dispatch::Dispatcher;
use crate::error::ClientError;
use crate::response::ResponseInterpreter;
use crate::session::{Navigator, RecordingNavigator, SessionInterceptor};
use crate::token::{FileTokenStore, TokenStore};
use crate::transport::{NetworkTransport, Transport};

use super::ConsensusClient;

/// Builder for `ConsensusClient`.
///
/// Anything not injected falls back to the configuration: a reqwest
/// transport, a [`FileTokenStore`] under `config.token_dir` and a
/// [`RecordingNavigator`].
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use consensus_client::{ClientConfig, ConsensusClient, MemoryTokenStore};
///
/// let client = ConsensusClient::builder()
///     .config(ClientConfig::new("http://localhost:8000"))
///     .token_store(Arc::new(MemoryTokenStore::new()))
///     .build()
///     .expect("Failed to build client");
/// ```
#[derive(Default)]
pub struct ClientBuilder {
    config: ClientConfig,
    transport: Option<Arc<dyn Transport>>,
    tokens: Option<Arc<dyn TokenStore>>,
    navigator: Option<Arc<dyn Navigator>>,
}

impl ClientBuilder {
    /// Creates a new builder from a configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Sets the configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the transport.
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Sets the token store.
    pub fn token_store(mut self, tokens: Arc<dyn TokenStore>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// Sets the navigator used on authentication failure.
    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Config` if the base URL is empty, or a transport
    /// error if the default transport cannot be created.
    pub fn build(self) -> Result<ConsensusClient, ClientError> {
        let config = self.config;
        if config.base_url.trim().is_empty() {
            return Err(ClientError::Config("base_url is required".into()));
        }

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(NetworkTransport::new(config.timeout)?),
        };
        let tokens: Arc<dyn TokenStore> = match self.tokens {
            Some(tokens) => tokens,
            None => Arc::new(FileTokenStore::open(&config.token_dir)),
        };
        let navigator: Arc<dyn Navigator> = match self.navigator {
            Some(navigator) => navigator,
            None => Arc::new(RecordingNavigator::new()),
        };

        let interceptor =
            SessionInterceptor::new(tokens.clone(), navigator, config.login_route.clone());

        Ok(ConsensusClient {
            dispatcher: Dispatcher::new(transport, tokens.clone(), &config.base_url),
            interpreter: ResponseInterpreter::new(Arc::new(interceptor)),
            tokens,
            config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::MemoryTokenStore;

    #[test]
    fn test_build_requires_base_url() {
        let err = ClientBuilder::new(ClientConfig::new("  "))
            .token_store(Arc::new(MemoryTokenStore::new()))
            .build()
            .unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn test_build_with_injected_store() {
        let tokens = Arc::new(MemoryTokenStore::with_token("t"));
        let client = ConsensusClient::builder()
            .config(ClientConfig::new("http://api.test"))
            .token_store(tokens)
            .build()
            .unwrap();
        assert!(client.is_authenticated());
        assert_eq!(client.token().as_deref(), Some("t"));
        assert_eq!(client.config().base_url, "http://api.test");
    }
}
