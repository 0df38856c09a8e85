//! Client configuration

use std::path::PathBuf;

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default login route used by the session interceptor
pub const DEFAULT_LOGIN_ROUTE: &str = "/login";

/// Default directory of the persisted credential
pub const DEFAULT_TOKEN_DIR: &str = "session";

/// Client configuration for connecting to the consensus API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8000/api")
    pub base_url: String,

    /// Directory holding the persisted credential
    pub token_dir: PathBuf,

    /// Navigation target after an authentication failure
    pub login_route: String,

    /// Request timeout in seconds (`None` = transport default)
    pub timeout: Option<u64>,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token_dir: PathBuf::from(DEFAULT_TOKEN_DIR),
            login_route: DEFAULT_LOGIN_ROUTE.to_string(),
            timeout: None,
        }
    }

    /// Read configuration from the environment
    ///
    /// - `CONSENSUS_API_URL`
    /// - `CONSENSUS_TOKEN_DIR`
    /// - `CONSENSUS_LOGIN_ROUTE`
    /// - `CONSENSUS_TIMEOUT_SECS`
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("CONSENSUS_API_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            token_dir: std::env::var("CONSENSUS_TOKEN_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_TOKEN_DIR)),
            login_route: std::env::var("CONSENSUS_LOGIN_ROUTE")
                .unwrap_or_else(|_| DEFAULT_LOGIN_ROUTE.to_string()),
            timeout: std::env::var("CONSENSUS_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok()),
        }
    }

    /// Set the credential directory
    pub fn with_token_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.token_dir = dir.into();
        self
    }

    /// Set the login route
    pub fn with_login_route(mut self, route: impl Into<String>) -> Self {
        self.login_route = route.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
