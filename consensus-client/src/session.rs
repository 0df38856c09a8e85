//! Session interception
//!
//! A 401 on any call wipes the credential and sends the UI back to the login
//! entry point before the error reaches the caller. Navigation is injected
//! through [`Navigator`] so the client stays free of any UI dependency.

use std::sync::{Arc, Mutex};

use crate::token::TokenStore;

/// Navigation strategy invoked on authentication failure
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}

/// Navigator that remembers the last requested route.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    target: Mutex<Option<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last navigation target, if any
    pub fn target(&self) -> Option<String> {
        self.target
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Forget the last target
    pub fn reset(&self) {
        *self
            .target
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        *self
            .target
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(route.to_string());
    }
}

/// Navigator that only logs.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate(&self, route: &str) {
        tracing::info!(route, "Redirecting to login");
    }
}

/// Hook run by the response interpreter on every 401
pub trait UnauthorizedHandler: Send + Sync {
    fn on_unauthorized(&self);
}

/// Clears the token store and navigates to the login route.
#[derive(Clone)]
pub struct SessionInterceptor {
    tokens: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
    login_route: String,
}

impl SessionInterceptor {
    pub fn new(
        tokens: Arc<dyn TokenStore>,
        navigator: Arc<dyn Navigator>,
        login_route: impl Into<String>,
    ) -> Self {
        Self {
            tokens,
            navigator,
            login_route: login_route.into(),
        }
    }
}

impl std::fmt::Debug for SessionInterceptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionInterceptor")
            .field("login_route", &self.login_route)
            .finish_non_exhaustive()
    }
}

impl UnauthorizedHandler for SessionInterceptor {
    fn on_unauthorized(&self) {
        tracing::warn!(route = %self.login_route, "Session rejected by server, clearing token");
        self.tokens.set(None);
        self.navigator.navigate(&self.login_route);
    }
}
