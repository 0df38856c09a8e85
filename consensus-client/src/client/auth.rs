//! Auth endpoints: register, login, logout.

use shared::client::{LoginForm, RegisterRequest, TokenResponse};
use shared::models::User;

use crate::error::ClientResult;
use crate::request::RequestDescriptor;
use crate::response::ErrorCopy;

use super::ConsensusClient;

impl ConsensusClient {
    /// Creates an account (`POST /auth/register`).
    ///
    /// Does not authenticate; call [`login`](Self::login) afterwards.
    pub async fn register(&self, payload: &RegisterRequest) -> ClientResult<User> {
        let descriptor = RequestDescriptor::post("/auth/register").json(payload)?;
        self.call(descriptor, ErrorCopy::GENERIC).await
    }

    /// Logs in with e-mail and password (`POST /auth/login`, form body).
    ///
    /// On success the access token is stored before it is returned.
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<TokenResponse> {
        let form = LoginForm {
            username: email.to_string(),
            password: password.to_string(),
        };
        let descriptor = RequestDescriptor::post("/auth/login").form(&form)?;
        let token: TokenResponse = self.call(descriptor, ErrorCopy::LOGIN).await?;

        self.tokens.set(Some(&token.access_token));
        tracing::info!("Logged in");
        Ok(token)
    }

    /// Logs out locally. No network call is made.
    pub fn logout(&self) {
        self.tokens.set(None);
        tracing::info!("Logged out");
    }
}
