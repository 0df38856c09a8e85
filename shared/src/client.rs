//! Auth-related types shared between the API server and the client
//!
//! Request/response bodies for `/auth/*` and the credential endpoints of
//! `/users/me`.

use serde::{Deserialize, Serialize};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Registration payload (`POST /auth/register`, JSON)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// Login form (`POST /auth/login`, form-urlencoded)
///
/// The server follows the OAuth2 password flow, so the e-mail travels in the
/// `username` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Successful login response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Password change payload (`PUT /users/me/password`, JSON)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_omits_missing_name() {
        let req = RegisterRequest {
            email: "a@b.c".into(),
            password: "secret".into(),
            full_name: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({"email": "a@b.c", "password": "secret"}));
    }

    #[test]
    fn test_token_response_decode() {
        let token: TokenResponse =
            serde_json::from_str(r#"{"access_token":"abc","token_type":"bearer"}"#).unwrap();
        assert_eq!(token.access_token, "abc");
        assert_eq!(token.token_type, "bearer");
    }
}
