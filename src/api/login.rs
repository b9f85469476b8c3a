//! Login Service
//!
//! Token issuance and validation.

use std::sync::Arc;

use serde::Serialize;

use super::{ApiClient, HttpTransport, Method};
use crate::error::ApiError;

/// Validated by the same endpoint family the admin writes go through
const CHECK_TOKEN_PATH: &str = "/about_item/check_token";

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Clone)]
pub struct LoginService {
    client: ApiClient,
}

impl LoginService {
    pub fn new(transport: Arc<dyn HttpTransport>, base_url: &str) -> Self {
        Self { client: ApiClient::new(transport, base_url, "") }
    }

    /// Exchange credentials for a token.
    /// The server answers with the token either as raw text or a JSON string.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let body = serde_json::to_value(Credentials { email, password })
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let raw = self
            .client
            .execute(Method::Post, self.client.url("/login"), None, Some(body))
            .await?;
        let token = serde_json::from_str::<String>(&raw).unwrap_or_else(|_| raw.trim().to_string());
        if token.is_empty() {
            return Err(ApiError::Decode("empty token".to_string()));
        }
        Ok(token)
    }

    /// Ask the server whether the token is still valid.
    /// A 2xx body of `0` marks the token as revoked.
    pub async fn check_token(&self, token: &str) -> Result<bool, ApiError> {
        let result = self
            .client
            .execute(Method::Delete, self.client.url(CHECK_TOKEN_PATH), Some(token), None)
            .await;
        match result {
            Ok(_) => Ok(true),
            Err(ApiError::Unauthorized { status }) if (200..300).contains(&status) => Ok(false),
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::MockTransport;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn test_login_posts_credentials() {
        let mock = MockTransport::new();
        mock.respond(200, r#""Bearer random generated jwt""#);
        let service = LoginService::new(mock.shared(), "http://api");

        let token = block_on(service.login("me@example.com", "pw")).unwrap();
        assert_eq!(token, "Bearer random generated jwt");

        let req = mock.last();
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.url, "http://api/login");
        assert_eq!(req.body, Some(json!({ "email": "me@example.com", "password": "pw" })));
        assert_eq!(req.authorization, None);
    }

    #[test]
    fn test_login_accepts_raw_text_token() {
        let mock = MockTransport::new();
        mock.respond(200, "abc.def.ghi\n");
        let service = LoginService::new(mock.shared(), "http://api");
        assert_eq!(block_on(service.login("me@example.com", "pw")).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_login_rejected() {
        let mock = MockTransport::new();
        mock.respond(401, r#"{"message":"Invalid username or password"}"#);
        let service = LoginService::new(mock.shared(), "http://api");
        assert_eq!(
            block_on(service.login("me@example.com", "bad")),
            Err(ApiError::Unauthorized { status: 401 })
        );
    }

    #[test]
    fn test_check_token() {
        let mock = MockTransport::new();
        mock.respond(200, "{}");
        mock.respond(401, "");
        let service = LoginService::new(mock.shared(), "http://api");

        assert_eq!(block_on(service.check_token("Bearer random json web token")), Ok(true));
        let req = mock.last();
        assert_eq!(req.method, Method::Delete);
        assert_eq!(req.url, "http://api/about_item/check_token");
        assert_eq!(req.authorization.as_deref(), Some("Bearer random json web token"));

        assert!(block_on(service.check_token("stale")).unwrap_err().is_unauthorized());
    }

    #[test]
    fn test_check_token_revoked_body() {
        let mock = MockTransport::new();
        mock.respond(200, "0");
        mock.respond(200, r#""0""#);
        mock.respond(200, "1");
        let service = LoginService::new(mock.shared(), "http://api");

        assert_eq!(block_on(service.check_token("jwt")), Ok(false));
        assert_eq!(block_on(service.check_token("jwt")), Ok(false));
        assert_eq!(block_on(service.check_token("jwt")), Ok(true));
    }
}
