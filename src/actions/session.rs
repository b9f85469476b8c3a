//! Session Handlers
//!
//! Login, logout and the admin view gate.

use crate::api::LoginService;
use crate::error::FormError;
use crate::routes::Route;
use crate::session::TokenStore;
use crate::validation::validate_login;

/// Check the session before a protected view loads.
///
/// No token, or a token the server rejects, sends the user to login. Other
/// failures of the check leave the view alone.
pub async fn guard(login: &LoginService, tokens: &dyn TokenStore) -> Result<(), Route> {
    let Some(token) = tokens.get() else {
        return Err(Route::Login);
    };
    match login.check_token(&token).await {
        Ok(true) => Ok(()),
        Ok(false) => {
            log::warn!("session token revoked");
            tokens.clear();
            Err(Route::Login)
        }
        Err(err) if err.is_unauthorized() => {
            log::warn!("session token rejected: {err}");
            tokens.clear();
            Err(Route::Login)
        }
        Err(err) => {
            log::error!("could not verify session token: {err}");
            Ok(())
        }
    }
}

pub async fn login(
    service: &LoginService,
    tokens: &dyn TokenStore,
    email: &str,
    password: &str,
) -> Result<Route, FormError> {
    validate_login(email, password)?;
    match service.login(email, password).await {
        Ok(token) => {
            tokens.set(&token);
            log::info!("logged in as {email}");
            Ok(Route::Admin)
        }
        Err(err) if err.is_unauthorized() => {
            Err(FormError::Invalid("Invalid username or password".to_string()))
        }
        Err(err) => Err(FormError::from_api(err, "Unknown error while logging in")),
    }
}

pub fn logout(tokens: &dyn TokenStore) -> Route {
    tokens.clear();
    Route::Home
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::MockTransport;
    use crate::session::MemoryTokenStore;
    use futures::executor::block_on;

    #[test]
    fn test_guard_without_token() {
        let mock = MockTransport::new();
        let service = LoginService::new(mock.shared(), "http://api");

        assert_eq!(block_on(guard(&service, &MemoryTokenStore::new())), Err(Route::Login));
        assert_eq!(mock.request_count(), 0);
    }

    #[test]
    fn test_guard_accepts_valid_token() {
        let mock = MockTransport::new();
        mock.respond(200, "{}");
        let service = LoginService::new(mock.shared(), "http://api");
        let tokens = MemoryTokenStore::with_token("jwt");

        assert_eq!(block_on(guard(&service, &tokens)), Ok(()));
        assert_eq!(mock.request_count(), 1);
    }

    #[test]
    fn test_guard_clears_rejected_token() {
        let mock = MockTransport::new();
        mock.respond(401, "");
        let service = LoginService::new(mock.shared(), "http://api");
        let tokens = MemoryTokenStore::with_token("expired");

        assert_eq!(block_on(guard(&service, &tokens)), Err(Route::Login));
        assert_eq!(tokens.get(), None);
    }

    #[test]
    fn test_guard_clears_revoked_token() {
        let mock = MockTransport::new();
        mock.respond(200, "0");
        let service = LoginService::new(mock.shared(), "http://api");
        let tokens = MemoryTokenStore::with_token("revoked");

        assert_eq!(block_on(guard(&service, &tokens)), Err(Route::Login));
        assert_eq!(tokens.get(), None);
    }

    #[test]
    fn test_guard_tolerates_network_failure() {
        let mock = MockTransport::new();
        mock.fail("offline");
        let service = LoginService::new(mock.shared(), "http://api");
        let tokens = MemoryTokenStore::with_token("jwt");

        assert_eq!(block_on(guard(&service, &tokens)), Ok(()));
        assert_eq!(tokens.get().as_deref(), Some("jwt"));
    }

    #[test]
    fn test_login_stores_token() {
        let mock = MockTransport::new();
        mock.respond(200, r#""Bearer issued""#);
        let service = LoginService::new(mock.shared(), "http://api");
        let tokens = MemoryTokenStore::new();

        let route = block_on(login(&service, &tokens, "me@example.com", "pw"));
        assert_eq!(route, Ok(Route::Admin));
        assert_eq!(tokens.get().as_deref(), Some("Bearer issued"));
    }

    #[test]
    fn test_login_validation_skips_request() {
        let mock = MockTransport::new();
        let service = LoginService::new(mock.shared(), "http://api");
        let tokens = MemoryTokenStore::new();

        let result = block_on(login(&service, &tokens, "nobody", "pw"));
        assert_eq!(result, Err(FormError::Invalid("Invalid username".into())));
        assert_eq!(mock.request_count(), 0);
    }

    #[test]
    fn test_login_rejected_credentials_stay_on_page() {
        let mock = MockTransport::new();
        mock.respond(401, r#"{"message":"Invalid username or password"}"#);
        let service = LoginService::new(mock.shared(), "http://api");

        let result = block_on(login(&service, &MemoryTokenStore::new(), "me@example.com", "bad"));
        let err = result.unwrap_err();
        assert_eq!(err.redirect(), None);
        assert_eq!(err.message().as_deref(), Some("Invalid username or password"));
    }

    #[test]
    fn test_logout_clears_token() {
        let tokens = MemoryTokenStore::with_token("jwt");
        assert_eq!(logout(&tokens), Route::Home);
        assert_eq!(tokens.get(), None);
    }
}
