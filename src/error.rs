//! Error Types
//!
//! `ApiError` is what the REST layer returns. `FormError` is what a form
//! handler reports back to its view: either a route to follow or a message
//! to show.

use thiserror::Error;

use crate::routes::Route;

/// Errors surfaced by the REST wrappers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// 401/403 from the server: the token is missing, expired or rejected
    #[error("not authenticated (status {status})")]
    Unauthorized { status: u16 },
    /// Any other non-2xx response
    #[error("server responded {status}: {message}")]
    Status { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// Text shown to the user in the alert banner
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { message, .. } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Outcome of a rejected form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Client-side validation failed; no request was made
    Invalid(String),
    /// The edit form matches the loaded item; no request was made
    NotEdited,
    /// Token missing or rejected by the server
    Unauthenticated,
    /// No token on a view that requires one and has its own forbidden page
    Forbidden,
    /// Non-auth server or network failure
    Server(String),
}

impl FormError {
    /// Route to navigate to, if this error ends the current view
    pub fn redirect(&self) -> Option<Route> {
        match self {
            FormError::Unauthenticated => Some(Route::Login),
            FormError::Forbidden => Some(Route::Error403),
            _ => None,
        }
    }

    /// Field-scoped message, if this error is shown inline
    pub fn message(&self) -> Option<String> {
        match self {
            FormError::Invalid(msg) | FormError::Server(msg) => Some(msg.clone()),
            FormError::NotEdited => Some("Item not edited".to_string()),
            FormError::Unauthenticated | FormError::Forbidden => None,
        }
    }

    /// Map a REST failure, logging anything that is not an auth redirect
    pub fn from_api(err: ApiError, fallback: &str) -> Self {
        if err.is_unauthorized() {
            log::warn!("request rejected, redirecting to login: {err}");
            FormError::Unauthenticated
        } else {
            log::error!("{fallback}: {err}");
            FormError::Server(err.user_message(fallback))
        }
    }
}

impl From<ApiError> for FormError {
    fn from(err: ApiError) -> Self {
        FormError::from_api(err, "Unknown error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_redirects_to_login() {
        let err = FormError::from(ApiError::Unauthorized { status: 401 });
        assert_eq!(err, FormError::Unauthenticated);
        assert_eq!(err.redirect(), Some(Route::Login));
        assert_eq!(err.message(), None);
    }

    #[test]
    fn test_server_message_is_kept() {
        let err = FormError::from_api(
            ApiError::Status { status: 500, message: "Database offline".into() },
            "Unknown error while updating information",
        );
        assert_eq!(err.message().as_deref(), Some("Database offline"));
        assert_eq!(err.redirect(), None);
    }

    #[test]
    fn test_empty_server_message_uses_fallback() {
        let err = FormError::from_api(ApiError::Network("offline".into()), "Could not reach server");
        assert_eq!(err, FormError::Server("Could not reach server".into()));
    }
}
