//! REST Service Wrappers
//!
//! Thin per-resource bindings to the portfolio API, organized by domain.
//! All of them go through [`ApiClient`], which owns the transport, formats
//! the bearer header and maps non-2xx statuses to [`ApiError`].

mod about;
mod cache;
mod contact;
mod http;
mod information;
mod login;
mod user;
mod work;

#[cfg(test)]
pub(crate) mod testing;

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

// Re-export all public items
pub use about::{AboutItemArgs, AboutService};
pub use cache::ListCache;
pub use contact::{ContactItemArgs, ContactService, MessageArgs};
pub use http::default_transport;
pub use information::InformationService;
pub use login::LoginService;
pub use user::{UserArgs, UserService};
pub use work::{WorkItemArgs, WorkService};

// ========================
// Transport
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// Full `Authorization` header value
    pub authorization: Option<String>,
    pub body: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and hands back the raw response.
///
/// Implementations only fail with [`ApiError::Network`]; status handling is
/// done by [`ApiClient`].
#[async_trait(?Send)]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// `Authorization` header value for a session token
pub fn bearer(token: &str) -> String {
    if token.starts_with("Bearer ") {
        token.to_string()
    } else {
        format!("Bearer {token}")
    }
}

// ========================
// Client
// ========================

/// Shared request helper bound to one resource path
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    uri: String,
}

#[derive(Deserialize)]
struct NestedError {
    message: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorBody {
    Flat { message: String },
    Nested { error: NestedError },
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody::Flat { message }) => message,
        Ok(ErrorBody::Nested { error }) => error.message,
        Err(_) => body.trim().to_string(),
    }
}

impl ApiClient {
    pub fn new(transport: Arc<dyn HttpTransport>, base_url: &str, path: &str) -> Self {
        Self {
            transport,
            uri: format!("{}{}", base_url.trim_end_matches('/'), path),
        }
    }

    /// Base URI joined with a sub-path such as `/add` or `/42`
    pub fn url(&self, suffix: &str) -> String {
        format!("{}{}", self.uri, suffix)
    }

    /// Send a request and return the body of a 2xx response
    pub async fn execute(
        &self,
        method: Method,
        url: String,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> Result<String, ApiError> {
        let request = ApiRequest {
            method,
            url,
            authorization: token.map(bearer),
            body,
        };
        log::debug!("{:?} {}", request.method, request.url);
        let authenticated = request.authorization.is_some();
        let response = self.transport.send(request).await?;
        if response.ok() {
            if authenticated && is_rejection(&response.body) {
                return Err(ApiError::Unauthorized { status: response.status });
            }
            return Ok(response.body);
        }
        match response.status {
            401 | 403 => Err(ApiError::Unauthorized { status: response.status }),
            status => Err(ApiError::Status {
                status,
                message: error_message(&response.body),
            }),
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, url: String, token: Option<&str>) -> Result<T, ApiError> {
        let body = self.execute(Method::Get, url, token, None).await?;
        decode(&body)
    }

    pub async fn send_json<B, T>(&self, method: Method, url: String, token: &str, payload: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let value = serde_json::to_value(payload).map_err(|e| ApiError::Decode(e.to_string()))?;
        let body = self.execute(method, url, Some(token), Some(value)).await?;
        decode(&body)
    }

    /// Authenticated request whose response body is ignored
    pub async fn send_empty(&self, method: Method, url: String, token: &str) -> Result<(), ApiError> {
        self.execute(method, url, Some(token), None).await.map(|_| ())
    }
}

/// A 2xx body of `0`, raw or as JSON, is the server refusing the token
fn is_rejection(body: &str) -> bool {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value == serde_json::json!(0) || value == serde_json::json!("0"),
        Err(_) => body.trim() == "0",
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

// ========================
// Service Bundle
// ========================

/// Every REST wrapper the UI uses, sharing one transport
#[derive(Clone)]
pub struct Services {
    pub information: InformationService,
    pub work: WorkService,
    pub about: AboutService,
    pub contact: ContactService,
    pub users: UserService,
    pub login: LoginService,
}

impl Services {
    pub fn new(transport: Arc<dyn HttpTransport>, base_url: &str) -> Self {
        Self {
            information: InformationService::new(transport.clone(), base_url),
            work: WorkService::new(transport.clone(), base_url),
            about: AboutService::new(transport.clone(), base_url),
            contact: ContactService::new(transport.clone(), base_url),
            users: UserService::new(transport.clone(), base_url),
            login: LoginService::new(transport, base_url),
        }
    }
}

/// Common CRUD surface of the item resources
#[async_trait(?Send)]
pub trait ItemApi {
    type Item: Clone;
    type Draft: Clone + PartialEq + for<'a> From<&'a Self::Item>;

    async fn list(&self) -> Result<Vec<Self::Item>, ApiError>;
    async fn get(&self, id: u32) -> Result<Self::Item, ApiError>;
    async fn create(&self, token: &str, draft: &Self::Draft) -> Result<Self::Item, ApiError>;
    async fn update(&self, token: &str, id: u32, draft: &Self::Draft) -> Result<Self::Item, ApiError>;
    async fn delete(&self, token: &str, id: u32) -> Result<(), ApiError>;
}

/// Update body: the create fields plus the item id
#[derive(Serialize)]
pub struct WithId<T: Serialize> {
    pub id: u32,
    #[serde(flatten)]
    pub fields: T,
}
