//! Browser Transport
//!
//! Client-side (wasm32): real HTTP calls via `gloo-net`.
//! Native builds (unit tests, tooling): a stub that reports the network as
//! unavailable, since these requests only make sense in the browser.

use std::sync::Arc;

use async_trait::async_trait;

use super::{ApiRequest, ApiResponse, HttpTransport};
use crate::error::ApiError;

/// Fetch-backed transport
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl HttpTransport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(target_arch = "wasm32")]
        {
            use super::Method;
            use gloo_net::http::Request;

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Delete => Request::delete(&request.url),
            };
            if let Some(auth) = &request.authorization {
                builder = builder.header("Authorization", auth);
            }
            let response = match &request.body {
                Some(body) => builder
                    .json(body)
                    .map_err(|e| ApiError::Network(e.to_string()))?
                    .send()
                    .await,
                None => builder.send().await,
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Err(ApiError::Network(format!("{} is only reachable from the browser", request.url)))
        }
    }
}

pub fn default_transport() -> Arc<dyn HttpTransport> {
    Arc::new(BrowserTransport)
}
