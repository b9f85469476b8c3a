//! User Service
//!
//! `/user`: admin accounts. Every call is authenticated.

use std::sync::Arc;

use serde::Serialize;

use super::{ApiClient, HttpTransport, Method, WithId};
use crate::error::ApiError;
use crate::models::{User, UserDraft};

#[derive(Debug, Serialize)]
pub struct UserArgs<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

impl<'a> From<&'a UserDraft> for UserArgs<'a> {
    fn from(draft: &'a UserDraft) -> Self {
        Self {
            name: &draft.name,
            email: &draft.email,
            password: &draft.password,
        }
    }
}

#[derive(Clone)]
pub struct UserService {
    client: ApiClient,
}

impl UserService {
    pub fn new(transport: Arc<dyn HttpTransport>, base_url: &str) -> Self {
        Self { client: ApiClient::new(transport, base_url, "/user") }
    }

    pub async fn list(&self, token: &str) -> Result<Vec<User>, ApiError> {
        self.client.get(self.client.url(""), Some(token)).await
    }

    pub async fn get(&self, token: &str, id: u32) -> Result<User, ApiError> {
        self.client.get(self.client.url(&format!("/{id}")), Some(token)).await
    }

    pub async fn create(&self, token: &str, draft: &UserDraft) -> Result<User, ApiError> {
        self.client
            .send_json(Method::Post, self.client.url("/add"), token, &UserArgs::from(draft))
            .await
    }

    pub async fn update(&self, token: &str, id: u32, draft: &UserDraft) -> Result<User, ApiError> {
        let args = WithId { id, fields: UserArgs::from(draft) };
        self.client.send_json(Method::Put, self.client.url("/update"), token, &args).await
    }

    pub async fn delete(&self, token: &str, id: u32) -> Result<(), ApiError> {
        self.client
            .send_empty(Method::Delete, self.client.url(&format!("/delete/{id}")), token)
            .await
    }
}
