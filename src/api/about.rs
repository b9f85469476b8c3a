//! About Item Service
//!
//! `/about_item`: knowledge, badge and certificate entries.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use super::{ApiClient, HttpTransport, ItemApi, ListCache, Method, WithId};
use crate::error::ApiError;
use crate::models::{non_empty, AboutDraft, AboutItem};

#[derive(Debug, Serialize)]
pub struct AboutItemArgs<'a> {
    pub item_type: u8,
    pub name: &'a str,
    pub date: &'a str,
    pub description: &'a str,
    pub link: Option<&'a str>,
    pub image_uri: Option<&'a str>,
    pub image_alt: Option<&'a str>,
}

impl<'a> From<&'a AboutDraft> for AboutItemArgs<'a> {
    fn from(draft: &'a AboutDraft) -> Self {
        Self {
            item_type: draft.kind.code(),
            name: &draft.name,
            date: &draft.date,
            description: &draft.description,
            link: non_empty(&draft.link),
            image_uri: non_empty(&draft.image_uri),
            image_alt: non_empty(&draft.image_alt),
        }
    }
}

#[derive(Clone)]
pub struct AboutService {
    client: ApiClient,
    cache: ListCache<AboutItem>,
}

impl AboutService {
    pub fn new(transport: Arc<dyn HttpTransport>, base_url: &str) -> Self {
        Self {
            client: ApiClient::new(transport, base_url, "/about_item"),
            cache: ListCache::new(),
        }
    }

    pub fn cache(&self) -> &ListCache<AboutItem> {
        &self.cache
    }
}

#[async_trait(?Send)]
impl ItemApi for AboutService {
    type Item = AboutItem;
    type Draft = AboutDraft;

    async fn list(&self) -> Result<Vec<AboutItem>, ApiError> {
        if let Some(items) = self.cache.get() {
            return Ok(items);
        }
        let items: Vec<AboutItem> = self.client.get(self.client.url(""), None).await?;
        self.cache.store(items.clone());
        Ok(items)
    }

    async fn get(&self, id: u32) -> Result<AboutItem, ApiError> {
        self.client.get(self.client.url(&format!("/{id}")), None).await
    }

    async fn create(&self, token: &str, draft: &AboutDraft) -> Result<AboutItem, ApiError> {
        let args = AboutItemArgs::from(draft);
        let item = self.client.send_json(Method::Post, self.client.url("/add"), token, &args).await?;
        self.cache.invalidate();
        Ok(item)
    }

    async fn update(&self, token: &str, id: u32, draft: &AboutDraft) -> Result<AboutItem, ApiError> {
        let args = WithId { id, fields: AboutItemArgs::from(draft) };
        let item = self.client.send_json(Method::Put, self.client.url("/update"), token, &args).await?;
        self.cache.invalidate();
        Ok(item)
    }

    async fn delete(&self, token: &str, id: u32) -> Result<(), ApiError> {
        self.client
            .send_empty(Method::Delete, self.client.url(&format!("/delete/{id}")), token)
            .await?;
        self.cache.invalidate();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::MockTransport;
    use crate::models::AboutKind;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn test_create_sends_type_code() {
        let mock = MockTransport::new();
        mock.respond_json(json!({
            "id": 1, "item_type": 2, "name": "Rust", "date": "2024", "description": "d",
            "link": null, "image_uri": null, "image_alt": null
        }));
        let service = AboutService::new(mock.shared(), "http://api");
        let draft = AboutDraft {
            kind: AboutKind::Badge,
            name: "Rust".into(),
            date: "2024".into(),
            description: "d".into(),
            ..Default::default()
        };

        let created = block_on(service.create("jwt", &draft)).unwrap();
        assert_eq!(created.kind(), Some(AboutKind::Badge));

        let req = mock.last();
        assert_eq!(req.url, "http://api/about_item/add");
        assert_eq!(
            req.body,
            Some(json!({
                "item_type": 2, "name": "Rust", "date": "2024", "description": "d",
                "link": null, "image_uri": null, "image_alt": null
            }))
        );
    }

    #[test]
    fn test_list_is_cached() {
        let mock = MockTransport::new();
        mock.respond_json(json!([]));
        let service = AboutService::new(mock.shared(), "http://api");

        block_on(service.list()).unwrap();
        block_on(service.list()).unwrap();
        assert_eq!(mock.request_count(), 1);
        assert_eq!(mock.last().url, "http://api/about_item");
    }
}
