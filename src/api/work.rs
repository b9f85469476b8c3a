//! Work Item Service
//!
//! `/work_item`: portfolio projects.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use super::{ApiClient, HttpTransport, ItemApi, ListCache, Method, WithId};
use crate::error::ApiError;
use crate::models::{non_empty, WorkDraft, WorkItem};

/// Create/update body; empty optionals go out as `null`
#[derive(Debug, Serialize)]
pub struct WorkItemArgs<'a> {
    pub name: &'a str,
    pub date: &'a str,
    pub technologies: &'a str,
    pub description: &'a str,
    pub code_uri: Option<&'a str>,
    pub live_uri: Option<&'a str>,
    pub image_uri: Option<&'a str>,
    pub image_alt: Option<&'a str>,
}

impl<'a> From<&'a WorkDraft> for WorkItemArgs<'a> {
    fn from(draft: &'a WorkDraft) -> Self {
        Self {
            name: &draft.name,
            date: &draft.date,
            technologies: &draft.technologies,
            description: &draft.description,
            code_uri: non_empty(&draft.code_uri),
            live_uri: non_empty(&draft.live_uri),
            image_uri: non_empty(&draft.image_uri),
            image_alt: non_empty(&draft.image_alt),
        }
    }
}

#[derive(Clone)]
pub struct WorkService {
    client: ApiClient,
    cache: ListCache<WorkItem>,
}

impl WorkService {
    pub fn new(transport: Arc<dyn HttpTransport>, base_url: &str) -> Self {
        Self {
            client: ApiClient::new(transport, base_url, "/work_item"),
            cache: ListCache::new(),
        }
    }

    pub fn cache(&self) -> &ListCache<WorkItem> {
        &self.cache
    }
}

#[async_trait(?Send)]
impl ItemApi for WorkService {
    type Item = WorkItem;
    type Draft = WorkDraft;

    async fn list(&self) -> Result<Vec<WorkItem>, ApiError> {
        if let Some(items) = self.cache.get() {
            return Ok(items);
        }
        let items: Vec<WorkItem> = self.client.get(self.client.url(""), None).await?;
        self.cache.store(items.clone());
        Ok(items)
    }

    async fn get(&self, id: u32) -> Result<WorkItem, ApiError> {
        self.client.get(self.client.url(&format!("/{id}")), None).await
    }

    async fn create(&self, token: &str, draft: &WorkDraft) -> Result<WorkItem, ApiError> {
        let args = WorkItemArgs::from(draft);
        let item = self.client.send_json(Method::Post, self.client.url("/add"), token, &args).await?;
        self.cache.invalidate();
        Ok(item)
    }

    async fn update(&self, token: &str, id: u32, draft: &WorkDraft) -> Result<WorkItem, ApiError> {
        let args = WithId { id, fields: WorkItemArgs::from(draft) };
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
    use futures::executor::block_on;
    use serde_json::json;

    fn item_json(id: u32) -> serde_json::Value {
        json!({
            "id": id, "name": "Valid data", "date": "Valid data", "technologies": "Valid data",
            "description": "Valid data", "code_uri": "Valid data", "live_uri": "Valid data",
            "image_uri": "Valid data", "image_alt": "Valid data"
        })
    }

    fn draft() -> WorkDraft {
        WorkDraft {
            name: "Random data".into(),
            date: "Random data".into(),
            technologies: "Random data".into(),
            description: "Random data".into(),
            code_uri: "Random data".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_list_fetches_then_uses_cache() {
        let mock = MockTransport::new();
        mock.respond_json(json!([item_json(1), item_json(2)]));
        let service = WorkService::new(mock.shared(), "http://api");

        let first = block_on(service.list()).unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(mock.last().method, Method::Get);
        assert_eq!(mock.last().url, "http://api/work_item");
        assert!(service.cache().is_cached());

        let second = block_on(service.list()).unwrap();
        assert_eq!(second, first);
        assert_eq!(mock.request_count(), 1);
    }

    #[test]
    fn test_failed_list_is_not_cached() {
        let mock = MockTransport::new();
        mock.respond(500, r#"{"message":"boom"}"#);
        let service = WorkService::new(mock.shared(), "http://api");

        assert!(block_on(service.list()).is_err());
        assert!(!service.cache().is_cached());
    }

    #[test]
    fn test_get_by_id() {
        let mock = MockTransport::new();
        mock.respond_json(item_json(7));
        let service = WorkService::new(mock.shared(), "http://api");

        let item = block_on(service.get(7)).unwrap();
        assert_eq!(item.id, 7);
        assert_eq!(mock.last().url, "http://api/work_item/7");
        assert_eq!(mock.last().authorization, None);
    }

    #[test]
    fn test_create_sends_nulls_and_bearer() {
        let mock = MockTransport::new();
        mock.respond_json(item_json(1));
        let service = WorkService::new(mock.shared(), "http://api");

        block_on(service.create("jwt", &draft())).unwrap();
        let req = mock.last();
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.url, "http://api/work_item/add");
        assert_eq!(req.authorization.as_deref(), Some("Bearer jwt"));
        assert_eq!(
            req.body,
            Some(json!({
                "name": "Random data", "date": "Random data", "technologies": "Random data",
                "description": "Random data", "code_uri": "Random data", "live_uri": null,
                "image_uri": null, "image_alt": null
            }))
        );
    }

    #[test]
    fn test_update_includes_id() {
        let mock = MockTransport::new();
        mock.respond_json(item_json(4));
        let service = WorkService::new(mock.shared(), "http://api");

        block_on(service.update("Bearer jwt", 4, &draft())).unwrap();
        let req = mock.last();
        assert_eq!(req.method, Method::Put);
        assert_eq!(req.url, "http://api/work_item/update");
        assert_eq!(req.authorization.as_deref(), Some("Bearer jwt"));
        let body = req.body.unwrap();
        assert_eq!(body["id"], json!(4));
        assert_eq!(body["live_uri"], json!(null));
    }

    #[test]
    fn test_writes_invalidate_cache() {
        let mock = MockTransport::new();
        mock.respond_json(json!([item_json(1)]));
        mock.respond(200, "{}");
        mock.respond_json(json!([]));
        let service = WorkService::new(mock.shared(), "http://api");

        block_on(service.list()).unwrap();
        block_on(service.delete("jwt", 1)).unwrap();
        assert_eq!(mock.last().method, Method::Delete);
        assert_eq!(mock.last().url, "http://api/work_item/delete/1");
        assert!(!service.cache().is_cached());

        let after = block_on(service.list()).unwrap();
        assert!(after.is_empty());
        assert_eq!(mock.request_count(), 3);
    }
}
