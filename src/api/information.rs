//! Information Service
//!
//! `/information`: the site's key/value text table.

use std::sync::Arc;

use serde::Serialize;

use super::{ApiClient, HttpTransport, ListCache, Method};
use crate::error::ApiError;
use crate::models::InfoEntry;

#[derive(Serialize)]
struct InfoArgs<'a> {
    id: u32,
    name: &'a str,
    information: &'a str,
}

#[derive(Clone)]
pub struct InformationService {
    client: ApiClient,
    cache: ListCache<InfoEntry>,
}

impl InformationService {
    pub fn new(transport: Arc<dyn HttpTransport>, base_url: &str) -> Self {
        Self {
            client: ApiClient::new(transport, base_url, "/information"),
            cache: ListCache::new(),
        }
    }

    pub fn cache(&self) -> &ListCache<InfoEntry> {
        &self.cache
    }

    pub async fn list(&self) -> Result<Vec<InfoEntry>, ApiError> {
        if let Some(entries) = self.cache.get() {
            return Ok(entries);
        }
        let entries: Vec<InfoEntry> = self.client.get(self.client.url(""), None).await?;
        self.cache.store(entries.clone());
        Ok(entries)
    }

    pub async fn update(&self, token: &str, id: u32, name: &str, information: &str) -> Result<InfoEntry, ApiError> {
        let args = InfoArgs { id, name, information };
        let entry = self.client.send_json(Method::Put, self.client.url("/update"), token, &args).await?;
        self.cache.invalidate();
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::MockTransport;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn test_list_and_cache() {
        let mock = MockTransport::new();
        mock.respond_json(json!([
            { "id": 1, "name": "unknown name", "information": "unknown information" },
            { "id": 2, "name": "journey", "information": "From C to Rust" }
        ]));
        let service = InformationService::new(mock.shared(), "http://api");

        let entries = block_on(service.list()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(mock.last().url, "http://api/information");
        assert_eq!(block_on(service.list()).unwrap(), entries);
        assert_eq!(mock.request_count(), 1);
    }

    #[test]
    fn test_update_sends_authorized_put() {
        let mock = MockTransport::new();
        mock.respond_json(json!({ "id": 1, "name": "index_titles", "information": "A, B" }));
        let service = InformationService::new(mock.shared(), "http://api");
        service.cache().store(Vec::new());

        let entry = block_on(service.update("Bearer random generated jwt", 1, "index_titles", "A, B")).unwrap();
        assert_eq!(entry.information, "A, B");

        let req = mock.last();
        assert_eq!(req.method, Method::Put);
        assert_eq!(req.url, "http://api/information/update");
        assert_eq!(req.authorization.as_deref(), Some("Bearer random generated jwt"));
        assert_eq!(req.body, Some(json!({ "id": 1, "name": "index_titles", "information": "A, B" })));
        assert!(!service.cache().is_cached());
    }
}
