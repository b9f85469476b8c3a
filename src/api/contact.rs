//! Contact Service
//!
//! `/contact_item` for the public contact links and `/contact_message` for
//! messages left through the contact form.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use super::{ApiClient, HttpTransport, ItemApi, ListCache, Method, WithId};
use crate::error::ApiError;
use crate::models::{non_empty, ContactDraft, ContactItem, ContactMessage, MessageDraft};

#[derive(Debug, Serialize)]
pub struct ContactItemArgs<'a> {
    pub name: &'a str,
    pub account: &'a str,
    pub link: Option<&'a str>,
    pub image_uri: Option<&'a str>,
    pub image_alt: Option<&'a str>,
}

impl<'a> From<&'a ContactDraft> for ContactItemArgs<'a> {
    fn from(draft: &'a ContactDraft) -> Self {
        Self {
            name: &draft.name,
            account: &draft.account,
            link: non_empty(&draft.link),
            image_uri: non_empty(&draft.image_uri),
            image_alt: non_empty(&draft.image_alt),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageArgs<'a> {
    pub subject: &'a str,
    pub message: &'a str,
    pub reply: &'a str,
}

#[derive(Clone)]
pub struct ContactService {
    items: ApiClient,
    messages: ApiClient,
    cache: ListCache<ContactItem>,
}

impl ContactService {
    pub fn new(transport: Arc<dyn HttpTransport>, base_url: &str) -> Self {
        Self {
            items: ApiClient::new(transport.clone(), base_url, "/contact_item"),
            messages: ApiClient::new(transport, base_url, "/contact_message"),
            cache: ListCache::new(),
        }
    }

    pub fn cache(&self) -> &ListCache<ContactItem> {
        &self.cache
    }

    // ========================
    // Messages
    // ========================

    pub async fn list_messages(&self, token: &str) -> Result<Vec<ContactMessage>, ApiError> {
        self.messages.get(self.messages.url(""), Some(token)).await
    }

    pub async fn get_message(&self, token: &str, id: u32) -> Result<ContactMessage, ApiError> {
        self.messages.get(self.messages.url(&format!("/{id}")), Some(token)).await
    }

    /// Store the message with `read` set
    pub async fn mark_read(&self, token: &str, message: &ContactMessage) -> Result<ContactMessage, ApiError> {
        let read = ContactMessage { read: true, ..message.clone() };
        self.messages
            .send_json(Method::Put, self.messages.url("/update"), token, &read)
            .await
    }

    /// Public contact form; no token needed
    pub async fn send_message(&self, draft: &MessageDraft) -> Result<(), ApiError> {
        let args = MessageArgs {
            subject: &draft.subject,
            message: &draft.message,
            reply: &draft.reply,
        };
        let body = serde_json::to_value(&args).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.messages
            .execute(Method::Post, self.messages.url("/add"), None, Some(body))
            .await
            .map(|_| ())
    }
}

#[async_trait(?Send)]
impl ItemApi for ContactService {
    type Item = ContactItem;
    type Draft = ContactDraft;

    async fn list(&self) -> Result<Vec<ContactItem>, ApiError> {
        if let Some(items) = self.cache.get() {
            return Ok(items);
        }
        let items: Vec<ContactItem> = self.items.get(self.items.url(""), None).await?;
        self.cache.store(items.clone());
        Ok(items)
    }

    async fn get(&self, id: u32) -> Result<ContactItem, ApiError> {
        self.items.get(self.items.url(&format!("/{id}")), None).await
    }

    async fn create(&self, token: &str, draft: &ContactDraft) -> Result<ContactItem, ApiError> {
        let args = ContactItemArgs::from(draft);
        let item = self.items.send_json(Method::Post, self.items.url("/add"), token, &args).await?;
        self.cache.invalidate();
        Ok(item)
    }

    async fn update(&self, token: &str, id: u32, draft: &ContactDraft) -> Result<ContactItem, ApiError> {
        let args = WithId { id, fields: ContactItemArgs::from(draft) };
        let item = self.items.send_json(Method::Put, self.items.url("/update"), token, &args).await?;
        self.cache.invalidate();
        Ok(item)
    }

    async fn delete(&self, token: &str, id: u32) -> Result<(), ApiError> {
        self.items
            .send_empty(Method::Delete, self.items.url(&format!("/delete/{id}")), token)
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

    fn message_json(id: u32, read: bool) -> serde_json::Value {
        json!({
            "id": id, "subject": "Hello", "message": "Hi there", "reply": "a@b.io",
            "date": "2024-03-01T10:00:00Z", "read": read
        })
    }

    #[test]
    fn test_create_item_with_null_optionals() {
        let mock = MockTransport::new();
        mock.respond_json(json!({
            "id": 1, "name": "GitHub", "account": "me", "link": null, "image_uri": null, "image_alt": null
        }));
        let service = ContactService::new(mock.shared(), "http://api");
        let draft = ContactDraft { name: "GitHub".into(), account: "me".into(), ..Default::default() };

        block_on(service.create("jwt", &draft)).unwrap();
        let req = mock.last();
        assert_eq!(req.url, "http://api/contact_item/add");
        assert_eq!(
            req.body,
            Some(json!({ "name": "GitHub", "account": "me", "link": null, "image_uri": null, "image_alt": null }))
        );
    }

    #[test]
    fn test_messages_require_token() {
        let mock = MockTransport::new();
        mock.respond_json(json!([message_json(1, false)]));
        let service = ContactService::new(mock.shared(), "http://api");

        let messages = block_on(service.list_messages("jwt")).unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(mock.last().url, "http://api/contact_message");
        assert_eq!(mock.last().authorization.as_deref(), Some("Bearer jwt"));
    }

    #[test]
    fn test_mark_read_puts_message() {
        let mock = MockTransport::new();
        mock.respond_json(message_json(5, true));
        let service = ContactService::new(mock.shared(), "http://api");
        let message: ContactMessage = serde_json::from_value(message_json(5, false)).unwrap();

        let stored = block_on(service.mark_read("jwt", &message)).unwrap();
        assert!(stored.read);
        let req = mock.last();
        assert_eq!(req.method, Method::Put);
        assert_eq!(req.url, "http://api/contact_message/update");
        assert_eq!(req.body.unwrap()["read"], json!(true));
    }

    #[test]
    fn test_send_message_is_anonymous() {
        let mock = MockTransport::new();
        let service = ContactService::new(mock.shared(), "http://api");
        let draft = MessageDraft { subject: "Hi".into(), message: "Hello".into(), reply: "a@b.io".into() };

        block_on(service.send_message(&draft)).unwrap();
        let req = mock.last();
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.url, "http://api/contact_message/add");
        assert_eq!(req.authorization, None);
    }
}
