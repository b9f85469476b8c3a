//! Contact Message Handlers

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::api::ContactService;
use crate::error::FormError;
use crate::models::{ContactMessage, MessageDraft};
use crate::session::TokenStore;
use crate::validation::{is_valid_email, require};

use super::{reject, require_token};

/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS` and plain dates
fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Newest first; unparseable dates sink to the bottom
pub fn sort_newest_first(messages: &mut [ContactMessage]) {
    messages.sort_by(|a, b| parse_date(&b.date).cmp(&parse_date(&a.date)));
}

pub async fn load_messages(contact: &ContactService, tokens: &dyn TokenStore) -> Result<Vec<ContactMessage>, FormError> {
    let token = require_token(tokens)?;
    let mut messages = contact
        .list_messages(&token)
        .await
        .map_err(|e| reject(tokens, e, "Unknown error while retrieving the messages"))?;
    sort_newest_first(&mut messages);
    Ok(messages)
}

/// Fetch a message and mark it read on the server if it was not
pub async fn open_message(contact: &ContactService, tokens: &dyn TokenStore, id: u32) -> Result<ContactMessage, FormError> {
    let token = require_token(tokens)?;
    let message = contact
        .get_message(&token, id)
        .await
        .map_err(|e| reject(tokens, e, "Unknown error while retrieving the message"))?;
    if message.read {
        return Ok(message);
    }
    match contact.mark_read(&token, &message).await {
        Ok(stored) => Ok(stored),
        Err(err) if err.is_unauthorized() => Err(reject(tokens, err, "")),
        Err(err) => {
            log::error!("could not mark message {id} as read: {err}");
            Ok(message)
        }
    }
}

/// Public contact form
pub async fn send_message(contact: &ContactService, draft: &MessageDraft) -> Result<(), FormError> {
    require("subject", &draft.subject)?;
    require("message", &draft.message)?;
    require("reply", &draft.reply)?;
    if !is_valid_email(&draft.reply) {
        return Err(FormError::Invalid("Invalid reply address".to_string()));
    }
    contact
        .send_message(draft)
        .await
        .map_err(|e| FormError::from_api(e, "Unknown error while sending the message"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::MockTransport;
    use crate::api::Method;
    use crate::session::MemoryTokenStore;
    use futures::executor::block_on;
    use serde_json::json;

    fn message(id: u32, date: &str, read: bool) -> serde_json::Value {
        json!({ "id": id, "subject": "s", "message": "m", "reply": "r@x.io", "date": date, "read": read })
    }

    #[test]
    fn test_messages_sorted_newest_first() {
        let mock = MockTransport::new();
        mock.respond_json(json!([
            message(1, "2023-01-05", true),
            message(2, "garbage", false),
            message(3, "2024-02-01T08:30:00Z", false),
            message(4, "2023-06-01 12:00:00", true)
        ]));
        let contact = ContactService::new(mock.shared(), "http://api");

        let messages = block_on(load_messages(&contact, &MemoryTokenStore::with_token("jwt"))).unwrap();
        let ids: Vec<u32> = messages.iter().map(|m| m.id).collect();
        assert_eq!(ids, [3, 4, 1, 2]);
    }

    #[test]
    fn test_open_unread_marks_read() {
        let mock = MockTransport::new();
        mock.respond_json(message(7, "2024-01-01", false));
        mock.respond_json(message(7, "2024-01-01", true));
        let contact = ContactService::new(mock.shared(), "http://api");

        let opened = block_on(open_message(&contact, &MemoryTokenStore::with_token("jwt"), 7)).unwrap();
        assert!(opened.read);
        assert_eq!(mock.request_count(), 2);
        assert_eq!(mock.last().method, Method::Put);
    }

    #[test]
    fn test_open_read_message_makes_one_call() {
        let mock = MockTransport::new();
        mock.respond_json(message(7, "2024-01-01", true));
        let contact = ContactService::new(mock.shared(), "http://api");

        block_on(open_message(&contact, &MemoryTokenStore::with_token("jwt"), 7)).unwrap();
        assert_eq!(mock.request_count(), 1);
    }

    #[test]
    fn test_send_message_validation() {
        let mock = MockTransport::new();
        let contact = ContactService::new(mock.shared(), "http://api");
        let mut draft = MessageDraft { subject: "Hi".into(), message: "Hello".into(), reply: "nope".into() };

        assert_eq!(
            block_on(send_message(&contact, &draft)),
            Err(FormError::Invalid("Invalid reply address".into()))
        );
        assert_eq!(mock.request_count(), 0);

        draft.reply = "me@example.com".into();
        assert_eq!(block_on(send_message(&contact, &draft)), Ok(()));
        assert_eq!(mock.request_count(), 1);
    }
}
