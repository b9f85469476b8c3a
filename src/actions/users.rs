//! User Handlers

use crate::api::UserService;
use crate::error::FormError;
use crate::models::{User, UserDraft};
use crate::session::TokenStore;
use crate::validation::{is_valid_email, parse_item_id, require};

use super::{reject, require_token};

pub async fn list_users(users: &UserService, tokens: &dyn TokenStore) -> Result<Vec<User>, FormError> {
    let token = require_token(tokens)?;
    users
        .list(&token)
        .await
        .map_err(|e| reject(tokens, e, "Unknown error while retrieving the users"))
}

fn validate_user(draft: &UserDraft) -> Result<(), FormError> {
    require("name", &draft.name)?;
    require("email", &draft.email)?;
    require("password", &draft.password)?;
    if !is_valid_email(&draft.email) {
        return Err(FormError::Invalid("Invalid email".to_string()));
    }
    Ok(())
}

pub async fn create_user(users: &UserService, tokens: &dyn TokenStore, draft: &UserDraft) -> Result<User, FormError> {
    validate_user(draft)?;
    let token = require_token(tokens)?;
    users
        .create(&token, draft)
        .await
        .map_err(|e| reject(tokens, e, "Unknown error while creating the user"))
}

/// Load a user into the form; the password field starts empty
pub async fn edit_user(users: &UserService, tokens: &dyn TokenStore, id: u32) -> Result<UserDraft, FormError> {
    let token = require_token(tokens)?;
    let user = users
        .get(&token, id)
        .await
        .map_err(|e| reject(tokens, e, "Unknown error while retrieving the user"))?;
    Ok(UserDraft { name: user.name, email: user.email, password: String::new() })
}

pub async fn update_user(users: &UserService, tokens: &dyn TokenStore, id: u32, draft: &UserDraft) -> Result<User, FormError> {
    validate_user(draft)?;
    let token = require_token(tokens)?;
    users
        .update(&token, id, draft)
        .await
        .map_err(|e| reject(tokens, e, "Unknown error while updating the user"))
}

pub async fn delete_user(users: &UserService, tokens: &dyn TokenStore, id_text: &str) -> Result<u32, FormError> {
    let id = parse_item_id(id_text)?;
    let token = require_token(tokens)?;
    users
        .delete(&token, id)
        .await
        .map_err(|e| reject(tokens, e, "Unknown error while deleting the user"))?;
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::MockTransport;
    use crate::session::MemoryTokenStore;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn test_create_user_checks_email() {
        let mock = MockTransport::new();
        let users = UserService::new(mock.shared(), "http://api");
        let draft = UserDraft { name: "Ada".into(), email: "ada".into(), password: "pw".into() };

        let result = block_on(create_user(&users, &MemoryTokenStore::with_token("jwt"), &draft));
        assert_eq!(result, Err(FormError::Invalid("Invalid email".into())));
        assert_eq!(mock.request_count(), 0);
    }

    #[test]
    fn test_list_users_requires_session() {
        let mock = MockTransport::new();
        let users = UserService::new(mock.shared(), "http://api");
        assert_eq!(
            block_on(list_users(&users, &MemoryTokenStore::new())),
            Err(FormError::Unauthenticated)
        );
    }

    #[test]
    fn test_edit_then_update_user() {
        let mock = MockTransport::new();
        mock.respond_json(json!({ "id": 3, "name": "Ada", "email": "ada@example.com", "password": "hash" }));
        let users = UserService::new(mock.shared(), "http://api");
        let tokens = MemoryTokenStore::with_token("jwt");

        let mut draft = block_on(edit_user(&users, &tokens, 3)).unwrap();
        assert_eq!(draft.email, "ada@example.com");
        assert!(draft.password.is_empty());

        assert_eq!(
            block_on(update_user(&users, &tokens, 3, &draft)),
            Err(FormError::Invalid("Field <password> can't be null".into()))
        );
        assert_eq!(mock.request_count(), 1);

        draft.password = "new".into();
        mock.respond_json(json!({ "id": 3, "name": "Ada", "email": "ada@example.com" }));
        let saved = block_on(update_user(&users, &tokens, 3, &draft)).unwrap();
        assert_eq!(saved.password, None);
        assert_eq!(mock.last().body.unwrap()["id"], json!(3));
    }

    #[test]
    fn test_delete_user_returns_id() {
        let mock = MockTransport::new();
        mock.respond_json(json!({}));
        let users = UserService::new(mock.shared(), "http://api");
        assert_eq!(block_on(delete_user(&users, &MemoryTokenStore::with_token("jwt"), "5")), Ok(5));
    }
}
