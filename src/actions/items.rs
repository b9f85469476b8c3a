//! Item Handlers
//!
//! Add / look up / edit / delete for work, about and contact items.

use crate::api::ItemApi;
use crate::error::FormError;
use crate::models::{AboutDraft, ContactDraft, WorkDraft};
use crate::routes::Route;
use crate::session::TokenStore;
use crate::validation::{parse_item_id, require};

use super::{reject, require_token};

/// Required-field checks for a draft
pub trait Validate {
    fn validate(&self) -> Result<(), FormError>;
}

impl Validate for WorkDraft {
    fn validate(&self) -> Result<(), FormError> {
        require("name", &self.name)?;
        require("date", &self.date)?;
        require("technologies", &self.technologies)?;
        require("description", &self.description)
    }
}

impl Validate for AboutDraft {
    fn validate(&self) -> Result<(), FormError> {
        require("name", &self.name)?;
        require("date", &self.date)?;
        require("description", &self.description)
    }
}

impl Validate for ContactDraft {
    fn validate(&self) -> Result<(), FormError> {
        require("name", &self.name)?;
        require("account", &self.account)
    }
}

/// Item loaded into the edit form
#[derive(Debug, Clone, PartialEq)]
pub struct EditTarget<D> {
    pub id: u32,
    pub original: D,
}

pub async fn create_item<A>(api: &A, tokens: &dyn TokenStore, draft: &A::Draft) -> Result<Route, FormError>
where
    A: ItemApi,
    A::Draft: Validate,
{
    draft.validate()?;
    let token = require_token(tokens)?;
    api.create(&token, draft)
        .await
        .map_err(|e| reject(tokens, e, "Unknown error while creating the item"))?;
    Ok(Route::Home)
}

/// Fetch an item by its free-text id for editing
pub async fn lookup_item<A: ItemApi>(api: &A, id_text: &str) -> Result<EditTarget<A::Draft>, FormError> {
    let id = parse_item_id(id_text)?;
    let item = api
        .get(id)
        .await
        .map_err(|e| FormError::from_api(e, "Unknown error while searching the item"))?;
    Ok(EditTarget { id, original: A::Draft::from(&item) })
}

pub async fn update_item<A>(
    api: &A,
    tokens: &dyn TokenStore,
    target: Option<&EditTarget<A::Draft>>,
    draft: &A::Draft,
) -> Result<Route, FormError>
where
    A: ItemApi,
    A::Draft: Validate,
{
    draft.validate()?;
    let target = target.ok_or_else(|| FormError::Invalid("Item to update not found".to_string()))?;
    if *draft == target.original {
        return Err(FormError::NotEdited);
    }
    let token = require_token(tokens)?;
    api.update(&token, target.id, draft)
        .await
        .map_err(|e| reject(tokens, e, "Unknown error while updating the item"))?;
    Ok(Route::Home)
}

pub async fn delete_item<A: ItemApi>(api: &A, tokens: &dyn TokenStore, id_text: &str) -> Result<Route, FormError> {
    let id = parse_item_id(id_text)?;
    let token = require_token(tokens)?;
    api.delete(&token, id)
        .await
        .map_err(|e| reject(tokens, e, "Unknown error while deleting the item"))?;
    Ok(Route::Home)
}
