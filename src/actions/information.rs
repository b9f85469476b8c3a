//! Information Handlers
//!
//! Home page titles and the About page journey text.

use crate::api::InformationService;
use crate::error::FormError;
use crate::gallery::Journey;
use crate::models::{find_info, InfoEntry, INFO_INDEX_TITLES, INFO_JOURNEY};
use crate::session::TokenStore;

use super::reject;

/// The `index_titles` row, if the table has one
pub async fn load_titles(info: &InformationService) -> Result<Option<InfoEntry>, FormError> {
    let entries = info
        .list()
        .await
        .map_err(|e| FormError::from_api(e, "Unknown error while retrieving the information table"))?;
    Ok(find_info(&entries, INFO_INDEX_TITLES).cloned())
}

pub async fn load_journey(info: &InformationService) -> Result<Journey, FormError> {
    let entries = info
        .list()
        .await
        .map_err(|e| FormError::from_api(e, "Unknown error while retrieving the information table"))?;
    Ok(Journey::intro(
        find_info(&entries, INFO_JOURNEY).map(|entry| entry.information.as_str()),
    ))
}

/// Save new home page titles.
///
/// Unchanged text is [`FormError::NotEdited`]; a missing token goes to the
/// forbidden page rather than login.
pub async fn update_titles(
    info: &InformationService,
    tokens: &dyn TokenStore,
    current: Option<&InfoEntry>,
    titles: &str,
) -> Result<InfoEntry, FormError> {
    let current = current.ok_or_else(|| FormError::Invalid("Titles entry not found".to_string()))?;
    if current.information == titles {
        return Err(FormError::NotEdited);
    }
    let token = tokens.get().ok_or(FormError::Forbidden)?;
    info.update(&token, current.id, INFO_INDEX_TITLES, titles)
        .await
        .map_err(|e| reject(tokens, e, "Unknown error while updating information"))
}
