//! Form Handlers
//!
//! Validate input, pick the session token, call a REST wrapper and turn the
//! result into either a route to follow or a message to show. Views only
//! wire these to signals and navigation.

mod information;
mod items;
mod messages;
mod session;
mod users;

pub use information::{load_journey, load_titles, update_titles};
pub use items::{create_item, delete_item, lookup_item, update_item, EditTarget, Validate};
pub use messages::{load_messages, open_message, send_message};
pub use session::{guard, login, logout};
pub use users::{create_user, delete_user, edit_user, list_users, update_user};

use crate::error::{ApiError, FormError};
use crate::session::TokenStore;

/// Token for an authenticated call, or a redirect to login
fn require_token(tokens: &dyn TokenStore) -> Result<String, FormError> {
    tokens.get().ok_or_else(|| {
        log::warn!("no session token, redirecting to login");
        FormError::Unauthenticated
    })
}

/// Map a REST failure, dropping the token if the server rejected it
fn reject(tokens: &dyn TokenStore, err: ApiError, fallback: &str) -> FormError {
    if err.is_unauthorized() {
        tokens.clear();
    }
    FormError::from_api(err, fallback)
}
