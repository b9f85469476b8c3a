//! Routed Views

pub mod about;
pub mod admin;
pub mod contact;
pub mod error403;
pub mod home;
pub mod login;
pub mod work;

use crate::alert::Alert;
use crate::context::AppContext;
use crate::error::FormError;

/// Show a failed background load in the alert banner
pub(crate) fn alert_failure(ctx: &AppContext, err: &FormError) {
    if let Some(text) = err.message() {
        ctx.show_alert(Alert::danger(text));
    }
}
