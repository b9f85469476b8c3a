//! UI Components
//!
//! Reusable Leptos components.

mod alert_banner;
mod delete_confirm_button;
mod field;
mod item_card;
mod method_selector;
mod nav_bar;
mod page_arrows;
mod section_panel;

pub use alert_banner::AlertBanner;
pub use delete_confirm_button::DeleteConfirmButton;
pub use field::{DraftField, FieldMessage, TextField};
pub use item_card::ItemCard;
pub use method_selector::{AdminMethod, MethodSelector, CONTACT_METHODS, ITEM_METHODS};
pub use nav_bar::NavBar;
pub use page_arrows::PageArrows;
pub use section_panel::SectionPanel;
