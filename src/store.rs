//! Admin Panel Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over which admin
//! sections are expanded.

use leptos::prelude::*;
use reactive_stores::Store;

/// Expanded flag per admin section
#[derive(Clone, Debug, Default, Store)]
pub struct AdminPanels {
    pub home: bool,
    pub work: bool,
    pub about: bool,
    pub contact: bool,
    pub users: bool,
}

/// Type alias for the store
pub type PanelStore = Store<AdminPanels>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Home,
    Work,
    About,
    Contact,
    Users,
}

impl Panel {
    pub const ALL: [Panel; 5] = [Panel::Home, Panel::Work, Panel::About, Panel::Contact, Panel::Users];

    pub fn title(self) -> &'static str {
        match self {
            Panel::Home => "Home",
            Panel::Work => "Work",
            Panel::About => "About",
            Panel::Contact => "Contact",
            Panel::Users => "Users",
        }
    }

    /// Anchor id of the section
    pub fn anchor(self) -> &'static str {
        match self {
            Panel::Home => "app_home",
            Panel::Work => "app_work",
            Panel::About => "app_about",
            Panel::Contact => "app_contact",
            Panel::Users => "app_users",
        }
    }
}

/// Get the panel store from context
pub fn use_panels() -> PanelStore {
    expect_context::<PanelStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn panel_open(store: &PanelStore, panel: Panel) -> bool {
    match panel {
        Panel::Home => store.home().get(),
        Panel::Work => store.work().get(),
        Panel::About => store.about().get(),
        Panel::Contact => store.contact().get(),
        Panel::Users => store.users().get(),
    }
}

pub fn set_panel(store: &PanelStore, panel: Panel, open: bool) {
    match panel {
        Panel::Home => store.home().set(open),
        Panel::Work => store.work().set(open),
        Panel::About => store.about().set(open),
        Panel::Contact => store.contact().set(open),
        Panel::Users => store.users().set(open),
    }
}

pub fn toggle_panel(store: &PanelStore, panel: Panel) {
    let open = panel_open(store, panel);
    set_panel(store, panel, !open);
}

/// Collapse every section (the "back to top" button)
pub fn collapse_all(store: &PanelStore) {
    for panel in Panel::ALL {
        set_panel(store, panel, false);
    }
}
