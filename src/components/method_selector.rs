//! Method Selector Component
//!
//! Add / edit / delete (/ messages) switch of an admin section.

use leptos::prelude::*;

/// Operation an admin section's form performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminMethod {
    #[default]
    Add,
    Edit,
    Delete,
    Messages,
}

impl AdminMethod {
    pub fn label(self) -> &'static str {
        match self {
            AdminMethod::Add => "Add",
            AdminMethod::Edit => "Edit",
            AdminMethod::Delete => "Delete",
            AdminMethod::Messages => "Messages",
        }
    }

    /// Whether the form takes an item id instead of (or before) the fields
    pub fn needs_id(self) -> bool {
        matches!(self, AdminMethod::Edit | AdminMethod::Delete)
    }
}

/// Methods offered by the work and about sections
pub const ITEM_METHODS: &[AdminMethod] = &[AdminMethod::Add, AdminMethod::Edit, AdminMethod::Delete];

/// Contact section also reads the inbox
pub const CONTACT_METHODS: &[AdminMethod] = &[
    AdminMethod::Add,
    AdminMethod::Edit,
    AdminMethod::Delete,
    AdminMethod::Messages,
];

/// Method selector buttons for an admin section
#[component]
pub fn MethodSelector(
    options: &'static [AdminMethod],
    current: RwSignal<AdminMethod>,
    on_change: impl Fn(AdminMethod) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="method-selector">
            {options.iter().map(|method| {
                let method = *method;
                let is_selected = move || current.get() == method;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "method-btn active" } else { "method-btn" }
                        on:click=move |_| on_change(method)
                    >
                        {method.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
