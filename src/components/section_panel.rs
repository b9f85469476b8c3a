//! Section Panel Component
//!
//! Collapsible admin section whose open flag lives in the panel store.

use leptos::prelude::*;

use crate::store::{panel_open, toggle_panel, use_panels, Panel};

#[component]
pub fn SectionPanel(panel: Panel, children: ChildrenFn) -> impl IntoView {
    let panels = use_panels();
    let open = move || panel_open(&panels, panel);

    view! {
        <section class="admin-section" id=panel.anchor()>
            <header class="admin-section-header" on:click=move |_| toggle_panel(&panels, panel)>
                <h2>{panel.title()}</h2>
                <span class="arrow">{move || if open() { "▲" } else { "▼" }}</span>
            </header>
            <Show when=open>
                <div class="admin-section-body">{children()}</div>
            </Show>
        </section>
    }
}
