//! Admin Area
//!
//! Guarded page with one collapsible section per editable resource.

mod about;
mod contact;
mod home;
mod item_form;
mod users;
mod work;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use reactive_stores::Store;

use crate::actions;
use crate::components::SectionPanel;
use crate::context::use_app;
use crate::routes::go;
use crate::store::{collapse_all, set_panel, AdminPanels, Panel, PanelStore};

use about::AdminAbout;
use contact::AdminContact;
use home::AdminHome;
use users::AdminUsers;
use work::AdminWork;

#[component]
pub fn AdminPage() -> impl IntoView {
    let ctx = use_app();
    let navigate = use_navigate();
    let panels: PanelStore = Store::new(AdminPanels::default());
    provide_context(panels);

    // Session gate, once per visit
    let guard_navigate = navigate.clone();
    Effect::new(move |_| {
        let login = ctx.services().login;
        let tokens = ctx.tokens();
        let navigate = guard_navigate.clone();
        spawn_local(async move {
            if let Err(route) = actions::guard(&login, &*tokens).await {
                go(&navigate, route);
            }
        });
    });

    let on_logout = move |_| {
        let route = actions::logout(&*ctx.tokens());
        go(&navigate, route);
    };

    view! {
        <div class="admin-page" id="admin">
            <nav class="admin-nav">
                <button type="button" on:click=move |_| collapse_all(&panels)>"Top"</button>
                {Panel::ALL.iter().map(|panel| {
                    let panel = *panel;
                    view! {
                        <a href=format!("#{}", panel.anchor()) on:click=move |_| set_panel(&panels, panel, true)>
                            {panel.title()}
                        </a>
                    }
                }).collect_view()}
                <button type="button" class="btn btn-secondary" on:click=on_logout>"Log out"</button>
            </nav>

            <SectionPanel panel=Panel::Home><AdminHome /></SectionPanel>
            <SectionPanel panel=Panel::Work><AdminWork /></SectionPanel>
            <SectionPanel panel=Panel::About><AdminAbout /></SectionPanel>
            <SectionPanel panel=Panel::Contact><AdminContact /></SectionPanel>
            <SectionPanel panel=Panel::Users><AdminUsers /></SectionPanel>
        </div>
    }
}
