//! Admin home section: edit the home page titles.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::actions;
use crate::alert::Alert;
use crate::components::TextField;
use crate::context::use_app;
use crate::error::FormError;
use crate::models::InfoEntry;
use crate::pages::alert_failure;
use crate::routes::go;

#[component]
pub fn AdminHome() -> impl IntoView {
    let ctx = use_app();
    let navigate = use_navigate();
    let current = RwSignal::new(None::<InfoEntry>);
    let titles = RwSignal::new(String::new());

    Effect::new(move |_| {
        let info = ctx.services().information;
        spawn_local(async move {
            match actions::load_titles(&info).await {
                Ok(entry) => {
                    titles.set(entry.as_ref().map(|e| e.information.clone()).unwrap_or_default());
                    current.set(entry);
                }
                Err(err) => alert_failure(&ctx, &err),
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let info = ctx.services().information;
        let tokens = ctx.tokens();
        let navigate = navigate.clone();
        let entry = current.get_untracked();
        let text = titles.get_untracked();
        spawn_local(async move {
            match actions::update_titles(&info, &*tokens, entry.as_ref(), &text).await {
                Ok(saved) => {
                    current.set(Some(saved));
                    ctx.show_alert(Alert::success("Titles updated successfully"));
                }
                Err(FormError::NotEdited) => ctx.show_alert(Alert::danger("Information not edited")),
                Err(err) => match err.redirect() {
                    Some(route) => go(&navigate, route),
                    None => alert_failure(&ctx, &err),
                },
            }
        });
    };

    view! {
        <form class="admin-form" on:submit=on_submit>
            <TextField value=titles label="Home titles (comma separated)" multiline=true />
            <button type="submit" class="btn btn-primary">"Update"</button>
        </form>
    }
}
