//! Alert Banner Component

use leptos::prelude::*;

use crate::context::use_app;

/// Renders the context's current alert, if any
#[component]
pub fn AlertBanner() -> impl IntoView {
    let ctx = use_app();

    move || {
        ctx.alert.get().map(|alert| {
            let class = alert.class();
            view! {
                <div class=class role="alert">
                    <span>{alert.text}</span>
                    <button type="button" class="alert-close" on:click=move |_| ctx.dismiss_alert()>"×"</button>
                </div>
            }
        })
    }
}
