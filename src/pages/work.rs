//! Public list of portfolio projects.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ItemApi;
use crate::components::ItemCard;
use crate::context::use_app;
use crate::error::FormError;
use crate::models::WorkItem;

use super::alert_failure;

#[component]
pub fn WorkPage() -> impl IntoView {
    let ctx = use_app();
    let items = RwSignal::new(Vec::<WorkItem>::new());

    Effect::new(move |_| {
        let work = ctx.services().work;
        spawn_local(async move {
            match work.list().await {
                Ok(loaded) => items.set(loaded),
                Err(err) => alert_failure(&ctx, &FormError::from_api(err, "Unknown error while retrieving the work items")),
            }
        });
    });

    view! {
        <div class="work-page">
            <h1>"Work"</h1>
            <div class="card-grid">
                <For
                    each=move || items.get()
                    key=|item| item.id
                    children=move |item| view! {
                        <ItemCard
                            title=item.name
                            subtitle=Some(format!("{} · {}", item.date, item.technologies))
                            body=Some(item.description)
                            image_uri=item.image_uri
                            image_alt=item.image_alt
                            links=vec![("Code", item.code_uri), ("Live", item.live_uri)]
                        />
                    }
                />
            </div>
        </div>
    }
}
