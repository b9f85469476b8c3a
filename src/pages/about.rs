//! About page: journey panel plus a paged gallery of knowledge, badges and
//! certificates that re-pages itself when the viewport width changes.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::api::ItemApi;
use crate::components::{ItemCard, PageArrows};
use crate::context::use_app;
use crate::error::FormError;
use crate::gallery::{AboutGallery, Journey};
use crate::models::{AboutItem, AboutKind};

use super::alert_failure;

fn viewport_width() -> Option<u32> {
    window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .map(|width| width as u32)
}

#[component]
pub fn AboutPage() -> impl IntoView {
    let ctx = use_app();
    let gallery = RwSignal::new(AboutGallery::default());
    let intro = RwSignal::new(Journey::default());

    Effect::new(move |_| {
        let services = ctx.services();
        spawn_local(async move {
            match actions::load_journey(&services.information).await {
                Ok(journey) => {
                    intro.set(journey.clone());
                    gallery.update(|g| {
                        if g.selected_item.is_none() {
                            g.journey = journey;
                        }
                    });
                }
                Err(err) => alert_failure(&ctx, &err),
            }
            match services.about.list().await {
                Ok(items) => {
                    let width = viewport_width();
                    gallery.update(|g| {
                        let mut next = AboutGallery::new(items);
                        next.journey = g.journey.clone();
                        if let Some(width) = width {
                            next.resize(width);
                        }
                        *g = next;
                    });
                }
                Err(err) => alert_failure(&ctx, &FormError::from_api(err, "Unknown error while retrieving the about items")),
            }
        });
    });

    let resize = window_event_listener(ev::resize, move |_| {
        if let Some(width) = viewport_width() {
            gallery.maybe_update(|g| g.resize(width));
        }
    });
    on_cleanup(move || resize.remove());

    let show_intro = move |_| {
        gallery.update(|g| {
            g.journey = intro.get_untracked();
            g.selected_item = None;
        });
    };

    let tabs = AboutKind::ALL.iter().map(|kind| {
        let kind = *kind;
        let is_active = move || gallery.with(|g| g.category() == kind);
        view! {
            <button
                type="button"
                class=move || if is_active() { "about-tab active" } else { "about-tab" }
                on:click=move |_| gallery.update(|g| g.select(kind))
            >
                {kind.label()}
            </button>
        }
    }).collect_view();

    view! {
        <div class="about-page">
            <section class="journey">
                <h2 class="journey-title" on:click=show_intro>
                    {move || gallery.with(|g| g.journey.title.clone())}
                </h2>
                <p class="journey-text">{move || gallery.with(|g| g.journey.description.clone())}</p>
            </section>

            <div class="about-tabs">{tabs}</div>

            <PageArrows
                visible=Signal::derive(move || gallery.with(|g| g.pager().has_multiple_pages()))
                on_prev=move |_| gallery.update(AboutGallery::prev_page)
                on_next=move |_| gallery.update(AboutGallery::next_page)
            >
                <div class="card-grid">
                    <For
                        each=move || gallery.with(|g| g.pager().current().to_vec())
                        key=|item: &AboutItem| item.id
                        children=move |item: AboutItem| {
                            let id = item.id;
                            view! {
                                <ItemCard
                                    title=item.name
                                    subtitle=Some(item.date)
                                    body=None
                                    image_uri=item.image_uri
                                    image_alt=item.image_alt
                                    links=vec![("Link", item.link)]
                                    selected=Signal::derive(move || gallery.with(|g| g.selected_item == Some(id)))
                                    on_select=Callback::new(move |_| gallery.update(|g| g.show_item(id)))
                                />
                            }
                        }
                    />
                </div>
            </PageArrows>
            <p class="page-indicator">
                {move || gallery.with(|g| format!("{} / {}", g.pager().page_index() + 1, g.pager().total_pages()))}
            </p>
        </div>
    }
}
