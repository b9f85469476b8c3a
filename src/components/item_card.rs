//! Item Card Component
//!
//! Card used by the public work, about and contact lists.

use leptos::prelude::*;

/// Optional image of a card, with its alt text
fn card_image(uri: Option<String>, alt: Option<String>) -> impl IntoView {
    uri.map(|src| {
        let alt = alt.unwrap_or_default();
        view! { <img class="card-img" src=src alt=alt /> }
    })
}

#[component]
pub fn ItemCard(
    #[prop(into)] title: String,
    subtitle: Option<String>,
    body: Option<String>,
    image_uri: Option<String>,
    image_alt: Option<String>,
    /// (label, href) pairs; empty hrefs are skipped
    links: Vec<(&'static str, Option<String>)>,
    #[prop(optional, into)] selected: Signal<bool>,
    #[prop(optional, into)] on_select: Option<Callback<()>>,
) -> impl IntoView {
    let class = move || if selected.get() { "card selected" } else { "card" };

    view! {
        <article
            class=class
            on:click=move |_| {
                if let Some(on_select) = on_select {
                    on_select.run(());
                }
            }
        >
            {card_image(image_uri, image_alt)}
            <div class="card-body">
                <h3 class="card-title">{title}</h3>
                {subtitle.map(|text| view! { <p class="card-subtitle">{text}</p> })}
                {body.map(|text| view! { <p class="card-text">{text}</p> })}
                <div class="card-links">
                    {links.into_iter()
                        .filter_map(|(label, href)| href.filter(|h| !h.is_empty()).map(|href| (label, href)))
                        .map(|(label, href)| view! {
                            <a href=href target="_blank" rel="noopener">{label}</a>
                        })
                        .collect_view()}
                </div>
            </div>
        </article>
    }
}
