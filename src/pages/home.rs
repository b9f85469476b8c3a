//! Home page with the rotating titles line.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::use_app;

use super::alert_failure;

/// Split the stored titles text into display lines
pub fn title_lines(titles: &str) -> Vec<String> {
    titles
        .split(',')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app();
    let titles = RwSignal::new(Vec::<String>::new());

    Effect::new(move |_| {
        let services = ctx.services();
        spawn_local(async move {
            match actions::load_titles(&services.information).await {
                Ok(entry) => titles.set(entry.map(|e| title_lines(&e.information)).unwrap_or_default()),
                Err(err) => alert_failure(&ctx, &err),
            }
        });
    });

    view! {
        <div class="home-page">
            <h1>"Welcome"</h1>
            <ul class="home-titles">
                {move || titles.get().into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
            </ul>
        </div>
    }
}
