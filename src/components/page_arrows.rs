//! Page Arrows Component
//!
//! Previous/next buttons around a paged list.

use leptos::prelude::*;

/// Wraps the current page; the arrows only render when there is more than one page
#[component]
pub fn PageArrows(
    #[prop(into)] visible: Signal<bool>,
    #[prop(into)] on_prev: Callback<()>,
    #[prop(into)] on_next: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="paged">
            <Show when=move || visible.get()>
                <button type="button" class="page-arrow prev" on:click=move |_| on_prev.run(())>"‹"</button>
            </Show>
            <div class="page">{children()}</div>
            <Show when=move || visible.get()>
                <button type="button" class="page-arrow next" on:click=move |_| on_next.run(())>"›"</button>
            </Show>
        </div>
    }
}
