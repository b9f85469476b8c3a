//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::Route;

const PUBLIC_LINKS: &[(Route, &str)] = &[
    (Route::Home, "Home"),
    (Route::Work, "Work"),
    (Route::About, "About"),
    (Route::Contact, "Contact"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="nav-bar">
            {PUBLIC_LINKS.iter().map(|(route, label)| view! {
                <A href=route.path()>{*label}</A>
            }).collect_view()}
            <A href=Route::Admin.path()>"Admin"</A>
        </nav>
    }
}
