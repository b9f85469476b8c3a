//! Forbidden page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::Route;

#[component]
pub fn Error403Page() -> impl IntoView {
    view! {
        <div class="error-page">
            <h1>"403"</h1>
            <p>"You don't have permission to access this page."</p>
            <A href=Route::Login.path()>"Log in"</A>
        </div>
    }
}
