//! Portfolio Frontend App
//!
//! Root component: shared context, navigation and client-side routes.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};

use crate::api::{default_transport, Services};
use crate::components::{AlertBanner, NavBar};
use crate::config::API_URL;
use crate::context::AppContext;
use crate::pages::{
    about::AboutPage, admin::AdminPage, contact::ContactPage, error403::Error403Page, home::HomePage,
    login::LoginPage, work::WorkPage,
};
use crate::session::CookieTokenStore;

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all children
    let services = Services::new(default_transport(), API_URL);
    provide_context(AppContext::new(services, Arc::new(CookieTokenStore)));

    view! {
        <Router>
            <NavBar />
            <AlertBanner />
            <main class="main-content">
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=StaticSegment("") view=HomePage />
                    <Route path=StaticSegment("home") view=HomePage />
                    <Route path=StaticSegment("work") view=WorkPage />
                    <Route path=StaticSegment("about") view=AboutPage />
                    <Route path=StaticSegment("contact") view=ContactPage />
                    <Route path=StaticSegment("login") view=LoginPage />
                    <Route path=StaticSegment("admin") view=AdminPage />
                    <Route path=StaticSegment("error403") view=Error403Page />
                </Routes>
            </main>
        </Router>
    }
}
