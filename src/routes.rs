//! Client-Side Routes

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::error::FormError;

/// Views a handler can send the user to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Work,
    About,
    Contact,
    Login,
    Admin,
    Error403,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/home",
            Route::Work => "/work",
            Route::About => "/about",
            Route::Contact => "/contact",
            Route::Login => "/login",
            Route::Admin => "/admin",
            Route::Error403 => "/error403",
        }
    }
}

/// Navigate to a route with default options
pub fn go<F>(navigate: &F, route: Route)
where
    F: Fn(&str, NavigateOptions),
{
    log::debug!("navigating to {}", route.path());
    navigate(route.path(), NavigateOptions::default());
}

/// Apply a form outcome: follow its route, or show its message inline
pub fn settle<F>(navigate: &F, message: RwSignal<Option<String>>, outcome: Result<Route, FormError>)
where
    F: Fn(&str, NavigateOptions),
{
    match outcome {
        Ok(route) => {
            message.set(None);
            go(navigate, route);
        }
        Err(err) => match err.redirect() {
            Some(route) => go(navigate, route),
            None => message.set(err.message()),
        },
    }
}
