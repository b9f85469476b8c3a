//! Login page: email and password form that stores the session token.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::actions;
use crate::components::{FieldMessage, TextField};
use crate::context::use_app;
use crate::routes::settle;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let login = ctx.services().login;
        let tokens = ctx.tokens();
        let navigate = navigate.clone();
        let (email, password) = (email.get_untracked(), password.get_untracked());
        spawn_local(async move {
            let outcome = actions::login(&login, &*tokens, &email, &password).await;
            settle(&navigate, message, outcome);
        });
    };

    view! {
        <div class="login-page">
            <h1>"Log in"</h1>
            <form class="login-form" on:submit=on_submit>
                <TextField value=email label="Email" input_type="email" />
                <TextField value=password label="Password" input_type="password" />
                <FieldMessage message=message />
                <button type="submit" class="btn btn-primary">"Log in"</button>
            </form>
        </div>
    }
}
