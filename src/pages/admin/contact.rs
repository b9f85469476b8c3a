//! Admin contact section: contact links plus the message inbox.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::actions;
use crate::components::{AdminMethod, DraftField, FieldMessage, MethodSelector, TextField, CONTACT_METHODS};
use crate::context::use_app;
use crate::models::{ContactDraft, ContactMessage};

use super::item_form::{redirect_or_show, ItemForm};

#[component]
pub fn AdminContact() -> impl IntoView {
    let ctx = use_app();
    let navigate = use_navigate();
    let form = ItemForm::<ContactDraft>::new();
    let draft = form.draft;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        form.submit(ctx.services().contact, ctx.tokens(), navigate.clone());
    };

    view! {
        <MethodSelector options=CONTACT_METHODS current=form.method on_change=move |method| form.switch(method) />
        <form
            class="admin-form"
            class:hidden=move || form.method.get() == AdminMethod::Messages
            on:submit=on_submit
        >
            <Show when=move || form.method.get().needs_id()>
                <TextField value=form.item_id label="Item id" />
                <Show when=move || form.method.get() == AdminMethod::Edit>
                    <button type="button" class="btn btn-secondary" on:click=move |_| form.lookup(ctx.services().contact)>
                        "Search"
                    </button>
                </Show>
            </Show>
            <Show when=move || form.method.get() != AdminMethod::Delete>
                <DraftField draft=draft label="Name" get={|d: &ContactDraft| d.name.clone()} set={|d: &mut ContactDraft, v| d.name = v} />
                <DraftField draft=draft label="Account" get={|d: &ContactDraft| d.account.clone()} set={|d: &mut ContactDraft, v| d.account = v} />
                <DraftField draft=draft label="Link" get={|d: &ContactDraft| d.link.clone()} set={|d: &mut ContactDraft, v| d.link = v} />
                <DraftField draft=draft label="Image URI" get={|d: &ContactDraft| d.image_uri.clone()} set={|d: &mut ContactDraft, v| d.image_uri = v} />
                <DraftField draft=draft label="Image alt" get={|d: &ContactDraft| d.image_alt.clone()} set={|d: &mut ContactDraft, v| d.image_alt = v} />
            </Show>
            <FieldMessage message=form.message />
            <button type="submit" class="btn btn-primary">{move || form.method.get().label()}</button>
        </form>
        <Show when=move || form.method.get() == AdminMethod::Messages>
            <MessageInbox message=form.message />
        </Show>
    }
}

/// Messages newest first; opening an unread one marks it read
#[component]
fn MessageInbox(message: RwSignal<Option<String>>) -> impl IntoView {
    let ctx = use_app();
    let navigate = use_navigate();
    let messages = RwSignal::new(Vec::<ContactMessage>::new());
    let opened = RwSignal::new(None::<ContactMessage>);

    let load_navigate = navigate.clone();
    Effect::new(move |_| {
        let contact = ctx.services().contact;
        let tokens = ctx.tokens();
        let navigate = load_navigate.clone();
        spawn_local(async move {
            match actions::load_messages(&contact, &*tokens).await {
                Ok(loaded) => messages.set(loaded),
                Err(err) => redirect_or_show(&navigate, message, err),
            }
        });
    });

    let open = move |id: u32| {
        let contact = ctx.services().contact;
        let tokens = ctx.tokens();
        let navigate = navigate.clone();
        spawn_local(async move {
            match actions::open_message(&contact, &*tokens, id).await {
                Ok(shown) => {
                    messages.update(|list| {
                        if let Some(slot) = list.iter_mut().find(|m| m.id == shown.id) {
                            *slot = shown.clone();
                        }
                    });
                    opened.set(Some(shown));
                }
                Err(err) => redirect_or_show(&navigate, message, err),
            }
        });
    };
    let open = StoredValue::new_local(open);

    view! {
        <div class="inbox">
            <ul class="inbox-list">
                <For
                    each=move || messages.get()
                    key=|m| (m.id, m.read)
                    children=move |m| {
                        let id = m.id;
                        let class = if m.read { "inbox-row" } else { "inbox-row unread" };
                        view! {
                            <li class=class on:click=move |_| open.with_value(|open| open(id))>
                                <span class="inbox-subject">{m.subject}</span>
                                <span class="inbox-date">{m.date}</span>
                            </li>
                        }
                    }
                />
            </ul>
            {move || opened.get().map(|m| view! {
                <article class="inbox-message">
                    <h4>{m.subject}</h4>
                    <p class="inbox-reply">{m.reply}</p>
                    <p>{m.message}</p>
                </article>
            })}
            <FieldMessage message=message />
        </div>
    }
}
