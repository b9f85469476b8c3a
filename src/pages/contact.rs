//! Contact page: links to the owner's accounts and a message form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::alert::Alert;
use crate::api::ItemApi;
use crate::components::{DraftField, FieldMessage, ItemCard};
use crate::context::use_app;
use crate::error::FormError;
use crate::models::{ContactItem, MessageDraft};

use super::alert_failure;

#[component]
pub fn ContactPage() -> impl IntoView {
    let ctx = use_app();
    let links = RwSignal::new(Vec::<ContactItem>::new());
    let draft = RwSignal::new(MessageDraft::default());
    let message = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        let contact = ctx.services().contact;
        spawn_local(async move {
            match contact.list().await {
                Ok(loaded) => links.set(loaded),
                Err(err) => alert_failure(&ctx, &FormError::from_api(err, "Unknown error while retrieving the contact items")),
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let contact = ctx.services().contact;
        let pending = draft.get_untracked();
        spawn_local(async move {
            match actions::send_message(&contact, &pending).await {
                Ok(()) => {
                    message.set(None);
                    draft.set(MessageDraft::default());
                    ctx.show_alert(Alert::success("Message sent"));
                }
                Err(err) => message.set(err.message()),
            }
        });
    };

    view! {
        <div class="contact-page">
            <h1>"Contact"</h1>
            <div class="card-grid">
                <For
                    each=move || links.get()
                    key=|item| item.id
                    children=move |item| view! {
                        <ItemCard
                            title=item.name
                            subtitle=Some(item.account)
                            body=None
                            image_uri=item.image_uri
                            image_alt=item.image_alt
                            links=vec![("Visit", item.link)]
                        />
                    }
                />
            </div>

            <form class="message-form" on:submit=on_submit>
                <h2>"Leave a message"</h2>
                <DraftField draft=draft label="Subject" get={|d: &MessageDraft| d.subject.clone()} set={|d: &mut MessageDraft, v| d.subject = v} />
                <DraftField draft=draft label="Message" get={|d: &MessageDraft| d.message.clone()} set={|d: &mut MessageDraft, v| d.message = v} multiline=true />
                <DraftField draft=draft label="Reply to" get={|d: &MessageDraft| d.reply.clone()} set={|d: &mut MessageDraft, v| d.reply = v} />
                <FieldMessage message=message />
                <button type="submit" class="btn btn-primary">"Send"</button>
            </form>
        </div>
    }
}
