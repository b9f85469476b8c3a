//! Admin work section.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::{AdminMethod, DraftField, FieldMessage, MethodSelector, TextField, ITEM_METHODS};
use crate::context::use_app;
use crate::models::WorkDraft;

use super::item_form::ItemForm;

#[component]
pub fn AdminWork() -> impl IntoView {
    let ctx = use_app();
    let navigate = use_navigate();
    let form = ItemForm::<WorkDraft>::new();
    let draft = form.draft;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        form.submit(ctx.services().work, ctx.tokens(), navigate.clone());
    };

    view! {
        <MethodSelector options=ITEM_METHODS current=form.method on_change=move |method| form.switch(method) />
        <form class="admin-form" on:submit=on_submit>
            <Show when=move || form.method.get().needs_id()>
                <TextField value=form.item_id label="Item id" />
                <Show when=move || form.method.get() == AdminMethod::Edit>
                    <button type="button" class="btn btn-secondary" on:click=move |_| form.lookup(ctx.services().work)>
                        "Search"
                    </button>
                </Show>
            </Show>
            <Show when=move || form.method.get() != AdminMethod::Delete>
                <DraftField draft=draft label="Name" get={|d: &WorkDraft| d.name.clone()} set={|d: &mut WorkDraft, v| d.name = v} />
                <DraftField draft=draft label="Date" get={|d: &WorkDraft| d.date.clone()} set={|d: &mut WorkDraft, v| d.date = v} />
                <DraftField draft=draft label="Technologies" get={|d: &WorkDraft| d.technologies.clone()} set={|d: &mut WorkDraft, v| d.technologies = v} />
                <DraftField draft=draft label="Description" get={|d: &WorkDraft| d.description.clone()} set={|d: &mut WorkDraft, v| d.description = v} multiline=true />
                <DraftField draft=draft label="Code URI" get={|d: &WorkDraft| d.code_uri.clone()} set={|d: &mut WorkDraft, v| d.code_uri = v} />
                <DraftField draft=draft label="Live URI" get={|d: &WorkDraft| d.live_uri.clone()} set={|d: &mut WorkDraft, v| d.live_uri = v} />
                <DraftField draft=draft label="Image URI" get={|d: &WorkDraft| d.image_uri.clone()} set={|d: &mut WorkDraft, v| d.image_uri = v} />
                <DraftField draft=draft label="Image alt" get={|d: &WorkDraft| d.image_alt.clone()} set={|d: &mut WorkDraft, v| d.image_alt = v} />
            </Show>
            <FieldMessage message=form.message />
            <button type="submit" class="btn btn-primary">{move || form.method.get().label()}</button>
        </form>
    }
}
