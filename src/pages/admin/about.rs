//! Admin about section.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::{AdminMethod, DraftField, FieldMessage, MethodSelector, TextField, ITEM_METHODS};
use crate::context::use_app;
use crate::models::{AboutDraft, AboutKind};

use super::item_form::ItemForm;

#[component]
pub fn AdminAbout() -> impl IntoView {
    let ctx = use_app();
    let navigate = use_navigate();
    let form = ItemForm::<AboutDraft>::new();
    let draft = form.draft;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        form.submit(ctx.services().about, ctx.tokens(), navigate.clone());
    };

    let on_kind = move |ev: web_sys::Event| {
        let picked = event_target_value(&ev).parse::<u8>().ok().and_then(AboutKind::from_code);
        if let Some(kind) = picked {
            draft.update(|d| d.kind = kind);
        }
    };

    view! {
        <MethodSelector options=ITEM_METHODS current=form.method on_change=move |method| form.switch(method) />
        <form class="admin-form" on:submit=on_submit>
            <Show when=move || form.method.get().needs_id()>
                <TextField value=form.item_id label="Item id" />
                <Show when=move || form.method.get() == AdminMethod::Edit>
                    <button type="button" class="btn btn-secondary" on:click=move |_| form.lookup(ctx.services().about)>
                        "Search"
                    </button>
                </Show>
            </Show>
            <Show when=move || form.method.get() != AdminMethod::Delete>
                <label class="field">
                    <span class="field-label">"Type"</span>
                    <select
                        prop:value=move || draft.with(|d| d.kind.code().to_string())
                        on:change=on_kind
                    >
                        {AboutKind::ALL.iter().map(|kind| view! {
                            <option value=kind.code().to_string()>{kind.label()}</option>
                        }).collect_view()}
                    </select>
                </label>
                <DraftField draft=draft label="Name" get={|d: &AboutDraft| d.name.clone()} set={|d: &mut AboutDraft, v| d.name = v} />
                <DraftField draft=draft label="Date" get={|d: &AboutDraft| d.date.clone()} set={|d: &mut AboutDraft, v| d.date = v} />
                <DraftField draft=draft label="Description" get={|d: &AboutDraft| d.description.clone()} set={|d: &mut AboutDraft, v| d.description = v} multiline=true />
                <DraftField draft=draft label="Link" get={|d: &AboutDraft| d.link.clone()} set={|d: &mut AboutDraft, v| d.link = v} />
                <DraftField draft=draft label="Image URI" get={|d: &AboutDraft| d.image_uri.clone()} set={|d: &mut AboutDraft, v| d.image_uri = v} />
                <DraftField draft=draft label="Image alt" get={|d: &AboutDraft| d.image_alt.clone()} set={|d: &mut AboutDraft, v| d.image_alt = v} />
            </Show>
            <FieldMessage message=form.message />
            <button type="submit" class="btn btn-primary">{move || form.method.get().label()}</button>
        </form>
    }
}
