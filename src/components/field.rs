//! Form Field Components
//!
//! Inputs bound to a signal, and the field-scoped message line under a form.

use leptos::prelude::*;

/// Text input bound to one field of a draft held in a signal
#[component]
pub fn DraftField<D>(
    draft: RwSignal<D>,
    label: &'static str,
    get: fn(&D) -> String,
    set: fn(&mut D, String),
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView
where
    D: Send + Sync + 'static,
{
    let value = move || draft.with(|d| get(d));
    let on_input = move |ev: web_sys::Event| {
        let text = event_target_value(&ev);
        draft.update(|d| set(d, text));
    };

    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            {if multiline {
                view! { <textarea prop:value=value on:input=on_input></textarea> }.into_any()
            } else {
                view! { <input type=input_type prop:value=value on:input=on_input /> }.into_any()
            }}
        </label>
    }
}

/// Input bound to a plain string signal
#[component]
pub fn TextField(
    value: RwSignal<String>,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            {if multiline {
                view! {
                    <textarea
                        prop:value=move || value.get()
                        on:input=move |ev| value.set(event_target_value(&ev))
                    ></textarea>
                }.into_any()
            } else {
                view! {
                    <input
                        type=input_type
                        prop:value=move || value.get()
                        on:input=move |ev| value.set(event_target_value(&ev))
                    />
                }.into_any()
            }}
        </label>
    }
}

/// Field-scoped error line, hidden when empty
#[component]
pub fn FieldMessage(message: RwSignal<Option<String>>) -> impl IntoView {
    move || message.get().map(|text| view! { <p class="field-message">{text}</p> })
}
