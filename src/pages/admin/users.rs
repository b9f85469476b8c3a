//! Admin users section: list, add and delete accounts.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::actions;
use crate::alert::Alert;
use crate::components::{DeleteConfirmButton, DraftField, FieldMessage};
use crate::context::use_app;
use crate::models::{User, UserDraft};

use super::item_form::redirect_or_show;

#[component]
pub fn AdminUsers() -> impl IntoView {
    let ctx = use_app();
    let navigate = use_navigate();
    let users = RwSignal::new(Vec::<User>::new());
    let draft = RwSignal::new(UserDraft::default());
    let message = RwSignal::new(None::<String>);
    // Id of the user loaded into the form, if editing
    let editing = RwSignal::new(None::<u32>);
    let (reload, set_reload) = signal(0u32);

    let load_navigate = navigate.clone();
    Effect::new(move |_| {
        let _ = reload.get();
        let service = ctx.services().users;
        let tokens = ctx.tokens();
        let navigate = load_navigate.clone();
        spawn_local(async move {
            match actions::list_users(&service, &*tokens).await {
                Ok(loaded) => users.set(loaded),
                Err(err) => redirect_or_show(&navigate, message, err),
            }
        });
    });

    let add_navigate = navigate.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let service = ctx.services().users;
        let tokens = ctx.tokens();
        let navigate = add_navigate.clone();
        let pending = draft.get_untracked();
        let target = editing.get_untracked();
        spawn_local(async move {
            let saved = match target {
                Some(id) => actions::update_user(&service, &*tokens, id, &pending).await,
                None => actions::create_user(&service, &*tokens, &pending).await,
            };
            match saved {
                Ok(user) => {
                    message.set(None);
                    draft.set(UserDraft::default());
                    editing.set(None);
                    let verb = if target.is_some() { "updated" } else { "created" };
                    ctx.show_alert(Alert::success(format!("User {} {verb}", user.name)));
                    set_reload.update(|v| *v += 1);
                }
                Err(err) => redirect_or_show(&navigate, message, err),
            }
        });
    };

    let edit_navigate = navigate.clone();
    let on_edit = move |id: u32| {
        let service = ctx.services().users;
        let tokens = ctx.tokens();
        let navigate = edit_navigate.clone();
        spawn_local(async move {
            match actions::edit_user(&service, &*tokens, id).await {
                Ok(loaded) => {
                    message.set(None);
                    draft.set(loaded);
                    editing.set(Some(id));
                }
                Err(err) => redirect_or_show(&navigate, message, err),
            }
        });
    };
    let on_edit = StoredValue::new_local(on_edit);

    let on_delete = move |id: u32| {
        let service = ctx.services().users;
        let tokens = ctx.tokens();
        let navigate = navigate.clone();
        spawn_local(async move {
            match actions::delete_user(&service, &*tokens, &id.to_string()).await {
                Ok(_) => set_reload.update(|v| *v += 1),
                Err(err) => redirect_or_show(&navigate, message, err),
            }
        });
    };
    let on_delete = StoredValue::new_local(on_delete);

    view! {
        <table class="admin-table">
            <thead>
                <tr><th>"Id"</th><th>"Name"</th><th>"Email"</th><th></th></tr>
            </thead>
            <tbody>
                <For
                    each=move || users.get()
                    key=|user| user.id
                    children=move |user| {
                        let id = user.id;
                        view! {
                            <tr>
                                <td>{id}</td>
                                <td>{user.name.clone()}</td>
                                <td>{user.email}</td>
                                <td>
                                    <button
                                        type="button"
                                        class="btn btn-secondary btn-sm"
                                        on:click=move |_| on_edit.with_value(|edit| edit(id))
                                    >
                                        "Edit"
                                    </button>
                                    <DeleteConfirmButton
                                        label=user.name
                                        on_confirm=Callback::new(move |_| on_delete.with_value(|delete| delete(id)))
                                    />
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
        <form class="admin-form" on:submit=on_submit>
            <h3>{move || if editing.get().is_some() { "Edit user" } else { "Add user" }}</h3>
            <DraftField draft=draft label="Name" get={|d: &UserDraft| d.name.clone()} set={|d: &mut UserDraft, v| d.name = v} />
            <DraftField draft=draft label="Email" get={|d: &UserDraft| d.email.clone()} set={|d: &mut UserDraft, v| d.email = v} />
            <DraftField draft=draft label="Password" input_type="password" get={|d: &UserDraft| d.password.clone()} set={|d: &mut UserDraft, v| d.password = v} />
            <FieldMessage message=message />
            <button type="submit" class="btn btn-primary">
                {move || if editing.get().is_some() { "Save" } else { "Add" }}
            </button>
            <Show when=move || editing.get().is_some()>
                <button
                    type="button"
                    class="btn btn-secondary"
                    on:click=move |_| {
                        editing.set(None);
                        draft.set(UserDraft::default());
                    }
                >
                    "Cancel"
                </button>
            </Show>
        </form>
    }
}
