//! Shared add / edit / delete form state of the admin item sections.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;

use crate::actions::{create_item, delete_item, lookup_item, update_item, EditTarget, Validate};
use crate::api::ItemApi;
use crate::components::AdminMethod;
use crate::routes::{go, settle};
use crate::session::TokenStore;

/// Signals behind one section's form
pub struct ItemForm<D: Send + Sync + 'static> {
    pub method: RwSignal<AdminMethod>,
    pub message: RwSignal<Option<String>>,
    /// Free-text id for edit lookup and delete
    pub item_id: RwSignal<String>,
    pub draft: RwSignal<D>,
    /// Item loaded by the last successful lookup
    pub target: RwSignal<Option<EditTarget<D>>>,
}

impl<D: Send + Sync + 'static> Clone for ItemForm<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Send + Sync + 'static> Copy for ItemForm<D> {}

impl<D> ItemForm<D>
where
    D: Clone + Default + PartialEq + Validate + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            method: RwSignal::new(AdminMethod::Add),
            message: RwSignal::new(None),
            item_id: RwSignal::new(String::new()),
            draft: RwSignal::new(D::default()),
            target: RwSignal::new(None),
        }
    }

    /// Change method, clearing the section's messages and inputs
    pub fn switch(&self, method: AdminMethod) {
        self.method.set(method);
        self.message.set(None);
        self.item_id.set(String::new());
        self.draft.set(D::default());
        self.target.set(None);
    }

    /// Load the item named by `item_id` into the draft for editing
    pub fn lookup<A>(&self, api: A)
    where
        A: ItemApi<Draft = D> + 'static,
    {
        let form = *self;
        let id_text = self.item_id.get_untracked();
        spawn_local(async move {
            match lookup_item(&api, &id_text).await {
                Ok(target) => {
                    form.draft.set(target.original.clone());
                    form.target.set(Some(target));
                    form.message.set(None);
                }
                Err(err) => {
                    form.target.set(None);
                    form.message.set(err.message().or_else(|| Some("Item not found".to_string())));
                }
            }
        });
    }

    /// Run the selected method against `api`
    pub fn submit<A, F>(&self, api: A, tokens: Arc<dyn TokenStore>, navigate: F)
    where
        A: ItemApi<Draft = D> + 'static,
        F: Fn(&str, NavigateOptions) + 'static,
    {
        let form = *self;
        let method = self.method.get_untracked();
        let draft = self.draft.get_untracked();
        let id_text = self.item_id.get_untracked();
        let target = self.target.get_untracked();
        spawn_local(async move {
            let tokens = &*tokens;
            let outcome = match method {
                AdminMethod::Add => create_item(&api, tokens, &draft).await,
                AdminMethod::Edit => update_item(&api, tokens, target.as_ref(), &draft).await,
                AdminMethod::Delete => delete_item(&api, tokens, &id_text).await,
                AdminMethod::Messages => return,
            };
            if outcome.is_ok() {
                form.switch(AdminMethod::Add);
            }
            settle(&navigate, form.message, outcome);
        });
    }
}

/// Follow a handler's redirect, if it has one; otherwise show its message
pub(crate) fn redirect_or_show<F>(navigate: &F, message: RwSignal<Option<String>>, err: crate::error::FormError)
where
    F: Fn(&str, NavigateOptions),
{
    match err.redirect() {
        Some(route) => go(navigate, route),
        None => message.set(err.message()),
    }
}
