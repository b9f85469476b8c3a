//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::alert::Alert;
use crate::api::Services;
use crate::config::ALERT_DURATION_MS;
use crate::session::TokenStore;

/// App-wide services and signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// REST wrappers, sharing one transport and their list caches
    services: StoredValue<Services>,
    /// Session token storage
    tokens: StoredValue<Arc<dyn TokenStore>>,
    /// Alert banner contents - read
    pub alert: ReadSignal<Option<Alert>>,
    /// Alert banner contents - write
    set_alert: WriteSignal<Option<Alert>>,
    serial: StoredValue<u32>,
}

impl AppContext {
    pub fn new(services: Services, tokens: Arc<dyn TokenStore>) -> Self {
        let (alert, set_alert) = signal(None);
        Self {
            services: StoredValue::new(services),
            tokens: StoredValue::new(tokens),
            alert,
            set_alert,
            serial: StoredValue::new(0),
        }
    }

    pub fn services(&self) -> Services {
        self.services.get_value()
    }

    pub fn tokens(&self) -> Arc<dyn TokenStore> {
        self.tokens.get_value()
    }

    /// Show an alert and hide it again after the configured delay
    pub fn show_alert(&self, mut alert: Alert) {
        self.serial.update_value(|serial| *serial = serial.wrapping_add(1));
        alert.serial = self.serial.get_value();
        let serial = alert.serial;
        self.set_alert.set(Some(alert));

        let set_alert = self.set_alert;
        spawn_local(async move {
            TimeoutFuture::new(ALERT_DURATION_MS).await;
            set_alert.update(|current| {
                if current.as_ref().is_some_and(|shown| shown.serial == serial) {
                    *current = None;
                }
            });
        });
    }

    pub fn dismiss_alert(&self) {
        self.set_alert.set(None);
    }
}

pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}
