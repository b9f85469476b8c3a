//! Session Token Storage
//!
//! The bearer token lives in a cookie outside the component tree. Handlers
//! only see the [`TokenStore`] trait so they can run against
//! [`MemoryTokenStore`] in tests.

use std::sync::{Arc, RwLock};

/// Where the session token is kept
pub trait TokenStore: Send + Sync {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// Token stored in the `JWT` cookie (browser only; a no-op elsewhere)
#[derive(Debug, Clone, Copy, Default)]
pub struct CookieTokenStore;

#[cfg(target_arch = "wasm32")]
mod cookie {
    use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};
    use wasm_bindgen::JsCast;
    use web_sys::HtmlDocument;

    use crate::config::{TOKEN_COOKIE, TOKEN_COOKIE_DAYS};

    fn document() -> Option<HtmlDocument> {
        web_sys::window()?.document()?.dyn_into::<HtmlDocument>().ok()
    }

    pub fn read() -> Option<String> {
        let cookies = document()?.cookie().ok()?;
        cookies
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == TOKEN_COOKIE)
            .and_then(|(_, value)| percent_decode_str(value).decode_utf8().ok())
            .map(|value| value.into_owned())
            .filter(|value| !value.is_empty())
    }

    pub fn write(token: &str) {
        let max_age = TOKEN_COOKIE_DAYS * 24 * 60 * 60;
        let value = utf8_percent_encode(token, NON_ALPHANUMERIC);
        set(&format!("{TOKEN_COOKIE}={value}; max-age={max_age}; path=/; SameSite=Strict"));
    }

    pub fn delete() {
        set(&format!("{TOKEN_COOKIE}=; max-age=0; path=/"));
    }

    fn set(cookie: &str) {
        match document() {
            Some(doc) => {
                if let Err(err) = doc.set_cookie(cookie) {
                    log::error!("could not write session cookie: {err:?}");
                }
            }
            None => log::error!("no document to store the session cookie in"),
        }
    }
}

impl TokenStore for CookieTokenStore {
    fn get(&self) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            cookie::read()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    fn set(&self, token: &str) {
        #[cfg(target_arch = "wasm32")]
        cookie::write(token);
        #[cfg(not(target_arch = "wasm32"))]
        let _ = token;
    }

    fn clear(&self) {
        #[cfg(target_arch = "wasm32")]
        cookie::delete();
    }
}

/// Token held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    token: Arc<RwLock<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.set(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.read().ok().and_then(|token| token.clone())
    }

    fn set(&self, token: &str) {
        if let Ok(mut slot) = self.token.write() {
            *slot = Some(token.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.token.write() {
            *slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.get(), None);
        store.set("Bearer abc");
        assert_eq!(store.get().as_deref(), Some("Bearer abc"));
        store.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_cookie_store_is_inert_off_browser() {
        let store = CookieTokenStore;
        store.set("abc");
        assert_eq!(store.get(), None);
    }
}
