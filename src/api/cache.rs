//! List Cache
//!
//! Last successful list body for one service. Lives as long as the page
//! load; any successful write through the owning service clears it so the
//! next list fetch goes back to the server.

use std::sync::{Arc, RwLock};

#[derive(Debug)]
pub struct ListCache<T> {
    inner: Arc<RwLock<Option<Vec<T>>>>,
}

// Clones share the same slot
impl<T> Clone for ListCache<T> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T> Default for ListCache<T> {
    fn default() -> Self {
        Self { inner: Arc::new(RwLock::new(None)) }
    }
}

impl<T: Clone> ListCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<Vec<T>> {
        self.inner.read().ok().and_then(|slot| slot.clone())
    }

    pub fn store(&self, items: Vec<T>) {
        if let Ok(mut slot) = self.inner.write() {
            *slot = Some(items);
        }
    }

    pub fn invalidate(&self) {
        if let Ok(mut slot) = self.inner.write() {
            *slot = None;
        }
    }

    pub fn is_cached(&self) -> bool {
        self.inner.read().map(|slot| slot.is_some()).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_slot() {
        let cache = ListCache::new();
        let other = cache.clone();
        cache.store(vec![1, 2]);
        assert_eq!(other.get(), Some(vec![1, 2]));

        other.invalidate();
        assert!(!cache.is_cached());
    }
}
