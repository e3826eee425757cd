//! Per-user session state for the transport layer.
//!
//! The only session fact this system keeps is which compression [`Mode`] a
//! user last selected. The store is an explicit interface injected into the
//! transport layer; the engine never reads or writes it.

use std::sync::RwLock;

use rustc_hash::FxHashMap;

use crate::types::Mode;

/// Opaque user identity supplied by the transport layer.
pub type UserId = u64;

/// Mode selection keyed by user.
///
/// Implementations must be safe to share across the transport's concurrent
/// request handlers.
pub trait SessionStore: Send + Sync {
    /// The mode the user last selected, if any.
    fn get_mode(&self, user: UserId) -> Option<Mode>;

    /// Record the user's selection, replacing any previous one.
    fn set_mode(&self, user: UserId, mode: Mode);
}

/// Process-wide, non-persistent store. State is lost on restart, which is
/// the intended lifecycle: users re-pick a mode per process.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    modes: RwLock<FxHashMap<UserId, Mode>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with a recorded selection.
    pub fn len(&self) -> usize {
        self.modes.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStore for InMemorySessionStore {
    fn get_mode(&self, user: UserId) -> Option<Mode> {
        self.modes.read().ok().and_then(|m| m.get(&user).copied())
    }

    fn set_mode(&self, user: UserId, mode: Mode) {
        if let Ok(mut modes) = self.modes.write() {
            modes.insert(user, mode);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_user_has_no_mode() {
        let store = InMemorySessionStore::new();
        assert_eq!(store.get_mode(42), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_then_get() {
        let store = InMemorySessionStore::new();
        store.set_mode(42, Mode::Strong);
        assert_eq!(store.get_mode(42), Some(Mode::Strong));
        assert_eq!(store.get_mode(7), None);
    }

    #[test]
    fn test_set_replaces_previous_selection() {
        let store = InMemorySessionStore::new();
        store.set_mode(42, Mode::Strong);
        store.set_mode(42, Mode::Normal);
        assert_eq!(store.get_mode(42), Some(Mode::Normal));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_shared_across_threads() {
        use std::sync::Arc;

        let store = Arc::new(InMemorySessionStore::new());
        let handles: Vec<_> = (0..8u64)
            .map(|user| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.set_mode(user, Mode::Strong))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(store.len(), 8);
    }

    #[test]
    fn test_usable_as_trait_object() {
        let store: Box<dyn SessionStore> = Box::new(InMemorySessionStore::new());
        store.set_mode(1, Mode::Normal);
        assert_eq!(store.get_mode(1), Some(Mode::Normal));
    }
}
