//! Theme persistence
//!
//! `ThemeStore` owns the active theme and keeps a copy in a key-value
//! storage. Storage trouble never reaches the caller: the in-memory theme
//! keeps governing the page for the rest of the session.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::Theme;

/// Fixed storage key for the persisted theme
pub const THEME_STORAGE_KEY: &str = "theme";

/// Errors that can occur in a key-value storage backend
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to read {key}: {reason}")]
    Read { key: String, reason: String },

    #[error("Failed to write {key}: {reason}")]
    Write { key: String, reason: String },
}

/// Synchronous string key-value storage scoped to one origin.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory storage. Clones share the same map, so a test can keep a
/// handle while the store owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.value(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Single source of truth for the display theme.
pub struct ThemeStore {
    storage: Box<dyn KeyValueStorage>,
    current: Theme,
}

impl ThemeStore {
    /// Read the persisted theme, or default to dark and persist that.
    ///
    /// - absent value: `Dark`, written back to storage
    /// - unrecognized value: `Dark`, written back over the bad value
    /// - storage error: `Dark` in memory only
    pub fn initialize(storage: impl KeyValueStorage + 'static) -> Self {
        let storage: Box<dyn KeyValueStorage> = Box::new(storage);

        let current = match storage.get(THEME_STORAGE_KEY) {
            Ok(Some(stored)) => match stored.parse::<Theme>() {
                Ok(theme) => theme,
                Err(e) => {
                    warn!(error = %e, "Ignoring persisted theme, using default");
                    persist(storage.as_ref(), Theme::default());
                    Theme::default()
                }
            },
            Ok(None) => {
                info!(theme = %Theme::default(), "No persisted theme, writing default");
                persist(storage.as_ref(), Theme::default());
                Theme::default()
            }
            Err(e) => {
                warn!(error = %e, "Theme storage unreadable, using default for this session");
                Theme::default()
            }
        };

        Self { storage, current }
    }

    /// Flip the theme and persist the new value.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        debug!(from = %self.current, to = %next, "Toggling theme");
        self.current = next;
        persist(self.storage.as_ref(), next);
        next
    }

    pub fn current(&self) -> Theme {
        self.current
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

fn persist(storage: &dyn KeyValueStorage, theme: Theme) {
    if let Err(e) = storage.set(THEME_STORAGE_KEY, theme.as_str()) {
        warn!(error = %e, theme = %theme, "Failed to persist theme preference");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Storage that rejects every call
    struct BrokenStorage;

    impl KeyValueStorage for BrokenStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("disabled".to_string()))
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            })
        }
    }

    /// Storage that reads fine but cannot write
    #[derive(Clone, Default)]
    struct ReadOnlyStorage(MemoryStorage);

    impl KeyValueStorage for ReadOnlyStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.get(key)
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                reason: "read-only".to_string(),
            })
        }
    }

    #[test]
    fn empty_storage_defaults_to_dark_and_writes_it() {
        let storage = MemoryStorage::new();
        let store = ThemeStore::initialize(storage.clone());

        assert_eq!(store.current(), Theme::Dark);
        assert_eq!(storage.value(THEME_STORAGE_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn stored_light_is_adopted_without_rewrite() {
        let storage = MemoryStorage::with_entry(THEME_STORAGE_KEY, "light");
        let store = ThemeStore::initialize(storage.clone());

        assert_eq!(store.current(), Theme::Light);
        assert_eq!(storage.value(THEME_STORAGE_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn unrecognized_value_fails_closed_to_dark() {
        let storage = MemoryStorage::with_entry(THEME_STORAGE_KEY, "blue");
        let store = ThemeStore::initialize(storage.clone());

        assert_eq!(store.current(), Theme::Dark);
        assert_eq!(storage.value(THEME_STORAGE_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn toggle_parity_and_storage_tracks_memory() {
        let storage = MemoryStorage::new();
        let mut store = ThemeStore::initialize(storage.clone());

        for n in 1..=7 {
            let theme = store.toggle();
            let expected = if n % 2 == 0 { Theme::Dark } else { Theme::Light };
            assert_eq!(theme, expected);
            assert_eq!(store.current(), expected);
            assert_eq!(
                storage.value(THEME_STORAGE_KEY).as_deref(),
                Some(expected.as_str())
            );
        }
    }

    #[test]
    fn current_does_not_touch_storage() {
        let storage = MemoryStorage::with_entry(THEME_STORAGE_KEY, "light");
        let store = ThemeStore::initialize(storage.clone());
        storage.set(THEME_STORAGE_KEY, "dark").unwrap();

        assert_eq!(store.current(), Theme::Light);
    }

    #[test]
    fn unavailable_storage_is_not_fatal() {
        let mut store = ThemeStore::initialize(BrokenStorage);
        assert_eq!(store.current(), Theme::Dark);

        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(store.current(), Theme::Light);
    }

    #[test]
    fn failed_write_keeps_in_memory_theme() {
        let inner = MemoryStorage::with_entry(THEME_STORAGE_KEY, "light");
        let mut store = ThemeStore::initialize(ReadOnlyStorage(inner.clone()));

        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(store.current(), Theme::Dark);
        assert_eq!(inner.value(THEME_STORAGE_KEY).as_deref(), Some("light"));
    }
}
