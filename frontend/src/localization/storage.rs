use crate::{error::PageError, helpers::prelude::*};

/// Durable per-browser key/value storage for user preferences.
pub trait PreferenceStore {
    /// Stored value for `key`. Unavailable storage reads as empty.
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str) -> Result<(), PageError>;
}

/// `window.localStorage`, looked up on every access since browsers may
/// deny it at any time.
pub struct BrowserStorage;

impl PreferenceStore for BrowserStorage {
    fn load(&self, key: &str) -> Option<String> {
        match WebPage::local_storage()?.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("Unable to read `{key}` from storage: {err:?}");
                None
            }
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PageError> {
        WebPage::local_storage()
            .ok_or(PageError::StorageUnavailable)?
            .set_item(key, value)
            .map_err(PageError::from)
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use std::{
        cell::{Cell, RefCell},
        collections::HashMap,
    };

    use super::PreferenceStore;
    use crate::error::PageError;

    #[derive(Default)]
    pub struct MemoryStorage {
        pub values: RefCell<HashMap<String, String>>,
        pub writes: Cell<usize>,
        pub denied: bool,
    }

    impl MemoryStorage {
        pub fn with(key: &str, value: &str) -> Self {
            let storage = Self::default();
            storage
                .values
                .borrow_mut()
                .insert(key.to_owned(), value.to_owned());
            storage
        }

        pub fn denied() -> Self {
            Self {
                denied: true,
                ..Self::default()
            }
        }

        pub fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }
    }

    impl PreferenceStore for MemoryStorage {
        fn load(&self, key: &str) -> Option<String> {
            if self.denied {
                return None;
            }
            self.get(key)
        }

        fn save(&self, key: &str, value: &str) -> Result<(), PageError> {
            if self.denied {
                return Err(PageError::StorageUnavailable);
            }
            self.values
                .borrow_mut()
                .insert(key.to_owned(), value.to_owned());
            self.writes.set(self.writes.get() + 1);
            Ok(())
        }
    }
}
