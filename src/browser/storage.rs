//! `localStorage`-backed [`PreferenceStore`].

use web_sys::{Storage, Window};

use crate::error::{Error, Result};
use crate::theme::PreferenceStore;

/// Browser local storage. Holds `None` when storage is disabled or blocked,
/// in which case every read and write fails with [`Error::Storage`].
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn open(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("localStorage unavailable: {err:?}");
                None
            }
        };
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage> {
        self.storage
            .as_ref()
            .ok_or_else(|| Error::Storage("localStorage unavailable".into()))
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|err| Error::Storage(format!("read {key:?}: {err:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| Error::Storage(format!("write {key:?}: {err:?}")))
    }
}
