use web_sys::Storage;

use crate::{error::store::StoreError, store::KeyValueStore};

/// [`KeyValueStore`] backed by the browser's `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage(&self) -> Result<Storage, StoreError> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window object".to_string()))?;

        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::WriteFailed {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }
}
