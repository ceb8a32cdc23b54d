//! `localStorage`-backed preference store.

use tracing::warn;
use web_sys::Storage;

use crate::core::error::{UiError, UiResult};
use crate::core::store::PreferenceStore;

/// Origin-scoped browser storage. Values are stored raw, not JSON-encoded.
///
/// Every call re-resolves `window.localStorage`; when storage is unavailable
/// (privacy modes, sandboxed frames) reads return `None` and writes fail.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Option<Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> UiResult<()> {
        let storage =
            Self::storage().ok_or_else(|| UiError::storage("set", key, "localStorage unavailable"))?;
        storage
            .set_item(key, value)
            .map_err(|err| UiError::storage("set", key, format!("{err:?}")))
    }

    fn delete(&self, key: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(err) = storage.remove_item(key) {
            let err = UiError::storage("delete", key, format!("{err:?}"));
            warn!(error = %err, detail = ?err, "storage operation failed");
        }
    }
}
