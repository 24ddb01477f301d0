//! `localStorage` preference backend

use sitenav::theme::{PreferenceStorage, StorageError, StorageResult};

/// Preferences kept in the browser's `localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> StorageResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(StorageError::Unavailable("localStorage disabled".to_string())),
            Err(e) => Err(StorageError::Unavailable(format!("{:?}", e))),
        }
    }
}

impl PreferenceStorage for LocalStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_storage_round_trip() {
        let mut storage = LocalStorage;
        storage.set("sitenav-test", "dark").unwrap();
        assert_eq!(storage.get("sitenav-test").unwrap().as_deref(), Some("dark"));
    }
}
