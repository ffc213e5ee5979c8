//! Browser local storage backend for the survey flag.

use wasm_bindgen::JsValue;
use webcomic::store::{KeyValueStore, StoreError, StoreResult};

/// `window.localStorage`, looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> StoreResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
    }
}

fn js_error(err: JsValue) -> StoreError {
    StoreError::Unavailable(format!("{:?}", err))
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Self::storage()?.get_item(key).map_err(js_error)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        Self::storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        Self::storage()?.remove_item(key).map_err(js_error)
    }
}
