use anyhow::{anyhow, Result};
use backend::KeyValueStore;
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// Browser `localStorage`, one item per key
pub struct LocalStorageStore {
    storage: Storage,
}

impl LocalStorageStore {
    pub fn new() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| anyhow!("no browser window"))?;
        let storage = window
            .local_storage()
            .map_err(|e| anyhow!("localStorage is not accessible: {}", describe(&e)))?
            .ok_or_else(|| anyhow!("localStorage is not available in this browser"))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| anyhow!("Failed to read {}: {}", key, describe(&e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| anyhow!("Failed to write {}: {}", key, describe(&e)))
    }
}

fn describe(error: &JsValue) -> String {
    error
        .as_string()
        .unwrap_or_else(|| format!("{:?}", error))
}
