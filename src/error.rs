//! Error type shared by the controller and the browser bindings.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("no window or document available")]
    NoDocument,

    #[error("toggle control #{0} not found in document")]
    MissingToggle(String),

    #[error("element #{0} is not a checkbox input")]
    NotACheckbox(String),

    #[error("failed to register '{event}' listener: {reason}")]
    Listener { event: String, reason: String },

    #[error("browser storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("failed to read '{key}' from storage: {reason}")]
    StorageRead { key: String, reason: String },

    #[error("failed to write '{key}' to storage: {reason}")]
    StorageWrite { key: String, reason: String },

    #[error("invalid theme config: {0}")]
    InvalidConfig(String),

    #[error("malformed theme config JSON: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

#[cfg(target_arch = "wasm32")]
impl From<ThemeError> for wasm_bindgen::JsValue {
    fn from(err: ThemeError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
