//! Crate error type.
//!
//! Nothing in the behaviour layer is fatal. Errors surface from the browser
//! layer as values, are logged by the event handler that hit them, and the
//! affected behaviour simply does nothing for that event.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The JSON configuration block could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
    /// A stored theme value is neither `"dark"` nor `"light"`.
    #[error("unknown theme preference {0:?}")]
    UnknownTheme(String),
    /// Local storage is unavailable or rejected a read/write.
    #[error("preference storage error: {0}")]
    Storage(String),
    /// A DOM call returned an exception.
    #[error("dom error: {0}")]
    Dom(String),
}

#[cfg(feature = "browser")]
impl From<wasm_bindgen::JsValue> for Error {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
