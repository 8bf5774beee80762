use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("browser window is not available")]
    NoWindow,

    #[error("document is not available")]
    NoDocument,

    #[error("document has no body")]
    NoBody,

    #[error("local storage is not available")]
    StorageUnavailable,

    #[error("DOM call failed: {0}")]
    Js(String),

    #[error("catalog for `{code}` is malformed: {source}")]
    Catalog {
        code: String,
        #[source]
        source: serde_json::Error,
    },
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
