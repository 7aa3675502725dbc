use thiserror::Error;

/// Failures of the navigation layer. None of them reach the user: the
/// tracker and navigator degrade to their no-op behaviour on every variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("unknown section id: {0}")]
    UnknownSection(String),
    #[error("no window available")]
    NoWindow,
    #[error("no document available")]
    NoDocument,
    #[error("dom call failed: {0}")]
    Dom(String),
}

impl From<wasm_bindgen::JsValue> for NavError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        NavError::Dom(format!("{:?}", value))
    }
}
