//! Error taxonomy for page startup and browser calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors that abort page startup or a single event handler.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("missing required page elements: {}", format_ids(.0))]
    MissingElements(Vec<&'static str>),
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("invalid profile data: {0}")]
    Profile(#[from] serde_json::Error),
    #[error("browser call failed: {0}")]
    Js(String),
}

fn format_ids(ids: &[&'static str]) -> String {
    ids.iter().map(|id| format!("#{id}")).collect::<Vec<_>>().join(", ")
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for PageError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
