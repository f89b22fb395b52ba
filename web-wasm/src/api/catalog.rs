//! Catalog fetch
//!
//! The catalog is one static JSON document fetched once per page load.

use caja_common::Catalog;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no window available")]
    NoWindow,

    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("invalid catalog: {0}")]
    Parse(#[from] caja_common::Error),
}

fn js_message(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Fetch and parse the catalog document at `url`
pub async fn fetch_catalog(url: &str) -> Result<Catalog, LoadError> {
    let window = web_sys::window().ok_or(LoadError::NoWindow)?;

    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| LoadError::Network(js_message(e)))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| LoadError::Network(js_message(e)))?;

    if !resp.ok() {
        return Err(LoadError::Status(resp.status()));
    }

    let text = resp.text().map_err(|e| LoadError::Network(js_message(e)))?;
    let body = JsFuture::from(text)
        .await
        .map_err(|e| LoadError::Network(js_message(e)))?
        .as_string()
        .unwrap_or_default();

    Ok(Catalog::from_json(&body)?)
}
