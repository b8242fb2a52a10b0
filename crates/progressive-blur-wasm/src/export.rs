//! Style-code export WASM bindings.
//!
//! The UI copies the returned string to the clipboard; this module only
//! formats it.

use progressive_blur_core::{export, ExportFormat};
use wasm_bindgen::prelude::*;

use crate::types::{params_from_js, reject};

/// Format a parameter object as copyable style code.
///
/// # Arguments
/// * `params` - Blur parameter object
/// * `format` - `"css"` or `"tailwind"`
///
/// # Errors
/// Returns an error for invalid parameters or an unknown format.
#[wasm_bindgen]
pub fn export_style(params: JsValue, format: &str) -> Result<String, JsValue> {
    let format = format
        .parse::<ExportFormat>()
        .map_err(|e| reject(&e.to_string()))?;
    let params = params_from_js(params)?;
    Ok(export::export_style(&params, format))
}
