//! WASM-compatible parameter types.
//!
//! This module converts between the JavaScript parameter objects the editor
//! UI holds and the core [`BlurParameters`] snapshot, validating ranges on the
//! way in and reporting rejected input to the browser console.

use progressive_blur_core::{BlurParameters, Direction, EasingFamily, EasingVariant, ParamError};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible blur parameters.
///
/// Field names follow the UI's camelCase state. Missing fields fall back to
/// the editor defaults, so a host can pass only what it tracks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JsBlurParameters {
    pub direction: Direction,
    pub height: u32,
    pub precision: u32,
    pub blur_radius: u32,
    pub easing_family: EasingFamily,
    pub easing_variant: EasingVariant,
    pub reverse: bool,
}

impl Default for JsBlurParameters {
    fn default() -> Self {
        BlurParameters::default().into()
    }
}

impl From<BlurParameters> for JsBlurParameters {
    fn from(p: BlurParameters) -> Self {
        JsBlurParameters {
            direction: p.direction,
            height: p.height,
            precision: p.precision,
            blur_radius: p.blur_radius,
            easing_family: p.easing_family,
            easing_variant: p.easing_variant,
            reverse: p.reverse,
        }
    }
}

impl TryFrom<JsBlurParameters> for BlurParameters {
    type Error = ParamError;

    fn try_from(js: JsBlurParameters) -> Result<Self, Self::Error> {
        let params = BlurParameters {
            direction: js.direction,
            height: js.height,
            precision: js.precision,
            blur_radius: js.blur_radius,
            easing_family: js.easing_family,
            easing_variant: js.easing_variant,
            reverse: js.reverse,
        };
        params.validate()?;
        Ok(params)
    }
}

/// Parse and validate a JS parameter object.
///
/// `undefined` and `null` yield the editor defaults.
pub(crate) fn params_from_js(value: JsValue) -> Result<BlurParameters, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(BlurParameters::default());
    }

    let js: JsBlurParameters = serde_wasm_bindgen::from_value(value)
        .map_err(|e| reject(&format!("Invalid blur parameters: {}", e)))?;

    BlurParameters::try_from(js).map_err(|e| reject(&e.to_string()))
}

/// Convert core parameters to a plain JS object.
pub(crate) fn params_to_js(params: BlurParameters) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&JsBlurParameters::from(params))
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize parameters: {}", e)))
}

/// Log `message` as a console warning and wrap it as a JS error value.
pub(crate) fn reject(message: &str) -> JsValue {
    let value = JsValue::from_str(message);
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&value);
    value
}
