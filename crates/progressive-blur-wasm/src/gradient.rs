//! Mask gradient and easing WASM bindings.
//!
//! # Functions
//!
//! - [`compute_mask_gradient`] - Render the mask gradient for a parameter object
//! - [`default_parameters`] - Editor mount defaults
//! - [`easing_catalog`] - Families and variants for populating selectors
//! - [`ease`] - Evaluate a single catalog curve (curve previews)
//!
//! # Example
//!
//! ```typescript
//! import { compute_mask_gradient, default_parameters } from '@progressive-blur/wasm';
//!
//! const params = { ...default_parameters(), height: 60, easingFamily: 'expo' };
//! element.style.maskImage = compute_mask_gradient(params);
//! ```

use progressive_blur_core::{gradient, EasingFamily, EasingVariant};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::types::{params_from_js, params_to_js, reject};

/// Compute the CSS mask gradient for a parameter object.
///
/// # Errors
/// Returns an error if the object cannot be parsed or a value is out of range.
#[wasm_bindgen]
pub fn compute_mask_gradient(params: JsValue) -> Result<String, JsValue> {
    let params = params_from_js(params)?;
    Ok(gradient::compute_mask_gradient(&params))
}

/// Editor mount defaults as a plain JS object.
#[wasm_bindgen]
pub fn default_parameters() -> Result<JsValue, JsValue> {
    params_to_js(Default::default())
}

#[derive(Debug, Serialize)]
struct EasingCatalog {
    families: Vec<&'static str>,
    variants: Vec<&'static str>,
}

fn catalog() -> EasingCatalog {
    EasingCatalog {
        families: EasingFamily::ALL.iter().map(|f| f.as_str()).collect(),
        variants: EasingVariant::ALL.iter().map(|v| v.as_str()).collect(),
    }
}

/// Catalog listing: `{ families: string[], variants: string[] }`.
#[wasm_bindgen]
pub fn easing_catalog() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&catalog())
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize catalog: {}", e)))
}

/// Evaluate the eased progress of `t` for a family/variant pair.
///
/// # Errors
/// Returns an error for names outside the catalog.
#[wasm_bindgen]
pub fn ease(family: &str, variant: &str, t: f64) -> Result<f64, JsValue> {
    let (family, variant) = parse_easing(family, variant).map_err(|e| reject(&e))?;
    Ok(progressive_blur_core::ease(family, variant, t))
}

fn parse_easing(family: &str, variant: &str) -> Result<(EasingFamily, EasingVariant), String> {
    let family = family.parse::<EasingFamily>().map_err(|e| e.to_string())?;
    let variant = variant.parse::<EasingVariant>().map_err(|e| e.to_string())?;
    Ok((family, variant))
}
