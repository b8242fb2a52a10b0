//! Progressive Blur WASM - WebAssembly bindings for the blur editor core
//!
//! This crate exposes the progressive-blur-core engine to the browser editor.
//!
//! # Module Structure
//!
//! - `types` - JS-compatible parameter objects and validation
//! - `gradient` - Mask gradient synthesis and easing catalog bindings
//! - `history` - Debounced undo/redo controller
//! - `export` - Copyable style-code export
//!
//! # Usage
//!
//! ```typescript
//! import init, { compute_mask_gradient, JsHistoryController } from '@progressive-blur/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const history = new JsHistoryController(undefined, undefined);
//! overlay.style.maskImage = compute_mask_gradient(history.current());
//! ```

use wasm_bindgen::prelude::*;

mod export;
mod gradient;
mod history;
mod types;

// Re-export public types
pub use export::export_style;
pub use gradient::{compute_mask_gradient, default_parameters, ease, easing_catalog};
pub use history::JsHistoryController;
pub use types::JsBlurParameters;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
