//! History controller WASM bindings.
//!
//! The core controller is clock-agnostic; this wrapper stamps commits with
//! `Date.now()` and hands the timer handle back to JavaScript, which owns the
//! actual `setTimeout`.
//!
//! # Example (TypeScript)
//! ```typescript
//! const history = new JsHistoryController(defaultParams, { debounceMs: 300 });
//!
//! function onParamsChange(params) {
//!   const handle = history.commit(params);
//!   if (handle !== undefined) {
//!     setTimeout(() => history.fire(handle), history.debounceMs);
//!   }
//! }
//!
//! function onUndo() {
//!   const restored = history.undo();
//!   if (restored !== undefined) setParams(restored);
//! }
//! ```

use progressive_blur_core::{BlurParameters, HistoryConfig, HistoryController, TimerHandle};
use wasm_bindgen::prelude::*;

use crate::types::{params_from_js, params_to_js, reject};

/// Debounced undo/redo history for JavaScript.
#[wasm_bindgen]
pub struct JsHistoryController {
    inner: HistoryController,
}

#[wasm_bindgen]
impl JsHistoryController {
    /// Create a controller tracking `initial`.
    ///
    /// # Arguments
    /// * `initial` - Parameter object (`undefined` for editor defaults)
    /// * `config` - Optional `{ debounceMs?: number, capacity?: number }`
    ///
    /// # Errors
    /// Returns error if either object cannot be deserialized
    #[wasm_bindgen(constructor)]
    pub fn new(initial: JsValue, config: JsValue) -> Result<JsHistoryController, JsValue> {
        let initial = params_from_js(initial)?;
        let config = config_from_js(config)?;
        Ok(JsHistoryController {
            inner: HistoryController::with_initial(initial, config),
        })
    }

    /// Offer the current UI parameters.
    ///
    /// Returns the timer handle to pass to [`fire`](Self::fire) once
    /// `debounceMs` has elapsed, or `undefined` when nothing was scheduled.
    pub fn commit(&mut self, params: JsValue) -> Result<Option<u32>, JsValue> {
        let params = params_from_js(params)?;
        Ok(self.commit_at(params, now_ms()))
    }

    /// Commit the pending snapshot if `handle` is still current.
    pub fn fire(&mut self, handle: u32) -> bool {
        self.inner.fire(TimerHandle::from_id(handle))
    }

    /// Commit the pending snapshot if its quiet window has elapsed.
    pub fn poll(&mut self) -> bool {
        self.inner.poll(now_ms())
    }

    /// Commit the pending snapshot immediately.
    pub fn flush(&mut self) -> bool {
        self.inner.flush()
    }

    /// Step back; returns the parameters to apply, or `undefined`.
    pub fn undo(&mut self) -> Result<JsValue, JsValue> {
        match self.inner.undo().copied() {
            Some(params) => params_to_js(params),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Step forward; returns the parameters to apply, or `undefined`.
    pub fn redo(&mut self) -> Result<JsValue, JsValue> {
        match self.inner.redo().copied() {
            Some(params) => params_to_js(params),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// The live snapshot.
    pub fn current(&self) -> Result<JsValue, JsValue> {
        params_to_js(self.current_params())
    }

    #[wasm_bindgen(getter, js_name = canUndo)]
    pub fn can_undo(&self) -> bool {
        self.inner.can_undo()
    }

    #[wasm_bindgen(getter, js_name = canRedo)]
    pub fn can_redo(&self) -> bool {
        self.inner.can_redo()
    }

    #[wasm_bindgen(getter, js_name = hasPending)]
    pub fn has_pending(&self) -> bool {
        self.inner.has_pending()
    }

    /// Quiet window in milliseconds
    #[wasm_bindgen(getter, js_name = debounceMs)]
    pub fn debounce_ms(&self) -> u32 {
        u32::try_from(self.inner.config().debounce_ms).unwrap_or(u32::MAX)
    }

    /// Number of history entries
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.inner.len()
    }

    /// Cursor position
    #[wasm_bindgen(getter)]
    pub fn index(&self) -> usize {
        self.inner.index().unwrap_or(0)
    }
}

impl JsHistoryController {
    fn commit_at(&mut self, params: BlurParameters, now_ms: u64) -> Option<u32> {
        self.inner.commit(params, now_ms).map(TimerHandle::id)
    }

    fn current_params(&self) -> BlurParameters {
        self.inner.current_snapshot().copied().unwrap_or_default()
    }
}

fn config_from_js(value: JsValue) -> Result<HistoryConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(HistoryConfig::default());
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| reject(&format!("Invalid history config: {}", e)))
}

#[cfg(target_arch = "wasm32")]
fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as u64)
}
