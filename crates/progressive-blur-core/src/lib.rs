//! Progressive Blur Core - mask gradient engine
//!
//! This crate provides the computational core of the progressive blur editor:
//! the easing catalog, the mask gradient synthesizer, the debounced undo/redo
//! history over parameter snapshots, and style-code export.
//!
//! Nothing in this crate touches the DOM, storage, or the network. The
//! presentation layer hands in a [`BlurParameters`] value and gets strings back.

pub mod easing;
pub mod export;
pub mod gradient;
pub mod history;
pub mod params;

pub use easing::{ease, lookup, EasingFamily, EasingFn, EasingVariant};
pub use export::{export_style, ExportFormat};
pub use gradient::{compute_mask_gradient, mask_stops, MaskStop};
pub use history::{HistoryConfig, HistoryController, HistoryState, TimerHandle};
pub use params::{BlurParameters, Direction, ParamError};
