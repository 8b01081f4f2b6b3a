//! Platform abstraction layer
//!
//! Browser-only pieces:
//! - `canvas`: Canvas 2D implementation of the renderer's `Surface`
//! - `web`: DOM lookups (window, canvas, viewport size, tuning overrides)
//!
//! The native build needs nothing here; it renders into a
//! `RecordingSurface` and drives frames itself.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
#[cfg(target_arch = "wasm32")]
pub mod web;
