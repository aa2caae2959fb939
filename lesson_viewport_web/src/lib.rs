// Copyright 2025 the Lesson Viewport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser DOM backend for the lesson viewport.
//!
//! When targeting `wasm32`, [`insert`] builds the overlay directly under the
//! document body and returns a [`WebViewport`] that owns it:
//!
//! ```text
//! div.player-viewport-container
//! └── div.player-viewport-curtain      (gets `open` while shown)
//!     ├── div.player-viewport-content  (sized to the fitted box)
//!     │   └── div.player-viewport-scaler
//!     │       └── iframe.player-viewport-frame
//!     ├── a.player-viewport-x
//!     └── span                          (vertical centering helper)
//! ```
//!
//! [`DomSurface`] implements `lesson_viewport::OverlaySurface` over those
//! elements. Window `resize` and close-button `click` listeners are held by
//! the [`WebViewport`] and removed when it is dropped.
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn show_lesson(url: &str) -> Result<lesson_viewport_web::WebViewport, wasm_bindgen::JsValue> {
//!     let web = lesson_viewport_web::insert(&lesson_viewport::ViewportConfig::default())?;
//!     web.viewport()
//!         .borrow_mut()
//!         .open_with_content(url)
//!         .map_err(|err| wasm_bindgen::JsValue::from_str(&err.to_string()))?;
//!     Ok(web)
//! }
//! ```
//!
//! On other targets only the [`style`] helpers are available.

pub mod style;

#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
pub use dom::{DomSurface, EventSubscription, SharedDomViewport, WebViewport, insert};
