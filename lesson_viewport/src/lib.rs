// Copyright 2025 the Lesson Viewport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lesson Viewport: a headless model of a scaled, centered content overlay.
//!
//! The viewport shows lesson content in a box above a darkened full-screen
//! "curtain". The box always fits inside the window and always keeps the
//! aspect ratio of a configured maximum content size. Content authored at that
//! maximum size is shrunk with a uniform scale when the window is smaller.
//!
//! This crate focuses on:
//! - The proportional fit computation ([`fit_content`]).
//! - The open/close lifecycle of [`ScalingOverlayViewport`], including an
//!   optional close guard that may veto closing and an ordered list of
//!   after-close observers.
//! - Helpers for space-separated class attributes ([`class_list`]) and the
//!   marker class names used by DOM backends.
//!
//! It does **not** own any document or window. Callers are expected to:
//! - Implement [`OverlaySurface`] for their platform (see
//!   `lesson_viewport_web` for the browser backend), or use
//!   [`HeadlessSurface`] in tests and tools.
//! - Forward window resize events to [`ScalingOverlayViewport::resize`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use lesson_viewport::{HeadlessSurface, ScalingOverlayViewport};
//!
//! let surface = HeadlessSurface::new(Size::new(800.0, 800.0));
//! let mut viewport = ScalingOverlayViewport::new(surface, 1024.0, 768.0).unwrap();
//!
//! viewport.open_with_content("https://example.org/player?id=intro").unwrap();
//! assert!(viewport.is_open());
//!
//! // A 4:3 box that fits an 800x800 window.
//! let fit = viewport.content_fit().unwrap();
//! assert_eq!(fit.displayed, Size::new(800.0, 600.0));
//!
//! viewport.close().unwrap();
//! assert!(viewport.content_handle().is_none());
//! ```
//!
//! ## Design notes
//!
//! - Scaling is always uniform and anchored at the top-left corner of the
//!   content box, so the content is never distorted.
//! - Displayed sizes are floored to whole pixels.
//! - Close observers cannot be removed once registered.
//!
//! This crate is `no_std` and uses `alloc`. Disable the default `std` feature
//! and enable `libm` to build it without the standard library.

#![no_std]

extern crate alloc;

pub mod class_list;
pub mod classes;
mod config;
mod error;
mod fit;
mod headless;
mod surface;
mod viewport;

pub use config::ViewportConfig;
pub use error::{Result, ViewportError};
pub use fit::{ContentFit, fit_content};
pub use headless::{HeadlessFrame, HeadlessSurface};
pub use surface::OverlaySurface;
pub use viewport::{ScalingOverlayViewport, ViewportDebugInfo, ViewportState};
