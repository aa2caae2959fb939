// Copyright 2025 the Lesson Viewport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marker class names for the overlay's elements.
//!
//! Stylesheets and DOM backends agree on these names; the curtain is revealed
//! by toggling [`OPEN`] on it.

/// Outermost wrapper, inserted directly under the document body.
pub const CONTAINER: &str = "player-viewport-container";
/// Full-screen darkened background beneath the content box.
pub const CURTAIN: &str = "player-viewport-curtain";
/// Added to the curtain while the viewport is open.
pub const OPEN: &str = "open";
/// Box sized to the fitted content dimensions.
pub const CONTENT: &str = "player-viewport-content";
/// Inner element carrying the uniform scale transform.
pub const SCALER: &str = "player-viewport-scaler";
/// Embedded content frame created by `open_with_content`.
pub const FRAME: &str = "player-viewport-frame";
/// Close button.
pub const CLOSE_BUTTON: &str = "player-viewport-x";
