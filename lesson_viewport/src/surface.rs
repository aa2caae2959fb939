// Copyright 2025 the Lesson Viewport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

/// Platform surface that a [`crate::ScalingOverlayViewport`] drives.
///
/// A surface owns the curtain, the content box, and the inner scaling element.
/// The viewport only ever talks to it through this trait, so the same
/// lifecycle logic runs against a browser DOM, a native window, or
/// [`crate::HeadlessSurface`].
pub trait OverlaySurface {
    /// Handle to an embedded content frame created by [`Self::create_frame`].
    type Frame;

    /// Current size of the full-screen curtain the content box sits in.
    fn container_size(&self) -> Size;

    /// Sets the displayed size of the content box.
    fn set_content_size(&mut self, size: Size);

    /// Applies a uniform scale to the inner content, anchored at its top-left
    /// corner. `None` removes any scale.
    fn apply_scale(&mut self, scale: Option<f64>);

    /// Shows or hides the curtain and everything on it.
    fn set_revealed(&mut self, revealed: bool);

    /// Creates an embedded frame that loads `locator` inside the scaling
    /// element.
    ///
    /// Returns `None` when the platform cannot create frames.
    fn create_frame(&mut self, locator: &str) -> Option<Self::Frame>;

    /// Removes a frame previously returned by [`Self::create_frame`].
    fn remove_frame(&mut self, frame: &Self::Frame);

    /// Discards everything inside the scaling element, including frames.
    fn clear_content(&mut self);
}
