// Copyright 2025 the Lesson Viewport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Size;
use tracing::{debug, warn};

use crate::config::ViewportConfig;
use crate::error::{Result, ViewportError};
use crate::fit::{ContentFit, fit_content};
use crate::surface::OverlaySurface;

type CloseGuard = Box<dyn FnMut() -> bool>;
type AfterClose = Box<dyn FnMut()>;

/// Lifecycle state of a [`ScalingOverlayViewport`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ViewportState {
    /// Curtain hidden, no content shown.
    #[default]
    Closed,
    /// Curtain revealed and content box sized to the container.
    Open,
}

/// A content box that floats, scaled and centered, above a dark curtain.
///
/// The viewport is bound to a maximum content size at construction. While
/// open, every [`resize`](Self::resize) fits that size into the surface's
/// container with [`fit_content`] and applies the result to the surface.
///
/// Closing can be vetoed by a close guard. Once a close goes through, the
/// after-close observers run in the order they were added.
pub struct ScalingOverlayViewport<S: OverlaySurface> {
    surface: S,
    max_size: Size,
    state: ViewportState,
    frame: Option<S::Frame>,
    fit: Option<ContentFit>,
    close_guard: Option<CloseGuard>,
    after_close: Vec<AfterClose>,
}

impl<S: OverlaySurface> ScalingOverlayViewport<S> {
    /// Creates a closed viewport over `surface` with the given maximum content
    /// size.
    ///
    /// Fails with [`ViewportError::InvalidDimensions`] unless both dimensions
    /// are positive and finite.
    pub fn new(surface: S, max_width: f64, max_height: f64) -> Result<Self> {
        Self::from_config(
            surface,
            &ViewportConfig {
                max_width,
                max_height,
            },
        )
    }

    /// Creates a closed viewport from a [`ViewportConfig`].
    pub fn from_config(mut surface: S, config: &ViewportConfig) -> Result<Self> {
        let max_size = config.max_size()?;
        // Content box and scaler start at the natural size.
        surface.set_content_size(max_size);
        surface.apply_scale(None);
        Ok(Self {
            surface,
            max_size,
            state: ViewportState::Closed,
            frame: None,
            fit: None,
            close_guard: None,
            after_close: Vec::new(),
        })
    }

    /// Returns the maximum content size.
    #[must_use]
    pub fn max_size(&self) -> Size {
        self.max_size
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> ViewportState {
        self.state
    }

    /// Returns `true` while content is visible.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == ViewportState::Open
    }

    /// Returns the frame created by [`open_with_content`](Self::open_with_content),
    /// if the viewport is open with one.
    #[must_use]
    pub fn content_handle(&self) -> Option<&S::Frame> {
        self.frame.as_ref()
    }

    /// Returns the fit applied by the most recent resize while open.
    #[must_use]
    pub fn content_fit(&self) -> Option<ContentFit> {
        self.fit
    }

    /// Returns the underlying surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the underlying surface mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Refits the content box to the surface's container.
    ///
    /// Does nothing while closed.
    pub fn resize(&mut self) {
        if !self.is_open() {
            return;
        }
        let container = self.surface.container_size();
        let fit = fit_content(container, self.max_size);
        self.surface.set_content_size(fit.displayed);
        self.surface.apply_scale(fit.scale);
        debug!(
            container = ?container,
            displayed = ?fit.displayed,
            scale = ?fit.scale,
            "viewport resized"
        );
        self.fit = Some(fit);
    }

    /// Opens the viewport over content that is already in place.
    pub fn open(&mut self) {
        self.state = ViewportState::Open;
        self.resize();
        self.surface.set_revealed(true);
        debug!("viewport opened");
    }

    /// Opens the viewport with a new embedded frame loading `locator`.
    ///
    /// The new frame replaces any frame from an earlier open once it has been
    /// created. If the surface cannot create it, the viewport is left exactly
    /// as it was, earlier frame included, and
    /// [`ViewportError::ContentLoadFailed`] is returned.
    pub fn open_with_content(&mut self, locator: &str) -> Result<()> {
        let Some(frame) = self.surface.create_frame(locator) else {
            warn!(locator, "surface cannot create content frames");
            return Err(ViewportError::ContentLoadFailed(locator.into()));
        };
        if let Some(previous) = self.frame.replace(frame) {
            self.surface.remove_frame(&previous);
        }
        self.state = ViewportState::Open;
        self.surface.set_revealed(true);
        self.resize();
        debug!(locator, "viewport opened with content");
        Ok(())
    }

    /// Closes the viewport.
    ///
    /// If a close guard is set it is consulted first; when it returns `false`
    /// nothing changes and [`ViewportError::CloseGuardRejected`] is returned.
    /// Otherwise the content is discarded, the curtain hidden, and every
    /// after-close observer called in registration order. Panics raised by an
    /// observer propagate to the caller.
    pub fn close(&mut self) -> Result<()> {
        if let Some(guard) = self.close_guard.as_mut()
            && !guard()
        {
            debug!("viewport close rejected by guard");
            return Err(ViewportError::CloseGuardRejected);
        }

        self.state = ViewportState::Closed;
        self.surface.clear_content();
        self.frame = None;
        self.fit = None;
        self.surface.set_revealed(false);
        debug!(observers = self.after_close.len(), "viewport closed");

        for handler in &mut self.after_close {
            handler();
        }
        Ok(())
    }

    /// Sets the close guard, replacing any previous one.
    ///
    /// The guard returns `true` to let the close proceed.
    pub fn set_close_guard(&mut self, guard: impl FnMut() -> bool + 'static) {
        self.close_guard = Some(Box::new(guard));
    }

    /// Appends an observer that runs after every successful close.
    pub fn add_after_close_handler(&mut self, handler: impl FnMut() + 'static) {
        self.after_close.push(Box::new(handler));
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            state: self.state,
            max_size: self.max_size,
            container_size: self.surface.container_size(),
            fit: self.fit,
            has_content_frame: self.frame.is_some(),
            has_close_guard: self.close_guard.is_some(),
            after_close_handlers: self.after_close.len(),
        }
    }
}

impl<S> fmt::Debug for ScalingOverlayViewport<S>
where
    S: OverlaySurface + fmt::Debug,
    S::Frame: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalingOverlayViewport")
            .field("surface", &self.surface)
            .field("max_size", &self.max_size)
            .field("state", &self.state)
            .field("frame", &self.frame)
            .field("fit", &self.fit)
            .field("close_guard", &self.close_guard.is_some())
            .field("after_close", &self.after_close.len())
            .finish()
    }
}

/// Debug snapshot of a [`ScalingOverlayViewport`] state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportDebugInfo {
    /// Current lifecycle state.
    pub state: ViewportState,
    /// Maximum content size.
    pub max_size: Size,
    /// Container size as reported by the surface right now.
    pub container_size: Size,
    /// Fit applied by the last resize while open.
    pub fit: Option<ContentFit>,
    /// Whether a content frame is active.
    pub has_content_frame: bool,
    /// Whether a close guard is registered.
    pub has_close_guard: bool,
    /// Number of registered after-close observers.
    pub after_close_handlers: usize,
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::{ScalingOverlayViewport, ViewportState};
    use crate::{HeadlessSurface, ViewportError};

    fn viewport(container: Size) -> ScalingOverlayViewport<HeadlessSurface> {
        ScalingOverlayViewport::new(HeadlessSurface::new(container), 1024.0, 768.0).unwrap()
    }

    #[test]
    fn construction_rejects_non_positive_sizes() {
        let err = ScalingOverlayViewport::new(HeadlessSurface::new(Size::ZERO), 0.0, 768.0)
            .unwrap_err();
        assert_eq!(
            err,
            ViewportError::InvalidDimensions {
                width: 0.0,
                height: 768.0
            }
        );
    }

    #[test]
    fn starts_closed_at_natural_size() {
        let vp = viewport(Size::new(800.0, 800.0));
        assert_eq!(vp.state(), ViewportState::Closed);
        assert!(vp.content_handle().is_none());
        assert_eq!(vp.surface().content_size(), Some(Size::new(1024.0, 768.0)));
        assert!(!vp.surface().is_revealed());
    }

    #[test]
    fn resize_is_a_no_op_while_closed() {
        let mut vp = viewport(Size::new(800.0, 800.0));
        vp.resize();
        assert_eq!(vp.content_fit(), None);
        assert_eq!(vp.surface().content_size(), Some(Size::new(1024.0, 768.0)));
    }

    #[test]
    fn open_fits_and_reveals() {
        let mut vp = viewport(Size::new(800.0, 800.0));
        vp.open();
        assert!(vp.is_open());
        assert!(vp.surface().is_revealed());
        assert_eq!(vp.surface().content_size(), Some(Size::new(800.0, 600.0)));
        assert_eq!(vp.surface().scale(), Some(0.781_25));
        // Preloaded content has no frame handle.
        assert!(vp.content_handle().is_none());
    }

    #[test]
    fn resize_follows_container_changes() {
        let mut vp = viewport(Size::new(800.0, 800.0));
        vp.open();
        vp.surface_mut().set_container_size(Size::new(1600.0, 1200.0));
        vp.resize();
        assert_eq!(vp.surface().content_size(), Some(Size::new(1024.0, 768.0)));
        assert_eq!(vp.surface().scale(), None);

        // Idempotent.
        let before = vp.content_fit();
        vp.resize();
        assert_eq!(vp.content_fit(), before);
    }

    #[test]
    fn reopening_with_content_replaces_the_frame() {
        let mut vp = viewport(Size::new(800.0, 800.0));
        vp.open_with_content("a").unwrap();
        vp.open_with_content("b").unwrap();
        assert_eq!(vp.surface().frames().len(), 1);
        assert_eq!(vp.content_handle().map(|f| f.locator()), Some("b"));
    }

    #[test]
    fn debug_info_reports_registrations() {
        let mut vp = viewport(Size::new(800.0, 800.0));
        vp.set_close_guard(|| true);
        vp.add_after_close_handler(|| {});
        vp.add_after_close_handler(|| {});
        vp.open_with_content("lesson").unwrap();

        let info = vp.debug_info();
        assert_eq!(info.state, ViewportState::Open);
        assert!(info.has_content_frame);
        assert!(info.has_close_guard);
        assert_eq!(info.after_close_handlers, 2);
        assert_eq!(info.container_size, Size::new(800.0, 800.0));
    }
}
