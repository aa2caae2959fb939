// Copyright 2025 the Lesson Viewport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Size;

use crate::class_list::{add_class, has_class, remove_class};
use crate::classes;
use crate::surface::OverlaySurface;

/// Handle to a frame created by a [`HeadlessSurface`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HeadlessFrame {
    id: u64,
    locator: String,
}

impl HeadlessFrame {
    /// Sequential identifier, unique per surface.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Locator the frame was created for.
    #[must_use]
    pub fn locator(&self) -> &str {
        &self.locator
    }
}

/// In-memory [`OverlaySurface`] that records what a viewport applied to it.
///
/// Useful for tests and for hosts that render the overlay themselves.
#[derive(Clone, Debug)]
pub struct HeadlessSurface {
    container: Size,
    content_size: Option<Size>,
    scale: Option<f64>,
    curtain_class: Option<String>,
    frames: Vec<HeadlessFrame>,
    next_frame_id: u64,
    frames_supported: bool,
}

impl HeadlessSurface {
    /// Creates a surface whose curtain has the given size.
    #[must_use]
    pub fn new(container: Size) -> Self {
        Self {
            container,
            content_size: None,
            scale: None,
            curtain_class: Some(classes::CURTAIN.into()),
            frames: Vec::new(),
            next_frame_id: 0,
            frames_supported: true,
        }
    }

    /// Creates a surface that cannot create frames.
    #[must_use]
    pub fn without_frames(container: Size) -> Self {
        Self {
            frames_supported: false,
            ..Self::new(container)
        }
    }

    /// Turns frame creation on or off from now on.
    pub fn set_frames_supported(&mut self, supported: bool) {
        self.frames_supported = supported;
    }

    /// Simulates a window resize. The viewport must still be told to resize.
    pub fn set_container_size(&mut self, size: Size) {
        self.container = size;
    }

    /// Last content box size applied, if any.
    #[must_use]
    pub fn content_size(&self) -> Option<Size> {
        self.content_size
    }

    /// Last scale applied.
    #[must_use]
    pub fn scale(&self) -> Option<f64> {
        self.scale
    }

    /// Current class attribute of the curtain.
    #[must_use]
    pub fn curtain_class(&self) -> Option<&str> {
        self.curtain_class.as_deref()
    }

    /// Returns `true` while the curtain carries the `open` class.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        has_class(self.curtain_class(), classes::OPEN)
    }

    /// Frames currently inside the scaling element.
    #[must_use]
    pub fn frames(&self) -> &[HeadlessFrame] {
        &self.frames
    }
}

impl OverlaySurface for HeadlessSurface {
    type Frame = HeadlessFrame;

    fn container_size(&self) -> Size {
        self.container
    }

    fn set_content_size(&mut self, size: Size) {
        self.content_size = Some(size);
    }

    fn apply_scale(&mut self, scale: Option<f64>) {
        self.scale = scale;
    }

    fn set_revealed(&mut self, revealed: bool) {
        let current = self.curtain_class.as_deref();
        self.curtain_class = if revealed {
            Some(add_class(current, classes::OPEN))
        } else {
            remove_class(current, classes::OPEN)
        };
    }

    fn create_frame(&mut self, locator: &str) -> Option<HeadlessFrame> {
        if !self.frames_supported {
            return None;
        }
        let frame = HeadlessFrame {
            id: self.next_frame_id,
            locator: locator.into(),
        };
        self.next_frame_id += 1;
        self.frames.push(frame.clone());
        Some(frame)
    }

    fn remove_frame(&mut self, frame: &HeadlessFrame) {
        self.frames.retain(|f| f.id != frame.id);
    }

    fn clear_content(&mut self) {
        self.frames.clear();
    }
}
