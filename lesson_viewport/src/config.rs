// Copyright 2025 the Lesson Viewport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewportError};

/// Maximum content size for a viewport, in pixels.
///
/// The content is authored at this size and never displayed larger; its
/// aspect ratio is the one the viewport preserves.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportConfig {
    /// Maximum content width.
    pub max_width: f64,
    /// Maximum content height.
    pub max_height: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            max_width: 1024.0,
            max_height: 768.0,
        }
    }
}

impl ViewportConfig {
    /// Returns the maximum size, rejecting non-positive or non-finite values.
    pub fn max_size(&self) -> Result<Size> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(self.max_width) && valid(self.max_height) {
            Ok(Size::new(self.max_width, self.max_height))
        } else {
            Err(ViewportError::InvalidDimensions {
                width: self.max_width,
                height: self.max_height,
            })
        }
    }
}
