// Copyright 2025 the Lesson Viewport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use thiserror::Error;

/// Errors raised by [`crate::ScalingOverlayViewport`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewportError {
    /// The maximum content size was not strictly positive and finite.
    #[error("Invalid viewport dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested maximum width.
        width: f64,
        /// Requested maximum height.
        height: f64,
    },

    /// The surface could not create an embedded frame for the locator.
    #[error("Content load failed: {0}")]
    ContentLoadFailed(String),

    /// The registered close guard vetoed the close.
    #[error("Close rejected by close guard")]
    CloseGuardRejected,
}

/// Result alias for viewport operations.
pub type Result<T> = core::result::Result<T, ViewportError>;
