// Copyright 2025 the Lesson Viewport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS values written by the DOM backend.

/// A pixel length, such as `800px`.
#[must_use]
pub fn px(value: f64) -> String {
    format!("{value}px")
}

/// The `transform` value for a uniform scale; empty when there is none.
#[must_use]
pub fn scale_transform(scale: Option<f64>) -> String {
    scale.map_or_else(String::new, |s| format!("scale({s})"))
}

/// `transform-origin` anchoring the scale at the top-left corner.
pub const TOP_LEFT_ORIGIN: &str = "0 0";
