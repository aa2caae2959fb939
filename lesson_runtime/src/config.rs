// Copyright 2025 the Lesson Viewport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use lesson_mastery::MasteryConfig;
use lesson_viewport::ViewportConfig;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Settings for a [`crate::ReviewStudentView`].
///
/// ```toml
/// [viewport]
/// max_width = 1024
/// max_height = 768
///
/// [mastery]
/// url = "https://example.org/mastery"
/// full_credit = 0.7
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewConfig {
    /// Maximum content size of the viewport.
    #[serde(default)]
    pub viewport: ViewportConfig,
    /// Mastery endpoint and scale.
    pub mastery: MasteryConfig,
}

impl ReviewConfig {
    /// Parses a TOML document.
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }
}
