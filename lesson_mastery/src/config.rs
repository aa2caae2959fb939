// Copyright 2025 the Lesson Viewport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::{Deserialize, Serialize};

use crate::indicator::MasteryScale;

/// Where to fetch mastery from and how to scale it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MasteryConfig {
    /// Endpoint returning the learner's mastery pairs.
    pub url: String,
    /// Mastery ratio that earns full credit.
    #[serde(default = "default_full_credit")]
    pub full_credit: f64,
}

fn default_full_credit() -> f64 {
    MasteryScale::DEFAULT_FULL_CREDIT
}

impl MasteryConfig {
    /// Returns the scale described by this config.
    #[must_use]
    pub fn scale(&self) -> MasteryScale {
        MasteryScale::new(self.full_credit)
    }
}
