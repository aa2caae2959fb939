// Copyright 2025 the Lesson Viewport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::Deserialize;

use crate::error::Result;

/// One `[id, ratio]` pair from the mastery endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "(String, Option<f64>)")]
pub struct MasteryEntry {
    /// Topic identifier, such as `geometry/lines_rays`.
    pub id: String,
    /// Mastery ratio in `[0, 1]`; `None` when the endpoint sent `null`.
    pub mastery: Option<f64>,
}

impl From<(String, Option<f64>)> for MasteryEntry {
    fn from((id, mastery): (String, Option<f64>)) -> Self {
        Self { id, mastery }
    }
}

/// Parses a mastery endpoint body: a JSON array of `[id, ratio]` pairs.
pub fn parse_response(body: &str) -> Result<Vec<MasteryEntry>> {
    Ok(serde_json::from_str(body)?)
}
