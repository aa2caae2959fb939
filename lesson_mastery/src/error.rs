// Copyright 2025 the Lesson Viewport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Errors raised while reading mastery responses.
#[derive(Error, Debug)]
pub enum MasteryError {
    /// The body was not a JSON array of `[id, ratio]` pairs.
    #[error("Malformed mastery response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// The body was a well-formed but empty array.
    #[error("Empty mastery response")]
    EmptyResponse,
}

/// Result alias for mastery operations.
pub type Result<T> = core::result::Result<T, MasteryError>;
