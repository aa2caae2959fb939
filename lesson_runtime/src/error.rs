// Copyright 2025 the Lesson Viewport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use lesson_mastery::MasteryError;
use lesson_viewport::ViewportError;
use thiserror::Error;

/// A request could not be dispatched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Network error: {0}")]
pub struct NetworkError(pub String);

/// Errors raised by the host wiring.
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Viewport lifecycle error.
    #[error(transparent)]
    Viewport(#[from] ViewportError),

    /// Mastery response error.
    #[error(transparent)]
    Mastery(#[from] MasteryError),

    /// Request dispatch failed. Requests are never retried.
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// A payload could not be encoded as JSON.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Configuration could not be parsed.
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result alias for runtime operations.
pub type Result<T> = core::result::Result<T, RuntimeError>;
