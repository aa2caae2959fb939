// Copyright 2025 the Lesson Viewport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lesson Mastery: progress display for a learner's mastery of a topic.
//!
//! A mastery score is a ratio in `[0, 1]` reported by a remote endpoint.
//! Reaching the full-credit threshold (0.7 by default) counts as complete, so
//! the score is rescaled by that threshold before a display bucket is chosen.
//!
//! - [`MasteryScale`] maps a score to a [`MasteryDisplay`]: a label, a fill
//!   color, and how far the bar's filler stops short of the right edge.
//! - [`parse_response`] reads the endpoint's `[[id, ratio], ...]` body.
//! - [`MasteryPoller`] numbers requests and drops responses that were
//!   overtaken by a newer request.
//!
//! ```rust
//! use lesson_mastery::{MasteryBucket, MasteryScale};
//!
//! let display = MasteryScale::default().display(0.7);
//! assert_eq!(display.bucket, MasteryBucket::Complete);
//! assert_eq!(display.label(), "Complete!");
//! assert_eq!(display.fill_css(), "#6eb535");
//! assert_eq!(display.right_css(), "0%");
//! ```

mod config;
mod error;
mod indicator;
mod poller;
mod response;

pub use config::MasteryConfig;
pub use error::{MasteryError, Result};
pub use indicator::{MasteryBucket, MasteryDisplay, MasteryScale};
pub use poller::{MasteryPoller, MasteryRequest};
pub use response::{MasteryEntry, parse_response};
