// Copyright 2025 the Lesson Viewport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lesson Runtime: wiring between a learning-management host and the lesson
//! viewport.
//!
//! The host provides two capabilities, modeled as traits:
//! - [`HostRuntime`]: resolves handler URLs for named server actions and
//!   receives lifecycle notifications.
//! - [`Transport`]: sends fire-and-forget HTTP requests. Responses, where the
//!   view cares about them, are handed back through the view's `on_*`
//!   methods.
//!
//! On top of those, this crate provides the two views a lesson block shows:
//! - [`ReviewStudentView`]: launches lesson content in the viewport, forwards
//!   grade messages posted by that content, and keeps the mastery bar fresh.
//! - [`StudioView`]: submits author settings and cancels editing.
//!
//! Everything is single-threaded; shared state uses `Rc<RefCell<_>>`.

mod config;
mod error;
mod host;
mod review;
mod studio;

pub use config::ReviewConfig;
pub use error::{NetworkError, Result, RuntimeError};
pub use host::{HandlerAction, HostRuntime, Transport};
pub use review::{ReviewStudentView, SharedViewport};
pub use studio::{PlayerType, StudioSettings, StudioView};
