// Copyright 2025 the Lesson Viewport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde_json::Value;

use crate::error::NetworkError;

/// Server actions a view submits data to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandlerAction {
    /// Receives grade messages posted by lesson content.
    HandleGrade,
    /// Receives author settings from the studio view.
    StudioSubmit,
}

impl HandlerAction {
    /// Action name as the host knows it.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HandleGrade => "handle_grade",
            Self::StudioSubmit => "studio_submit",
        }
    }
}

/// Capabilities provided by the hosting learning-management runtime.
pub trait HostRuntime {
    /// Returns the endpoint for `action` on the block this view belongs to.
    fn handler_url(&self, action: HandlerAction) -> String;

    /// Informs the host of a lifecycle event, such as `cancel`.
    fn notify(&self, event: &str, payload: &Value);

    /// Reloads the host page. Hosts that cannot reload ignore this.
    fn reload(&self) {}
}

/// Fire-and-forget HTTP requests.
///
/// Implementations return once the request is dispatched. There is no retry,
/// no timeout and no cancellation; an `Err` only means the request could not
/// be sent at all.
pub trait Transport {
    /// `POST`s a JSON body.
    fn post_json(&self, url: &str, body: String) -> Result<(), NetworkError>;

    /// `GET`s `url` with credentials. The response is delivered to the view
    /// together with `seq`.
    fn get_with_credentials(&self, url: &str, seq: u64) -> Result<(), NetworkError>;
}
