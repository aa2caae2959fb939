// Copyright 2025 the Lesson Viewport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::error::Result;
use crate::host::{HandlerAction, HostRuntime, Transport};

/// Which player a lesson block points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerType {
    /// A regular lesson.
    #[default]
    Module,
    /// An adaptive assessment.
    Review,
}

/// Author settings submitted from the studio view.
///
/// Only `module_id` is always sent; absent fields are left out of the JSON
/// body so the server keeps its current values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StudioSettings {
    /// Module identifier, such as `geometry/lines_rays`.
    pub module_id: String,
    /// Human-readable module title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_title: Option<String>,
    /// Description shown under the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_description: Option<String>,
    /// Lesson or assessment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_type: Option<PlayerType>,
    /// Key used to verify signed data from the content server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_key: Option<String>,
    /// Base URL the content frames point to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Partner identifier sent with content requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<String>,
}

impl StudioSettings {
    /// Settings form of the lesson editor: a module and its player type.
    #[must_use]
    pub fn lesson(module_id: impl Into<String>, player_type: PlayerType) -> Self {
        Self {
            module_id: module_id.into(),
            player_type: Some(player_type),
            ..Self::default()
        }
    }
}

/// Author-facing settings editor of a lesson block.
pub struct StudioView<H, T> {
    host: Rc<H>,
    transport: Rc<T>,
}

impl<H: HostRuntime, T: Transport> StudioView<H, T> {
    /// Creates a studio view.
    #[must_use]
    pub fn new(host: Rc<H>, transport: Rc<T>) -> Self {
        Self { host, transport }
    }

    /// Submits `settings` to the `studio_submit` action.
    ///
    /// Call [`Self::on_save_complete`] once the request finishes.
    pub fn save(&self, settings: &StudioSettings) -> Result<()> {
        let url = self.host.handler_url(HandlerAction::StudioSubmit);
        let body = serde_json::to_string(settings)?;
        debug!(module_id = %settings.module_id, "submitting studio settings");
        self.transport.post_json(&url, body)?;
        Ok(())
    }

    /// Reloads the host page so it picks up the saved settings.
    pub fn on_save_complete(&self) {
        self.host.reload();
    }

    /// Abandons editing.
    pub fn cancel(&self) {
        self.host.notify("cancel", &json!({}));
    }
}

impl<H, T> core::fmt::Debug for StudioView<H, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StudioView").finish_non_exhaustive()
    }
}
