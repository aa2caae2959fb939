// Copyright 2025 the Lesson Viewport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::rc::Rc;

use lesson_mastery::{MasteryConfig, MasteryDisplay, MasteryPoller};
use lesson_viewport::{OverlaySurface, ScalingOverlayViewport};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{NetworkError, Result};
use crate::host::{HandlerAction, HostRuntime, Transport};

/// A viewport shared between a view and the platform's event listeners.
pub type SharedViewport<S> = Rc<RefCell<ScalingOverlayViewport<S>>>;

/// Student-facing view of a review block.
///
/// Launching opens lesson content in the viewport. While that content is
/// open, the messages it posts are forwarded to the `handle_grade` action.
/// The mastery bar is fetched when the view is created and again after every
/// close of the viewport.
pub struct ReviewStudentView<S: OverlaySurface, H, T> {
    viewport: SharedViewport<S>,
    host: Rc<H>,
    transport: Rc<T>,
    poller: Rc<RefCell<MasteryPoller>>,
    display: Option<MasteryDisplay>,
}

impl<S, H, T> ReviewStudentView<S, H, T>
where
    S: OverlaySurface,
    S::Frame: PartialEq,
    H: HostRuntime,
    T: Transport + 'static,
{
    /// Wires a view to `viewport` and issues the first mastery request.
    ///
    /// A failure to dispatch that first request is logged, not returned; the
    /// bar simply keeps its initial state.
    pub fn new(
        viewport: SharedViewport<S>,
        host: Rc<H>,
        transport: Rc<T>,
        mastery: &MasteryConfig,
    ) -> Self {
        let poller = Rc::new(RefCell::new(MasteryPoller::new(mastery)));
        {
            let poller = Rc::clone(&poller);
            let transport = Rc::clone(&transport);
            viewport
                .borrow_mut()
                .add_after_close_handler(move || request_mastery(&poller, &*transport));
        }
        request_mastery(&poller, &*transport);
        Self {
            viewport,
            host,
            transport,
            poller,
            display: None,
        }
    }

    /// Returns the shared viewport.
    #[must_use]
    pub fn viewport(&self) -> &SharedViewport<S> {
        &self.viewport
    }

    /// Opens the lesson content at `locator` in the viewport.
    pub fn launch(&self, locator: &str) -> Result<()> {
        self.viewport.borrow_mut().open_with_content(locator)?;
        Ok(())
    }

    /// Handles a message posted by an embedded frame.
    ///
    /// The payload is forwarded verbatim to `handle_grade` only when `source`
    /// is the viewport's active content frame. Returns whether it was
    /// forwarded.
    pub fn on_message(&self, source: &S::Frame, data: &Value) -> Result<bool> {
        let from_content = self.viewport.borrow().content_handle() == Some(source);
        if !from_content {
            debug!("ignoring message from a foreign frame");
            return Ok(false);
        }
        let url = self.host.handler_url(HandlerAction::HandleGrade);
        let body = serde_json::to_string(data)?;
        self.transport.post_json(&url, body)?;
        Ok(true)
    }

    /// Issues a new mastery request, superseding any in flight.
    ///
    /// If the request cannot be sent, the one in flight before it stays
    /// current.
    pub fn refresh_mastery(&self) -> Result<()> {
        send_mastery_request(&self.poller, &*self.transport)?;
        Ok(())
    }

    /// Handles the response to mastery request `seq`.
    ///
    /// Returns the new display when the bar should change.
    pub fn on_mastery_response(
        &mut self,
        seq: u64,
        status: u16,
        body: &str,
    ) -> Result<Option<MasteryDisplay>> {
        let display = self.poller.borrow_mut().complete(seq, status, body)?;
        if display.is_some() {
            self.display = display;
        }
        Ok(display)
    }

    /// Returns what the mastery bar currently shows, if anything has been
    /// rendered yet.
    #[must_use]
    pub fn mastery_display(&self) -> Option<MasteryDisplay> {
        self.display
    }
}

fn send_mastery_request<T: Transport>(
    poller: &RefCell<MasteryPoller>,
    transport: &T,
) -> core::result::Result<(), NetworkError> {
    let request = poller.borrow_mut().begin();
    transport
        .get_with_credentials(&request.url, request.seq)
        .inspect_err(|_| poller.borrow_mut().abandon(request.seq))
}

fn request_mastery<T: Transport>(poller: &RefCell<MasteryPoller>, transport: &T) {
    if let Err(NetworkError(reason)) = send_mastery_request(poller, transport) {
        warn!(%reason, "mastery request not sent");
    }
}

impl<S: OverlaySurface, H, T> core::fmt::Debug for ReviewStudentView<S, H, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReviewStudentView")
            .field("open", &self.viewport.try_borrow().map(|vp| vp.is_open()).ok())
            .field("poller", &self.poller.try_borrow().ok())
            .field("display", &self.display)
            .finish_non_exhaustive()
    }
}
