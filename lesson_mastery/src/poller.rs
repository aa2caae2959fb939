// Copyright 2025 the Lesson Viewport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tracing::debug;

use crate::config::MasteryConfig;
use crate::error::{MasteryError, Result};
use crate::indicator::{MasteryDisplay, MasteryScale};
use crate::response::parse_response;

/// A mastery fetch the caller should perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MasteryRequest {
    /// Sequence number to hand back to [`MasteryPoller::complete`].
    pub seq: u64,
    /// Endpoint to `GET`, with credentials.
    pub url: String,
}

/// Issues mastery requests and turns their responses into displays.
///
/// Requests are numbered from 1. Only the response to the most recently
/// issued request is rendered; anything older arriving later is dropped, so a
/// slow early response can never overwrite a fresher one.
#[derive(Clone, Debug)]
pub struct MasteryPoller {
    url: String,
    scale: MasteryScale,
    issued: u64,
}

impl MasteryPoller {
    /// Creates a poller for the configured endpoint.
    #[must_use]
    pub fn new(config: &MasteryConfig) -> Self {
        Self {
            url: config.url.clone(),
            scale: config.scale(),
            issued: 0,
        }
    }

    /// Returns the scale used to build displays.
    #[must_use]
    pub fn scale(&self) -> MasteryScale {
        self.scale
    }

    /// Issues a new request, superseding every earlier one.
    pub fn begin(&mut self) -> MasteryRequest {
        self.issued += 1;
        debug!(seq = self.issued, url = %self.url, "mastery request issued");
        MasteryRequest {
            seq: self.issued,
            url: self.url.clone(),
        }
    }

    /// Withdraws request `seq` after it could not be sent.
    ///
    /// If `seq` is the latest request, the one issued before it becomes
    /// current again, so its response is still rendered when it arrives.
    /// Older or unknown sequence numbers are ignored.
    pub fn abandon(&mut self, seq: u64) {
        if seq != 0 && seq == self.issued {
            self.issued -= 1;
            debug!(seq, "mastery request abandoned");
        }
    }

    /// Returns `true` if `seq` is the most recently issued request.
    #[must_use]
    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.issued
    }

    /// Handles the response to request `seq`.
    ///
    /// Returns `Ok(None)` when the response is stale or the status is not
    /// `200`; the bar should be left untouched in both cases. The first pair
    /// in the body carries the score.
    pub fn complete(
        &mut self,
        seq: u64,
        status: u16,
        body: &str,
    ) -> Result<Option<MasteryDisplay>> {
        if !self.is_current(seq) {
            debug!(seq, latest = self.issued, "dropping stale mastery response");
            return Ok(None);
        }
        if status != 200 {
            debug!(seq, status, "mastery request failed");
            return Ok(None);
        }
        let entries = parse_response(body)?;
        let first = entries.first().ok_or(MasteryError::EmptyResponse)?;
        let shown = self.scale.display(first.mastery.unwrap_or(f64::NAN));
        debug!(seq, id = %first.id, bucket = ?shown.bucket, "mastery updated");
        Ok(Some(shown))
    }
}

#[cfg(test)]
mod tests {
    use super::MasteryPoller;
    use crate::{MasteryBucket, MasteryConfig, MasteryError};

    fn poller() -> MasteryPoller {
        MasteryPoller::new(&MasteryConfig {
            url: "https://example.org/mastery".into(),
            full_credit: 0.7,
        })
    }

    #[test]
    fn renders_current_response() {
        let mut p = poller();
        let req = p.begin();
        assert_eq!(req.seq, 1);
        assert_eq!(req.url, "https://example.org/mastery");

        let display = p.complete(req.seq, 200, r#"[["a", 0.7]]"#).unwrap().unwrap();
        assert_eq!(display.bucket, MasteryBucket::Complete);
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut p = poller();
        let old = p.begin();
        let new = p.begin();

        let fresh = p.complete(new.seq, 200, r#"[["a", 0.5]]"#).unwrap();
        assert_eq!(fresh.map(|d| d.bucket), Some(MasteryBucket::AlmostThere));

        // The older request resolves last; it must not overwrite the bar.
        assert!(p.complete(old.seq, 200, r#"[["a", 0.0]]"#).unwrap().is_none());
    }

    #[test]
    fn abandoned_request_keeps_the_earlier_one_current() {
        let mut p = poller();
        let sent = p.begin();
        let unsent = p.begin();
        p.abandon(unsent.seq);
        assert!(p.is_current(sent.seq));

        let display = p.complete(sent.seq, 200, r#"[["a", 0.5]]"#).unwrap();
        assert_eq!(display.map(|d| d.bucket), Some(MasteryBucket::AlmostThere));

        // A later request reuses the withdrawn number.
        assert_eq!(p.begin().seq, unsent.seq);
    }

    #[test]
    fn abandoning_a_superseded_request_changes_nothing() {
        let mut p = poller();
        let old = p.begin();
        let new = p.begin();
        p.abandon(old.seq);
        assert!(p.is_current(new.seq));
        assert!(!p.is_current(old.seq));
    }

    #[test]
    fn non_ok_status_suppresses_update() {
        let mut p = poller();
        let req = p.begin();
        assert!(p.complete(req.seq, 500, "oops").unwrap().is_none());
    }

    #[test]
    fn empty_and_null_bodies() {
        let mut p = poller();
        let req = p.begin();
        assert!(matches!(
            p.complete(req.seq, 200, "[]"),
            Err(MasteryError::EmptyResponse)
        ));

        let display = p.complete(req.seq, 200, r#"[["a", null]]"#).unwrap().unwrap();
        assert_eq!(display.bucket, MasteryBucket::NotStarted);
    }
}
