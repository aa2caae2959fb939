// Copyright 2025 the Lesson Viewport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording fakes for the host capabilities.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use std::cell::{Cell, RefCell};

use lesson_runtime::{HandlerAction, HostRuntime, NetworkError, Transport};
use serde_json::Value;

#[derive(Debug, Default)]
pub struct FakeHost {
    pub notifications: RefCell<Vec<(String, Value)>>,
    pub reloads: Cell<u32>,
}

impl HostRuntime for FakeHost {
    fn handler_url(&self, action: HandlerAction) -> String {
        format!("/handler/{}", action.as_str())
    }

    fn notify(&self, event: &str, payload: &Value) {
        self.notifications
            .borrow_mut()
            .push((event.into(), payload.clone()));
    }

    fn reload(&self) {
        self.reloads.set(self.reloads.get() + 1);
    }
}

#[derive(Debug, Default)]
pub struct FakeTransport {
    pub posts: RefCell<Vec<(String, String)>>,
    pub gets: RefCell<Vec<(String, u64)>>,
    pub offline: Cell<bool>,
}

impl FakeTransport {
    fn check(&self) -> Result<(), NetworkError> {
        if self.offline.get() {
            Err(NetworkError("offline".into()))
        } else {
            Ok(())
        }
    }

    pub fn last_get_seq(&self) -> u64 {
        self.gets.borrow().last().map(|(_, seq)| *seq).unwrap()
    }
}

impl Transport for FakeTransport {
    fn post_json(&self, url: &str, body: String) -> Result<(), NetworkError> {
        self.check()?;
        self.posts.borrow_mut().push((url.into(), body));
        Ok(())
    }

    fn get_with_credentials(&self, url: &str, seq: u64) -> Result<(), NetworkError> {
        self.check()?;
        self.gets.borrow_mut().push((url.into(), seq));
        Ok(())
    }
}
