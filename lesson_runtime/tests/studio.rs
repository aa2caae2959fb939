// Copyright 2025 the Lesson Viewport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `StudioView`: settings submission and cancellation.

mod common;

use std::rc::Rc;

use common::{FakeHost, FakeTransport};
use lesson_runtime::{PlayerType, StudioSettings, StudioView};
use serde_json::json;

fn setup() -> (StudioView<FakeHost, FakeTransport>, Rc<FakeHost>, Rc<FakeTransport>) {
    let host = Rc::new(FakeHost::default());
    let transport = Rc::new(FakeTransport::default());
    (
        StudioView::new(Rc::clone(&host), Rc::clone(&transport)),
        host,
        transport,
    )
}

#[test]
fn save_posts_settings_to_studio_submit() {
    let (view, host, transport) = setup();
    let settings = StudioSettings {
        module_title: Some("Lines and rays".into()),
        ..StudioSettings::lesson("geometry/lines_rays", PlayerType::Module)
    };
    view.save(&settings).unwrap();

    let posts = transport.posts.borrow();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].0, "/handler/studio_submit");
    let body: serde_json::Value = serde_json::from_str(&posts[0].1).unwrap();
    assert_eq!(
        body,
        json!({
            "module_id": "geometry/lines_rays",
            "module_title": "Lines and rays",
            "player_type": "module",
        })
    );
    // Reload waits for the request to complete.
    assert_eq!(host.reloads.get(), 0);
    view.on_save_complete();
    assert_eq!(host.reloads.get(), 1);
}

#[test]
fn cancel_notifies_the_host() {
    let (view, host, transport) = setup();
    view.cancel();
    assert_eq!(
        *host.notifications.borrow(),
        [("cancel".to_string(), json!({}))]
    );
    assert!(transport.posts.borrow().is_empty());
}
