// Copyright 2025 the Lesson Viewport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Size;
use lesson_viewport::class_list::{add_class, remove_class};
use lesson_viewport::{OverlaySurface, ScalingOverlayViewport, ViewportConfig, classes};
use tracing::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Event, EventTarget, HtmlElement, HtmlIFrameElement, MessageEvent, Node, Window,
};

use crate::style::{TOP_LEFT_ORIGIN, px, scale_transform};

/// A DOM-backed viewport shared with the listeners that drive it.
pub type SharedDomViewport = Rc<RefCell<ScalingOverlayViewport<DomSurface>>>;

fn create_element(
    document: &Document,
    tag: &str,
    parent: &Node,
    class: Option<&str>,
) -> Result<HtmlElement, JsValue> {
    let element = document.create_element(tag)?;
    if let Some(class) = class {
        element.set_attribute("class", class)?;
    }
    parent.append_child(&element)?;
    element.dyn_into::<HtmlElement>().map_err(JsValue::from)
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        warn!(?err, property, "failed to set style property");
    }
}

/// Appends a full-height inline-block span so that inline-block content can
/// be centered vertically with `vertical-align: middle`.
fn add_height_fix_span(document: &Document, container: &Node) -> Result<(), JsValue> {
    let fix = create_element(document, "span", container, None)?;
    set_style(&fix, "height", "100%");
    set_style(&fix, "display", "inline-block");
    set_style(&fix, "vertical-align", "middle");
    set_style(&fix, "font-size", "0");
    Ok(())
}

/// Overlay elements inserted into the document.
#[derive(Debug)]
pub struct DomSurface {
    document: Document,
    curtain: HtmlElement,
    content: HtmlElement,
    scaler: HtmlElement,
}

impl OverlaySurface for DomSurface {
    type Frame = HtmlIFrameElement;

    fn container_size(&self) -> Size {
        Size::new(
            f64::from(self.curtain.offset_width()),
            f64::from(self.curtain.offset_height()),
        )
    }

    fn set_content_size(&mut self, size: Size) {
        set_style(&self.content, "width", &px(size.width));
        set_style(&self.content, "height", &px(size.height));
    }

    fn apply_scale(&mut self, scale: Option<f64>) {
        set_style(&self.scaler, "transform", &scale_transform(scale));
        set_style(&self.scaler, "transform-origin", TOP_LEFT_ORIGIN);
    }

    fn set_revealed(&mut self, revealed: bool) {
        let current = self.curtain.get_attribute("class");
        let updated = if revealed {
            Some(add_class(current.as_deref(), classes::OPEN))
        } else {
            remove_class(current.as_deref(), classes::OPEN)
        };
        if let Some(updated) = updated
            && let Err(err) = self.curtain.set_attribute("class", &updated)
        {
            warn!(?err, "failed to update curtain class");
        }
    }

    fn create_frame(&mut self, locator: &str) -> Option<HtmlIFrameElement> {
        let frame = create_element(
            &self.document,
            "iframe",
            self.scaler.as_ref(),
            Some(classes::FRAME),
        )
        .and_then(|el| el.dyn_into::<HtmlIFrameElement>().map_err(JsValue::from));
        let frame = match frame {
            Ok(frame) => frame,
            Err(err) => {
                warn!(?err, "failed to create content frame");
                return None;
            }
        };
        frame.set_attribute("tabindex", "0").ok()?;
        frame.set_attribute("scrolling", "no").ok()?;
        frame.set_src(locator);
        if let Err(err) = frame.focus() {
            debug!(?err, "content frame did not take focus");
        }
        Some(frame)
    }

    fn remove_frame(&mut self, frame: &HtmlIFrameElement) {
        frame.remove();
    }

    fn clear_content(&mut self) {
        self.scaler.set_inner_html("");
    }
}

/// An event listener that is removed from its target when dropped.
pub struct EventSubscription {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventSubscription {
    /// Adds `handler` as a listener for `event` on `target`.
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            warn!(?err, event = self.event, "failed to remove event listener");
        }
    }
}

impl fmt::Debug for EventSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventSubscription")
            .field("event", &self.event)
            .finish_non_exhaustive()
    }
}

/// A viewport inserted into the page, together with its listeners.
#[derive(Debug)]
pub struct WebViewport {
    viewport: SharedDomViewport,
    window: Window,
    container: HtmlElement,
    subscriptions: Vec<EventSubscription>,
}

impl WebViewport {
    /// Returns the shared viewport.
    #[must_use]
    pub fn viewport(&self) -> &SharedDomViewport {
        &self.viewport
    }

    /// Calls `handler` for every window message posted by the active content
    /// frame, with the message data converted to JSON.
    ///
    /// Messages from any other source are ignored. The listener lives as long
    /// as this [`WebViewport`].
    pub fn on_content_message(
        &mut self,
        mut handler: impl FnMut(&HtmlIFrameElement, serde_json::Value) + 'static,
    ) -> Result<(), JsValue> {
        let weak = Rc::downgrade(&self.viewport);
        let subscription = EventSubscription::new(self.window.as_ref(), "message", move |event| {
            let Ok(event) = event.dyn_into::<MessageEvent>() else {
                return;
            };
            let Some(viewport) = weak.upgrade() else {
                return;
            };
            // Release the borrow before calling out.
            let frame = match viewport.try_borrow() {
                Ok(viewport) => viewport.content_handle().cloned(),
                Err(_) => return,
            };
            let Some(frame) = frame else {
                return;
            };
            let from_frame = match (event.source(), frame.content_window()) {
                (Some(source), Some(window)) => JsValue::from(source) == JsValue::from(window),
                _ => false,
            };
            if !from_frame {
                return;
            }
            match message_json(&event.data()) {
                Ok(data) => handler(&frame, data),
                Err(err) => warn!(?err, "dropping non-JSON content message"),
            }
        })?;
        self.subscriptions.push(subscription);
        Ok(())
    }

    /// Removes the overlay from the document and drops every listener.
    pub fn remove(self) {
        self.container.remove();
    }
}

fn message_json(data: &JsValue) -> Result<serde_json::Value, JsValue> {
    if data.is_undefined() {
        return Ok(serde_json::Value::Null);
    }
    let text = String::from(js_sys::JSON::stringify(data)?);
    serde_json::from_str(&text).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Inserts a new viewport under the document body.
///
/// The viewport starts closed. Resizing the window refits it while open, and
/// the close button closes it (subject to its close guard).
pub fn insert(config: &ViewportConfig) -> Result<WebViewport, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no document body"))?;

    let container = create_element(&document, "div", body.as_ref(), Some(classes::CONTAINER))?;
    let curtain = create_element(&document, "div", container.as_ref(), Some(classes::CURTAIN))?;
    let content = create_element(&document, "div", curtain.as_ref(), Some(classes::CONTENT))?;
    let close_button =
        create_element(&document, "a", curtain.as_ref(), Some(classes::CLOSE_BUTTON))?;
    close_button.set_attribute("href", "#")?;
    let scaler = create_element(&document, "div", content.as_ref(), Some(classes::SCALER))?;
    set_style(&scaler, "width", &px(config.max_width));
    set_style(&scaler, "height", &px(config.max_height));
    add_height_fix_span(&document, curtain.as_ref())?;

    let surface = DomSurface {
        document,
        curtain,
        content,
        scaler,
    };
    let viewport = ScalingOverlayViewport::from_config(surface, config)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    let viewport = Rc::new(RefCell::new(viewport));

    let resize = {
        let weak = Rc::downgrade(&viewport);
        EventSubscription::new(window.as_ref(), "resize", move |_| {
            let Some(viewport) = weak.upgrade() else {
                return;
            };
            match viewport.try_borrow_mut() {
                Ok(mut viewport) => viewport.resize(),
                Err(_) => warn!("viewport busy during resize"),
            }
        })?
    };
    let close = {
        let weak = Rc::downgrade(&viewport);
        EventSubscription::new(close_button.as_ref(), "click", move |event| {
            event.prevent_default();
            let Some(viewport) = weak.upgrade() else {
                return;
            };
            let Ok(mut viewport) = viewport.try_borrow_mut() else {
                warn!("viewport busy during close");
                return;
            };
            if let Err(err) = viewport.close() {
                debug!(%err, "close button ignored");
            }
        })?
    };

    Ok(WebViewport {
        viewport,
        window,
        container,
        subscriptions: vec![resize, close],
    })
}
