//! Small helpers over web_sys for querying, styling and event wiring.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

use crate::error::PageError;
use crate::reveal::Mutation;

pub fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or_else(|| PageError::missing_element("window"))
}

pub fn document() -> Result<Document, PageError> {
    window()?
        .document()
        .ok_or_else(|| PageError::missing_element("document"))
}

pub fn body(document: &Document) -> Result<HtmlElement, PageError> {
    document
        .body()
        .ok_or_else(|| PageError::missing_element("body"))
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// All elements in the document matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    match document.query_selector_all(selector) {
        Ok(list) => elements(&list),
        Err(e) => {
            log::warn!("Bad selector {:?}: {:?}", selector, e);
            Vec::new()
        }
    }
}

/// First descendant of `root` matching `selector`, cast to `T`.
pub fn query<T: JsCast>(root: &Element, selector: &str) -> Option<T> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<T>().ok())
}

/// Element by id, cast to `T`.
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, PageError> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<T>().ok())
        .ok_or_else(|| PageError::missing_element(format!("#{id}")))
}

/// First element matching `selector`, cast to `T`.
pub fn query_doc<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<T>().ok())
}

/// Attach a listener that lives as long as the page.
pub fn on(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("Failed to listen for {}: {:?}", event, e);
    }
    closure.forget(); // Keep closure alive for the lifetime of the page
}

/// Run `callback` once after `delay_ms`; returns the timer handle.
pub fn set_timeout(delay_ms: i32, callback: impl FnOnce() + 'static) -> Option<i32> {
    let callback = Closure::once_into_js(callback);
    window()
        .ok()?
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay_ms)
        .ok()
}

pub fn clear_timeout(handle: i32) {
    if let Ok(window) = window() {
        window.clear_timeout_with_handle(handle);
    }
}

/// Run `callback` before the next repaint.
pub fn request_animation_frame(callback: impl FnOnce() + 'static) {
    let callback = Closure::once_into_js(callback);
    if let Ok(window) = window() {
        let _ = window.request_animation_frame(callback.unchecked_ref());
    }
}

/// Run `callback` once the document is parsed (immediately if it already is).
pub fn on_ready(document: &Document, callback: impl FnOnce() + 'static) {
    if document.ready_state() == "loading" {
        let mut callback = Some(callback);
        on(document, "DOMContentLoaded", move |_| {
            if let Some(callback) = callback.take() {
                callback();
            }
        });
    } else {
        callback();
    }
}

pub fn add_class(element: &Element, class: &str) {
    let _ = element.class_list().add_1(class);
}

pub fn remove_class(element: &Element, class: &str) {
    let _ = element.class_list().remove_1(class);
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    if on {
        add_class(element, class);
    } else {
        remove_class(element, class);
    }
}

pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        if let Err(e) = element.style().set_property(property, value) {
            log::warn!("Failed to set {}: {:?}", property, e);
        }
    }
}

pub fn clear_style(element: &Element, property: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.style().remove_property(property);
    }
}

pub fn apply(element: &Element, mutation: &Mutation) {
    match mutation {
        Mutation::SetStyle(property, value) => set_style(element, property, value),
        Mutation::AddClass(class) => add_class(element, class),
    }
}

/// Mark the one control whose `attribute` equals `value` as active.
pub fn mark_active(controls: &[Element], attribute: &str, value: &str) {
    for control in controls {
        let is_match = control.get_attribute(attribute).as_deref() == Some(value);
        set_class(control, "active", is_match);
    }
}

/// Force a style recalculation so a reset animation restarts.
pub fn reflow(element: &Element) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.offset_height();
    }
}

pub fn scroll_y() -> f64 {
    window()
        .ok()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}
