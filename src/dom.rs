//! Thin helpers over `web-sys`: scoped event listeners, element rectangles and
//! inline style writes.

use std::cell::Cell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, DomRect, Element, Event, EventTarget, HtmlElement, Window};

use crate::error::MotionError;

pub fn browser_window() -> Result<Window, MotionError> {
    web_sys::window().ok_or(MotionError::NoWindow)
}

pub fn document() -> Result<Document, MotionError> {
    browser_window()?.document().ok_or(MotionError::NoDocument)
}

pub fn viewport_height() -> Option<f64> {
    web_sys::window()?.inner_height().ok()?.as_f64()
}

/// An event listener that is removed from its target when the guard is dropped.
///
/// Effects hand these to their destructor so nothing fires after teardown.
pub struct ListenerGuard {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
    attached: Cell<bool>,
}

impl ListenerGuard {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, MotionError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
            attached: Cell::new(true),
        })
    }

    pub fn on_window<F>(event: &'static str, handler: F) -> Result<Self, MotionError>
    where
        F: FnMut(Event) + 'static,
    {
        let window = browser_window()?;
        Self::new(window.as_ref(), event, handler)
    }

    pub fn on_document<F>(event: &'static str, handler: F) -> Result<Self, MotionError>
    where
        F: FnMut(Event) + 'static,
    {
        let document = document()?;
        Self::new(document.as_ref(), event, handler)
    }

    /// Stops delivery without freeing the closure, so it is safe to call from
    /// inside the handler itself.
    pub fn detach(&self) {
        if self.attached.replace(false) {
            let _ = self
                .target
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached.get()
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Viewport-relative rectangle, detached from the live `DOMRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

impl From<&DomRect> for Rect {
    fn from(rect: &DomRect) -> Self {
        Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
    }
}

pub fn rect_of(element: &Element) -> Rect {
    Rect::from(&element.get_bounding_client_rect())
}

pub fn set_style(element: &Element, property: &str, value: &str) -> Result<(), MotionError> {
    let html = element
        .dyn_ref::<HtmlElement>()
        .ok_or(MotionError::NotStylable)?;
    html.style().set_property(property, value)?;
    Ok(())
}

pub fn clear_style(element: &Element, property: &str) -> Result<(), MotionError> {
    let html = element
        .dyn_ref::<HtmlElement>()
        .ok_or(MotionError::NotStylable)?;
    html.style().remove_property(property)?;
    Ok(())
}

pub fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Whether `target` sits inside any of the given elements.
pub fn event_within(event: &Event, elements: &[Element]) -> bool {
    let Some(node) = event.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
        return false;
    };
    elements.iter().any(|el| el.contains(Some(&node)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges() {
        let rect = Rect::new(10.0, 20.0, 100.0, 40.0);
        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.bottom(), 60.0);
        assert_eq!(rect.center_x(), 60.0);
    }
}
