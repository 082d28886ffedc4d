#![allow(dead_code)]

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(extends = Element, js_name = Element)]
    type Animatable;

    #[wasm_bindgen(method, js_name = getAnimations)]
    fn get_animations(this: &Animatable) -> js_sys::Array;
}

pub fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

pub fn mount_point() -> Element {
    let document = document();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    root
}

/// Animations currently affecting `element`, running or filling.
pub fn animation_count(element: &Element) -> u32 {
    element.unchecked_ref::<Animatable>().get_animations().length()
}

pub fn find(root: &Element, selector: &str) -> Element {
    root.query_selector(selector).unwrap().unwrap()
}

pub fn click(element: &Element) {
    element.unchecked_ref::<HtmlElement>().click();
}

pub fn dispatch(target: &web_sys::EventTarget, event: &str) {
    target.dispatch_event(&Event::new(event).unwrap()).unwrap();
}
