#![cfg(target_arch = "wasm32")]

mod common;

use std::cell::Cell;
use std::rc::Rc;

use common::{animation_count, mount_point};
use gloo_timers::future::TimeoutFuture;
use kanva_storefront::motion::{Ease, Props, Timeline, Timing};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn square() -> Element {
    let element = mount_point();
    element.set_attribute("style", "width: 10px; height: 10px; opacity: 1;").unwrap();
    element
}

fn inline_opacity(element: &Element) -> f64 {
    element
        .unchecked_ref::<HtmlElement>()
        .style()
        .get_property_value("opacity")
        .unwrap()
        .parse()
        .unwrap()
}

fn fade(element: &Element, seconds: f64) -> Timeline<Element> {
    Timeline::new().to(element.clone(), Props::new().opacity(0.0), Timing::new(seconds, Ease::Linear))
}

fn flag() -> (Rc<Cell<bool>>, impl FnOnce() + 'static) {
    let done = Rc::new(Cell::new(false));
    let set = done.clone();
    (done, move || set.set(true))
}

#[wasm_bindgen_test]
async fn killing_keeps_the_interrupted_values() {
    let element = square();
    let handle = fade(&element, 0.4).play();
    TimeoutFuture::new(150).await;
    assert_eq!(animation_count(&element), 1);

    drop(handle);

    assert_eq!(animation_count(&element), 0);
    let opacity = inline_opacity(&element);
    assert!(opacity > 0.0 && opacity < 1.0, "opacity after kill: {}", opacity);
}

#[wasm_bindgen_test]
async fn next_tween_starts_from_the_interrupted_values() {
    let element = square();
    let handle = fade(&element, 0.4).play();
    TimeoutFuture::new(150).await;
    drop(handle);
    let interrupted = inline_opacity(&element);

    let _back = Timeline::new()
        .to(element.clone(), Props::new().opacity(1.0), Timing::new(10.0, Ease::Linear))
        .play();
    TimeoutFuture::new(20).await;

    let live: f64 = web_sys::window()
        .unwrap()
        .get_computed_style(&element)
        .unwrap()
        .unwrap()
        .get_property_value("opacity")
        .unwrap()
        .parse()
        .unwrap();
    assert!((live - interrupted).abs() < 0.1, "{} jumped from {}", live, interrupted);
}

#[wasm_bindgen_test]
async fn completion_waits_for_the_last_tween() {
    let element = square();
    let (done, on_done) = flag();
    let _handle = fade(&element, 0.2).on_complete(on_done).play();

    TimeoutFuture::new(100).await;
    assert!(!done.get(), "completed mid-tween");
    TimeoutFuture::new(250).await;
    assert!(done.get());
}

#[wasm_bindgen_test]
async fn trailing_hold_still_completes() {
    let element = square();
    let (done, on_done) = flag();
    let _handle = fade(&element, 0.1).hold(0.1).on_complete(on_done).play();

    TimeoutFuture::new(400).await;
    assert!(done.get());
}

#[wasm_bindgen_test]
async fn dropping_the_handle_cancels_completion() {
    let element = square();
    let (done, on_done) = flag();
    let handle = fade(&element, 0.2).on_complete(on_done).play();

    TimeoutFuture::new(50).await;
    drop(handle);
    TimeoutFuture::new(300).await;
    assert!(!done.get());
}
