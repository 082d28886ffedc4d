#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use kanva_storefront::dom::ListenerGuard;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Element, Event};

wasm_bindgen_test_configure!(run_in_browser);

fn target() -> Element {
    web_sys::window().unwrap().document().unwrap().create_element("div").unwrap()
}

fn ping(element: &Element) {
    element.dispatch_event(&Event::new("ping").unwrap()).unwrap();
}

fn counting_guard(element: &Element) -> (ListenerGuard, Rc<Cell<u32>>) {
    let count = Rc::new(Cell::new(0));
    let seen = count.clone();
    let guard = ListenerGuard::new(element.as_ref(), "ping", move |_| seen.set(seen.get() + 1)).unwrap();
    (guard, count)
}

#[wasm_bindgen_test]
fn delivers_until_detached() {
    let element = target();
    let (guard, count) = counting_guard(&element);
    ping(&element);
    ping(&element);
    assert_eq!(count.get(), 2);

    guard.detach();
    assert!(!guard.is_attached());
    ping(&element);
    assert_eq!(count.get(), 2);

    // A second detach is a no-op.
    guard.detach();
}

#[wasm_bindgen_test]
fn dropping_the_guard_removes_the_listener() {
    let element = target();
    let (guard, count) = counting_guard(&element);
    ping(&element);
    drop(guard);
    ping(&element);
    assert_eq!(count.get(), 1);
}

#[wasm_bindgen_test]
fn handler_may_detach_itself() {
    let element = target();
    let count = Rc::new(Cell::new(0));
    let slot: Rc<std::cell::RefCell<Option<ListenerGuard>>> = Rc::default();
    let guard = {
        let count = count.clone();
        let slot = slot.clone();
        ListenerGuard::new(element.as_ref(), "ping", move |_| {
            count.set(count.get() + 1);
            if let Some(guard) = slot.borrow().as_ref() {
                guard.detach();
            }
        })
        .unwrap()
    };
    *slot.borrow_mut() = Some(guard);

    ping(&element);
    ping(&element);
    assert_eq!(count.get(), 1);
}
