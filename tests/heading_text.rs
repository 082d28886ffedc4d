#![cfg(target_arch = "wasm32")]

mod common;

use common::{animation_count, click, find, mount_point};
use gloo_timers::future::TimeoutFuture;
use kanva_storefront::components::heading_text::{HeadingText, HeadingTextProps};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::Element;
use yew::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

fn props(text: &'static str) -> HeadingTextProps {
    HeadingTextProps {
        text: AttrValue::Static(text),
        class: Classes::new(),
        delay: 0.0,
        stagger: 0.04,
        armed: false,
    }
}

fn units(root: &Element) -> Vec<Element> {
    let list = root.query_selector_all(".char-split").unwrap();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|node| node.unchecked_into::<Element>())
        .collect()
}

fn running(root: &Element) -> u32 {
    units(root).iter().map(animation_count).sum()
}

#[function_component(ArmableHeading)]
fn armable_heading() -> Html {
    let armed = use_state(|| false);
    let arm = {
        let armed = armed.clone();
        Callback::from(move |_: MouseEvent| armed.set(true))
    };
    html! {
        <>
            <button class="arm" onclick={arm} />
            <HeadingText text="Glow" armed={*armed} />
        </>
    }
}

#[wasm_bindgen_test]
async fn renders_one_unit_per_character() {
    let root = mount_point();
    yew::Renderer::<HeadingText>::with_root_and_props(root.clone(), props("Hi there")).render();
    TimeoutFuture::new(10).await;

    let units = units(&root);
    assert_eq!(units.len(), 8);
    assert_eq!(units[2].text_content().unwrap(), "\u{00A0}");
}

#[wasm_bindgen_test]
async fn empty_text_renders_nothing() {
    let root = mount_point();
    yew::Renderer::<HeadingText>::with_root_and_props(root.clone(), props("")).render();
    TimeoutFuture::new(10).await;

    assert!(units(&root).is_empty());
}

#[wasm_bindgen_test]
async fn reveal_waits_for_arming() {
    let root = mount_point();
    yew::Renderer::<ArmableHeading>::with_root(root.clone()).render();
    TimeoutFuture::new(20).await;

    assert_eq!(units(&root).len(), 4);
    assert_eq!(running(&root), 0, "units animated before arming");

    click(&find(&root, ".arm"));
    TimeoutFuture::new(20).await;

    assert_eq!(running(&root), 4);
}
