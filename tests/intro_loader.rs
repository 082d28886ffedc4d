#![cfg(target_arch = "wasm32")]

mod common;

use common::{document, mount_point};
use gloo_timers::future::TimeoutFuture;
use kanva_storefront::sections::intro_loader::{IntroProvider, IntroProviderProps};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::HtmlElement;
use yew::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

fn body_overflow() -> String {
    document()
        .body()
        .unwrap()
        .unchecked_into::<HtmlElement>()
        .style()
        .get_property_value("overflow")
        .unwrap()
}

#[wasm_bindgen_test]
async fn intro_plays_then_unlocks_the_page() {
    let root = mount_point();
    let props = IntroProviderProps {
        children: Children::new(vec![html! { <p class="content">{ "page" }</p> }]),
    };
    yew::Renderer::<IntroProvider>::with_root_and_props(root.clone(), props).render();
    TimeoutFuture::new(100).await;

    assert!(root.query_selector(".intro-loader").unwrap().is_some());
    assert_eq!(body_overflow(), "hidden");
    let page = root.query_selector(".page").unwrap().unwrap();
    assert!(page.get_attribute("style").unwrap().contains("visibility: hidden"));

    // Curtain sequence, then the fade out.
    TimeoutFuture::new(3_000).await;

    assert!(root.query_selector(".intro-loader").unwrap().is_none());
    assert_eq!(body_overflow(), "");
    let page = root.query_selector(".page").unwrap().unwrap();
    assert!(page.get_attribute("style").unwrap().contains("visibility: visible"));
}
