#![cfg(target_arch = "wasm32")]

mod common;

use std::cell::Cell;
use std::rc::Rc;

use common::{animation_count, dispatch, document, find, mount_point};
use gloo_timers::future::TimeoutFuture;
use kanva_storefront::components::animated_link::{AnimatedLink, AnimatedLinkProps};
use kanva_storefront::hooks::{use_hover_timeline, use_reveal_once, HoverTrigger, TimelineBuilder};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::Element;
use yew::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Properties, PartialEq)]
struct WatchedProps {
    on_reveal: Callback<()>,
}

#[function_component(Watched)]
fn watched(props: &WatchedProps) -> Html {
    let node = use_node_ref();
    use_reveal_once(node.clone(), 0.8, props.on_reveal.clone());
    html! { <div class="watched" ref={node} style="margin-top: 300vh; height: 10px;" /> }
}

#[derive(Properties, PartialEq)]
struct HoverableProps {
    builds: Rc<Cell<u32>>,
}

#[function_component(Hoverable)]
fn hoverable(props: &HoverableProps) -> Html {
    let node = use_node_ref();
    let counting = |builds: Rc<Cell<u32>>| -> TimelineBuilder {
        Rc::new(move || {
            builds.set(builds.get() + 1);
            None
        })
    };
    use_hover_timeline(
        HoverTrigger::Node(node.clone()),
        counting(props.builds.clone()),
        counting(props.builds.clone()),
    );
    html! { <div class="hoverable" ref={node} /> }
}

fn counter() -> (Rc<Cell<u32>>, Callback<()>) {
    let count = Rc::new(Cell::new(0));
    let seen = count.clone();
    (count, Callback::from(move |_| seen.set(seen.get() + 1)))
}

fn scroll() {
    dispatch(&web_sys::window().unwrap(), "scroll");
}

fn link_props() -> AnimatedLinkProps {
    AnimatedLinkProps {
        href: AttrValue::Static("#shop"),
        class: Classes::new(),
        onclick: None,
        children: Children::new(vec![html! { "Shop" }]),
    }
}

#[wasm_bindgen_test]
async fn reveal_fires_once_when_scrolled_into_range() {
    let root = mount_point();
    let (count, on_reveal) = counter();
    yew::Renderer::<Watched>::with_root_and_props(root.clone(), WatchedProps { on_reveal }).render();
    TimeoutFuture::new(10).await;

    scroll();
    assert_eq!(count.get(), 0);

    find(&root, ".watched").set_attribute("style", "height: 10px;").unwrap();
    scroll();
    scroll();
    assert_eq!(count.get(), 1);
    root.remove();
}

#[wasm_bindgen_test]
async fn removed_container_never_reveals() {
    let root = mount_point();
    let (count, on_reveal) = counter();
    let app = yew::Renderer::<Watched>::with_root_and_props(root.clone(), WatchedProps { on_reveal }).render();
    TimeoutFuture::new(10).await;

    app.destroy();
    TimeoutFuture::new(10).await;

    // A detached element measures at the origin, well inside the threshold.
    scroll();
    assert_eq!(count.get(), 0);
    root.remove();
}

#[wasm_bindgen_test]
async fn hover_listeners_go_away_on_unmount() {
    let root = mount_point();
    let builds = Rc::new(Cell::new(0));
    let app = yew::Renderer::<Hoverable>::with_root_and_props(
        root.clone(),
        HoverableProps { builds: builds.clone() },
    )
    .render();
    TimeoutFuture::new(10).await;

    let trigger = find(&root, ".hoverable");
    dispatch(&trigger, "mouseenter");
    dispatch(&trigger, "mouseleave");
    assert_eq!(builds.get(), 2);

    app.destroy();
    TimeoutFuture::new(10).await;

    dispatch(&trigger, "mouseenter");
    dispatch(&trigger, "mouseleave");
    assert_eq!(builds.get(), 2);
    root.remove();
}

#[wasm_bindgen_test]
async fn unmounted_link_stops_animating() {
    let root = mount_point();
    let app = yew::Renderer::<AnimatedLink>::with_root_and_props(root.clone(), link_props()).render();
    TimeoutFuture::new(10).await;

    let link = find(&root, "a");
    let label: Element = find(&root, ".animated-link__line");
    dispatch(&link, "mouseenter");
    assert_eq!(animation_count(&label), 1);

    app.destroy();
    TimeoutFuture::new(10).await;

    // Back in the document so any animation would be observable.
    document().body().unwrap().append_child(&link).unwrap();
    assert_eq!(animation_count(&label), 0, "unmount left the hover running");

    dispatch(&link, "mouseenter");
    TimeoutFuture::new(10).await;
    assert_eq!(animation_count(&label), 0);
    link.remove();
    root.remove();
}
