use log::debug;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::carousel::{parallax_transform, strip_transform, Carousel, Parallax};
use crate::catalog::HERO_SLIDES;
use crate::components::hotspot_popover::HotspotPopover;
use crate::components::picture::{Fit, ObjectFit, Picture};
use crate::hooks::{use_outside_click, PanelAction, PanelGroup};

/// Full-screen image carousel. The slide strip and the controls scroll at
/// different parallax rates; markers on the current slide open a product
/// popover.
#[function_component(Hero)]
pub fn hero() -> Html {
    let carousel = use_state(|| Carousel::new(HERO_SLIDES.len()));
    let (_, scroll_y) = use_window_scroll();
    let offsets = Parallax::default().offsets(scroll_y);

    let hotspots = use_reducer(PanelGroup::<usize>::default);
    let popover_ref = use_node_ref();
    let marker_refs = use_memo(
        |_| {
            HERO_SLIDES
                .iter()
                .map(|slide| slide.hotspots.iter().map(|_| NodeRef::default()).collect::<Vec<_>>())
                .collect::<Vec<_>>()
        },
        (),
    );

    let index = carousel.index();
    let current_markers = marker_refs.get(index).cloned().unwrap_or_default();

    let mut zones = current_markers.clone();
    zones.push(popover_ref.clone());
    use_outside_click(&hotspots, zones);

    {
        let hotspots = hotspots.clone();
        use_effect_with_deps(
            move |index| {
                debug!("Hero slide {}", index);
                hotspots.dispatch(PanelAction::OutsideClick);
                || ()
            },
            index,
        );
    }

    let prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(carousel.prev()))
    };
    let next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(carousel.next()))
    };

    let open = hotspots.open_key();
    let open_product = open
        .and_then(|key| HERO_SLIDES.get(index)?.hotspots.get(key))
        .map(|hotspot| hotspot.product);
    let open_marker = open
        .and_then(|key| current_markers.get(key).cloned())
        .unwrap_or_default();

    html! {
        <section class="hero">
            <style>{r#"
                .hero {
                    position: relative;
                    width: 100%;
                    height: 100vh;
                    overflow: hidden;
                }
                .hero__background,
                .hero__foreground {
                    position: absolute;
                    inset: 0;
                    will-change: transform;
                }
                .hero__strip {
                    display: flex;
                    height: 100%;
                    transition: transform 0.5s ease-in-out;
                }
                .hero__slide {
                    position: relative;
                    min-width: 100%;
                    height: 100%;
                }
                .hero__foreground {
                    pointer-events: none;
                }
                .hero__shade {
                    position: absolute;
                    top: 0;
                    bottom: 0;
                    width: 12rem;
                }
                .hero__shade--left {
                    left: 0;
                    background: linear-gradient(to right, rgba(0, 0, 0, 0.4), transparent);
                }
                .hero__shade--right {
                    right: 0;
                    background: linear-gradient(to left, rgba(0, 0, 0, 0.4), transparent);
                }
                .hero__arrow {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    background: rgba(26, 28, 24, 0.5);
                    border: none;
                    border-radius: 8px;
                    color: #fff;
                    padding: 8px;
                    cursor: pointer;
                    pointer-events: auto;
                }
                .hero__arrow--prev { left: 24px; }
                .hero__arrow--next { right: 24px; }
                .hero__dots {
                    position: absolute;
                    bottom: 32px;
                    left: 50%;
                    transform: translateX(-50%);
                    display: flex;
                    gap: 8px;
                    padding: 8px;
                    border-radius: 999px;
                    background: rgba(26, 28, 24, 0.25);
                    backdrop-filter: blur(4px);
                    pointer-events: auto;
                }
                .hero__dot {
                    height: 8px;
                    width: 8px;
                    border: none;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.5);
                    cursor: pointer;
                    transition: all 0.3s;
                }
                .hero__dot--active {
                    width: 24px;
                    background: #fff;
                }
                .hero__marker {
                    position: absolute;
                    width: 28px;
                    height: 28px;
                    margin: -14px 0 0 -14px;
                    border-radius: 50%;
                    border: 2px solid #fff;
                    background: rgba(255, 255, 255, 0.3);
                    cursor: pointer;
                }
                .hero__marker--open {
                    background: #fff;
                }
            "#}</style>
            <div class="hero__background" style={format!("transform: {};", parallax_transform(offsets.background))}>
                <div class="hero__strip" style={format!("transform: {};", strip_transform(&carousel))}>
                    { for HERO_SLIDES.iter().enumerate().map(|(slide_index, slide)| html! {
                        <div key={slide.image} class="hero__slide">
                            <Picture
                                src={slide.image}
                                alt={slide.alt}
                                fit={Fit::Fill(ObjectFit::Cover)}
                                priority={slide_index == 0}
                            />
                            if slide_index == index {
                                { for slide.hotspots.iter().zip(current_markers.iter()).enumerate().map(|(key, (hotspot, marker))| {
                                    let hotspots = hotspots.clone();
                                    let onclick = Callback::from(move |e: MouseEvent| {
                                        e.stop_propagation();
                                        hotspots.dispatch(PanelAction::Click(key));
                                    });
                                    html! {
                                        <button
                                            key={key}
                                            ref={marker.clone()}
                                            class={classes!("hero__marker", (open == Some(key)).then_some("hero__marker--open"))}
                                            style={format!("top: {}%; left: {}%;", hotspot.top, hotspot.left)}
                                            aria-label={hotspot.product.name}
                                            {onclick}
                                        />
                                    }
                                }) }
                            }
                        </div>
                    }) }
                </div>
            </div>
            <div class="hero__foreground" style={format!("transform: {};", parallax_transform(offsets.foreground))}>
                <div class="hero__shade hero__shade--left" />
                <div class="hero__shade hero__shade--right" />
                if carousel.len() > 1 {
                    <button class="hero__arrow hero__arrow--prev" aria-label="Previous slide" onclick={prev}>
                        <svg width="40" height="40" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5">
                            <path d="M15 18l-6-6 6-6" />
                        </svg>
                    </button>
                    <button class="hero__arrow hero__arrow--next" aria-label="Next slide" onclick={next}>
                        <svg width="40" height="40" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5">
                            <path d="M9 18l6-6-6-6" />
                        </svg>
                    </button>
                    <div class="hero__dots">
                        { for (0..carousel.len()).map(|dot| {
                            let carousel = carousel.clone();
                            let onclick = Callback::from(move |_: MouseEvent| carousel.set(carousel.go_to(dot)));
                            html! {
                                <button
                                    key={dot}
                                    class={classes!("hero__dot", (dot == index).then_some("hero__dot--active"))}
                                    aria-label={format!("Go to slide {}", dot + 1)}
                                    {onclick}
                                />
                            }
                        }) }
                    </div>
                }
            </div>
            <HotspotPopover product={open_product} marker={open_marker} popover_ref={popover_ref} />
        </section>
    }
}
