use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info};
use yew::prelude::*;

use crate::config::BRAND_BACKGROUND;
use crate::dom;
use crate::hooks::{IntroAction, IntroContext, IntroState};
use crate::motion::{self, AnimationHandle, Ease, Position, Props, Timeline, Timing};

const CLIP_COLLAPSED_BOTTOM: &str = "polygon(0 100%, 100% 100%, 100% 100%, 0 100%)";
const CLIP_FULL: &str = "polygon(0 100%, 100% 100%, 100% 0, 0 0)";
const CLIP_COLLAPSED_TOP: &str = "polygon(0 0%, 100% 0%, 100% 0%, 0 0%)";

/// Curtain rises, wordmark pops in before it settles, holds, curtain lifts off.
pub fn loader_timeline<T: Clone>(overlay: T, wordmark: T) -> Timeline<T> {
    let curtain = Timing::new(0.8, Ease::Power2InOut);
    Timeline::new()
        .from_to(
            overlay.clone(),
            Props::new().clip_path(CLIP_COLLAPSED_BOTTOM).opacity(0.0),
            Props::new().clip_path(CLIP_FULL).opacity(1.0),
            curtain,
        )
        .from_to_at(
            wordmark,
            Props::new().opacity(0.0).scale(0.85),
            Props::new().opacity(1.0).scale(1.0),
            Timing::new(0.6, Ease::BackOut(1.2)),
            Position::FromEnd(-0.5),
        )
        .hold(0.4)
        .to(overlay, Props::new().clip_path(CLIP_COLLAPSED_TOP).opacity(0.0), curtain)
}

fn lock_body(locked: bool) {
    let Some(body) = dom::document().ok().and_then(|d| d.body()) else {
        return;
    };
    let result = if locked {
        dom::set_style(&body, "overflow", "hidden").and(dom::set_style(&body, "background-color", BRAND_BACKGROUND))
    } else {
        dom::clear_style(&body, "overflow").and(dom::clear_style(&body, "background-color"))
    };
    if let Err(e) = result {
        debug!("Body style not updated: {}", e);
    }
}

#[derive(Properties, PartialEq)]
struct IntroLoaderProps {
    on_complete: Callback<()>,
}

#[function_component(IntroLoader)]
fn intro_loader(props: &IntroLoaderProps) -> Html {
    let container = use_node_ref();
    let overlay = use_node_ref();
    let wordmark = use_node_ref();

    {
        let container = container.clone();
        let overlay = overlay.clone();
        let wordmark = wordmark.clone();
        let on_complete = props.on_complete.clone();
        use_effect_with_deps(
            move |_| {
                let fade_out: Rc<RefCell<Option<AnimationHandle>>> = Rc::default();
                let mut handle = None;
                match (
                    motion::element(&container),
                    motion::element(&overlay),
                    motion::element(&wordmark),
                ) {
                    (Some(container), Some(overlay), Some(wordmark)) => {
                        motion::set(&container, &Props::new().opacity(1.0));
                        let fade_slot = fade_out.clone();
                        let timeline = loader_timeline(overlay, wordmark).on_complete(move || {
                            let fade = Timeline::new()
                                .to(container.clone(), Props::new().opacity(0.0), Timing::new(0.25, Ease::Power2In))
                                .on_complete(move || {
                                    if let Err(e) = dom::set_style(&container, "display", "none") {
                                        debug!("Intro container not hidden: {}", e);
                                    }
                                    // Completing unmounts this component, so leave the callback first.
                                    Timeout::new(0, move || on_complete.emit(())).forget();
                                });
                            *fade_slot.borrow_mut() = Some(fade.play());
                        });
                        handle = Some(timeline.play());
                    }
                    _ => on_complete.emit(()),
                }
                move || {
                    drop(handle);
                    fade_out.borrow_mut().take();
                }
            },
            (),
        );
    }

    html! {
        <div ref={container} class="intro-loader">
            <div
                ref={overlay}
                class="intro-loader__overlay"
                style={format!("clip-path: {}; opacity: 0;", CLIP_COLLAPSED_BOTTOM)}
            />
            <div class="intro-loader__center">
                <span ref={wordmark} class="intro-loader__wordmark" style="opacity: 0;">{ "(kanva)" }</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct IntroProviderProps {
    pub children: Children,
}

/// Plays the intro over a hidden page and publishes [`IntroState`] to the
/// sections below.
#[function_component(IntroProvider)]
pub fn intro_provider(props: &IntroProviderProps) -> Html {
    let intro = use_reducer(IntroState::default);
    let ready = *intro == IntroState::Ready;

    use_effect_with_deps(
        move |ready| {
            lock_body(!*ready);
            || lock_body(false)
        },
        ready,
    );

    let on_complete = {
        let intro = intro.clone();
        Callback::from(move |_| {
            info!("Intro finished, revealing page");
            intro.dispatch(IntroAction::Complete);
        })
    };

    let page_style = if ready {
        "opacity: 1; visibility: visible; transition: opacity 0.3s ease-in-out;"
    } else {
        "opacity: 0; visibility: hidden; transition: opacity 0.3s ease-in-out;"
    };

    html! {
        <ContextProvider<IntroContext> context={intro}>
            if !ready {
                <IntroLoader {on_complete} />
            }
            <div class="page" style={page_style}>
                { props.children.clone() }
            </div>
        </ContextProvider<IntroContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn loader_sequence_offsets() {
        let tl = loader_timeline("overlay", "wordmark");
        let starts: Vec<f64> = tl.tweens().iter().map(|t| t.start).collect();
        let expected = [0.0, 0.3, 1.3];
        for (got, want) in starts.iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "{} != {}", got, want);
        }
        assert!((tl.duration() - 2.1).abs() < 1e-9);
    }

    #[test]
    fn curtain_rises_then_lifts() {
        let tl = loader_timeline("overlay", "wordmark");
        let tweens = tl.tweens();
        assert_eq!(tweens[0].to.clip_path, Some(CLIP_FULL));
        assert_eq!(tweens[2].target, "overlay");
        assert_eq!(tweens[2].to.clip_path, Some(CLIP_COLLAPSED_TOP));
        assert_eq!(tweens[1].ease, Ease::BackOut(1.2));
    }
}
