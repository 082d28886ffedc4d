use gloo_timers::callback::Timeout;
use log::{debug, warn};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Animation, Element};

use super::props::{Keyframe, Props};
use super::timeline::{Timeline, Tween};
use crate::dom;
use crate::error::MotionError;

// `Element.animate(keyframes, options)` and `Animation.commitStyles()`, which
// web-sys only exposes behind unstable flags or not at all.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(extends = Element, js_name = Element)]
    type AnimatableElement;

    #[wasm_bindgen(method, catch, js_name = animate)]
    fn animate_with_options(
        this: &AnimatableElement,
        keyframes: &JsValue,
        options: &JsValue,
    ) -> Result<Animation, JsValue>;

    #[wasm_bindgen(extends = Animation, js_name = Animation)]
    type CommittableAnimation;

    #[wasm_bindgen(method, catch, js_name = commitStyles)]
    fn commit_styles(this: &CommittableAnimation) -> Result<(), JsValue>;
}

#[derive(Serialize)]
struct EffectOptions {
    duration: f64,
    delay: f64,
    easing: String,
    fill: &'static str,
}

enum Completion {
    /// Fires from the last animation's `finish` event.
    Finish {
        animation: Animation,
        _listener: Closure<dyn FnMut()>,
    },
    /// Used when the timeline ends in a hold or no animation started.
    Timer(Timeout),
}

impl Drop for Completion {
    fn drop(&mut self) {
        if let Completion::Finish { animation, .. } = self {
            animation.set_onfinish(None);
        }
    }
}

/// A played timeline. Dropping the handle kills every animation it started and
/// its pending completion callback.
#[derive(Default)]
pub struct AnimationHandle {
    animations: Vec<Animation>,
    completion: Option<Completion>,
}

impl Drop for AnimationHandle {
    fn drop(&mut self) {
        self.completion.take();
        for animation in self.animations.drain(..) {
            // Keep the interrupted values so a following `to` starts from them.
            if let Err(e) = animation.unchecked_ref::<CommittableAnimation>().commit_styles() {
                debug!("Interrupted values not kept: {:?}", e);
            }
            animation.cancel();
        }
    }
}

fn animate(tween: &Tween<Element>) -> Result<Animation, MotionError> {
    let mut frames: Vec<Keyframe> = Vec::with_capacity(2);
    if let Some(from) = &tween.from {
        frames.push(from.keyframe());
    }
    frames.push(tween.to.keyframe());

    let options = EffectOptions {
        duration: tween.duration * 1000.0,
        delay: tween.start * 1000.0,
        easing: tween.ease.css(),
        fill: if tween.from.is_some() { "both" } else { "forwards" },
    };

    let frames = serde_wasm_bindgen::to_value(&frames)?;
    let options = serde_wasm_bindgen::to_value(&options)?;
    let animation = tween
        .target
        .unchecked_ref::<AnimatableElement>()
        .animate_with_options(&frames, &options)?;
    Ok(animation)
}

/// Index of the animation that ends last, if it ends with the timeline.
fn final_animation(ends: &[f64], duration: f64) -> Option<usize> {
    let (index, end) = ends
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))?;
    (*end + 1e-9 >= duration).then_some(index)
}

impl Timeline<Element> {
    pub fn play(self) -> AnimationHandle {
        let (tweens, duration, on_complete) = self.into_parts();
        let mut handle = AnimationHandle::default();
        let mut ends = Vec::with_capacity(tweens.len());
        for tween in &tweens {
            match animate(tween) {
                Ok(animation) => {
                    handle.animations.push(animation);
                    ends.push(tween.end());
                }
                Err(e) => warn!("Skipping tween: {}", e),
            }
        }
        if let Some(callback) = on_complete {
            handle.completion = Some(match final_animation(&ends, duration) {
                Some(index) => {
                    let animation = handle.animations[index].clone();
                    let listener = Closure::once(callback);
                    animation.set_onfinish(Some(listener.as_ref().unchecked_ref()));
                    Completion::Finish { animation, _listener: listener }
                }
                None => {
                    let millis = (duration * 1000.0).round() as u32;
                    Completion::Timer(Timeout::new(millis, callback))
                }
            });
        }
        handle
    }
}

/// Writes props as inline style right away, without animating.
pub fn set(element: &Element, props: &Props) {
    for (property, value) in props.style_pairs() {
        if let Err(e) = dom::set_style(element, property, &value) {
            debug!("Could not set {} on element: {}", property, e);
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn completion_follows_the_tween_that_ends_the_timeline() {
        assert_eq!(final_animation(&[0.8, 1.3, 1.1], 1.3), Some(1));
    }

    #[test]
    fn trailing_hold_falls_back_to_a_timer() {
        assert_eq!(final_animation(&[0.8, 1.3], 1.7), None);
        assert_eq!(final_animation(&[], 0.0), None);
    }
}
