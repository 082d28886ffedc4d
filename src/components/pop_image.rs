use yew::prelude::*;

use crate::components::picture::{Fit, ObjectFit, Picture};
use crate::motion::{self, Ease, Props, Timeline, Timing};

/// Tilt at rest and after popping in, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub from: f64,
    pub to: f64,
}

fn collapsed(tilt: Option<Tilt>) -> Props {
    let props = Props::new().opacity(0.0).scale(0.3);
    match tilt {
        Some(tilt) => props.rotation(tilt.from),
        None => props,
    }
}

/// Springy scale-up from a third of the size.
pub fn pop_in<T>(target: T, delay: f64, tilt: Option<Tilt>) -> Timeline<T> {
    let mut to = Props::new().opacity(1.0).scale(1.0);
    if let Some(tilt) = tilt {
        to = to.rotation(tilt.to);
    }
    Timeline::new().from_to(target, collapsed(tilt), to, Timing::new(0.8, Ease::BackOut(1.7)).delay(delay))
}

#[derive(Properties, PartialEq)]
pub struct PopImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or_default]
    pub tilt: Option<Tilt>,
    /// Stays collapsed until this turns true.
    #[prop_or(true)]
    pub play: bool,
    #[prop_or(ObjectFit::Cover)]
    pub object_fit: ObjectFit,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(PopImage)]
pub fn pop_image(props: &PopImageProps) -> Html {
    let image = use_node_ref();

    {
        let image = image.clone();
        use_effect_with_deps(
            move |(delay, tilt, play)| {
                let mut handle = None;
                if let Some(el) = motion::element(&image) {
                    if *play {
                        handle = Some(pop_in(el, *delay, *tilt).play());
                    } else {
                        motion::set(&el, &collapsed(*tilt));
                    }
                }
                move || drop(handle)
            },
            (props.delay, props.tilt, props.play),
        );
    }

    html! {
        <div class={classes!("pop-image", props.class.clone())}>
            <div ref={image} class="pop-image__inner" style="opacity: 0;">
                <Picture src={props.src.clone()} alt={props.alt.clone()} fit={Fit::Fill(props.object_fit)} />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_with_delay_and_tilt() {
        let tl = pop_in("img", 2.1, Some(Tilt { from: 5.0, to: -8.0 }));
        let tween = &tl.tweens()[0];
        assert!((tween.start - 2.1).abs() < 1e-9);
        assert_eq!(tween.from.as_ref().and_then(|p| p.rotation), Some(5.0));
        assert_eq!(tween.to.rotation, Some(-8.0));
        assert_eq!(tween.ease, Ease::BackOut(1.7));
    }

    #[test]
    fn untilted_pop_leaves_rotation_alone() {
        let tl = pop_in("img", 0.0, None);
        assert_eq!(tl.tweens()[0].to.rotation, None);
        assert_eq!(tl.tweens()[0].from.as_ref().and_then(|p| p.scale), Some(0.3));
    }
}
