use yew::prelude::*;

use crate::dom;
use crate::hooks::use_revealed;
use crate::motion::{self, Ease, Position, Props, Timeline, Timing};

const UNIT_CLASS: &str = "char-split";
const UNIT_SELECTOR: &str = ".char-split";

/// One unit per character. Spaces become non-breaking so each unit keeps
/// its width once it is an inline block.
pub fn split_units(text: &str) -> Vec<String> {
    text.chars()
        .map(|c| if c == ' ' { '\u{00A0}' } else { c })
        .map(String::from)
        .collect()
}

fn hidden() -> Props {
    Props::new().opacity(0.0).blur(10.0).y_px(20.0)
}

fn shown() -> Props {
    Props::new().opacity(1.0).blur(0.0).y_px(0.0)
}

/// Units fade in from blurred and lowered, `stagger` seconds apart.
pub fn reveal_timeline<T>(units: Vec<T>, delay: f64, stagger: f64) -> Timeline<T> {
    Timeline::new().stagger(
        units,
        Some(hidden()),
        shown(),
        Timing::new(1.4, Ease::Power3Out).delay(delay),
        stagger,
        Position::End,
    )
}

#[derive(Properties, PartialEq)]
pub struct HeadingTextProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or(0.04)]
    pub stagger: f64,
    /// Extra precondition on top of scrolling into view.
    #[prop_or(true)]
    pub armed: bool,
}

#[function_component(HeadingText)]
pub fn heading_text(props: &HeadingTextProps) -> Html {
    let container = use_node_ref();
    let units = use_memo(|text| split_units(text), props.text.clone());
    let revealed = use_revealed(container.clone());
    let go = revealed && props.armed;

    {
        let container = container.clone();
        use_effect_with_deps(
            move |(units, delay, stagger, go)| {
                let mut handle = None;
                if *go && !units.is_empty() {
                    if let Some(root) = motion::element(&container) {
                        let targets = dom::query_all(&root, UNIT_SELECTOR);
                        let timeline = reveal_timeline(targets, *delay, *stagger);
                        if !timeline.is_empty() {
                            handle = Some(timeline.play());
                        }
                    }
                }
                move || drop(handle)
            },
            (units.clone(), props.delay, props.stagger, go),
        );
    }

    html! {
        <span ref={container} class={classes!("heading-text", props.class.clone())}>
            { for units.iter().enumerate().map(|(i, unit)| html! {
                <span
                    key={i}
                    class={UNIT_CLASS}
                    style="display: inline-block; opacity: 0; filter: blur(10px); transform: translateY(20px);"
                >
                    { unit.clone() }
                </span>
            }) }
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn one_unit_per_char_with_nbsp() {
        let units = split_units("Eco-Friendly, Skin");
        assert_eq!(units.len(), "Eco-Friendly, Skin".chars().count());
        assert_eq!(units[13], "\u{00A0}");
        assert!(units.iter().all(|u| u != " "));
    }

    #[test]
    fn multibyte_characters_stay_whole() {
        assert_eq!(split_units("é ü"), vec!["é", "\u{00A0}", "ü"]);
    }

    #[test]
    fn empty_text_schedules_nothing() {
        let units = split_units("");
        assert!(units.is_empty());
        assert!(reveal_timeline(units, 0.5, 0.04).is_empty());
    }

    #[test]
    fn units_start_one_stagger_apart_after_the_delay() {
        let tl = reveal_timeline(vec!['a', 'b', 'c'], 0.5, 0.04);
        let starts: Vec<f64> = tl.tweens().iter().map(|t| t.start).collect();
        for (got, want) in starts.iter().zip([0.5, 0.54, 0.58]) {
            assert!((got - want).abs() < 1e-9, "{} != {}", got, want);
        }
        assert!((tl.duration() - 1.98).abs() < 1e-9);
        assert_eq!(tl.tweens()[0].from.as_ref().and_then(|p| p.blur), Some(10.0));
    }
}
