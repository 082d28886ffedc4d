use yew::prelude::*;

use crate::hooks::{roll_builder, use_hover_timeline, Axis, HoverTrigger, Roll};

/// Cards that drive the arrow: links and anything tagged `data-hover-card`.
pub const CARD_SELECTOR: &str = "a[href], [data-hover-card]";

#[derive(Properties, PartialEq)]
pub struct ArrowSwapProps {
    #[prop_or_default]
    pub class: Classes,
}

fn arrow() -> Html {
    html! {
        <svg width="24" height="20" viewBox="0 0 28 24" fill="none">
            <path
                d="M4 12H22M22 12L15 5M22 12L15 19"
                stroke="currentColor"
                stroke-width="1.5"
                stroke-linecap="round"
                stroke-linejoin="round"
            />
        </svg>
    }
}

/// Arrow that slides out to the left while a twin slides in from the right
/// when the surrounding card is hovered.
#[function_component(ArrowSwap)]
pub fn arrow_swap(props: &ArrowSwapProps) -> Html {
    let container = use_node_ref();
    let resting = use_node_ref();
    let incoming = use_node_ref();

    use_hover_timeline(
        HoverTrigger::Closest(container.clone(), CARD_SELECTOR),
        roll_builder(resting.clone(), incoming.clone(), Axis::Horizontal, true, Roll::Enter),
        roll_builder(resting.clone(), incoming.clone(), Axis::Horizontal, true, Roll::Leave),
    );

    html! {
        <span ref={container} class={classes!("arrow-swap", props.class.clone())}>
            <span ref={resting} class="arrow-swap__arrow">{ arrow() }</span>
            <span
                ref={incoming}
                class="arrow-swap__arrow arrow-swap__arrow--incoming"
                style="opacity: 0; transform: translateX(100%);"
            >
                { arrow() }
            </span>
        </span>
    }
}
