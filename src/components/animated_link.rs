use yew::prelude::*;

use crate::hooks::{roll_builder, use_hover_timeline, Axis, HoverTrigger, Roll};

#[derive(Properties, PartialEq)]
pub struct AnimatedLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    pub children: Children,
}

/// Link whose label rolls up on hover while a copy rolls in from below.
#[function_component(AnimatedLink)]
pub fn animated_link(props: &AnimatedLinkProps) -> Html {
    let container = use_node_ref();
    let top = use_node_ref();
    let bottom = use_node_ref();

    use_hover_timeline(
        HoverTrigger::Node(container.clone()),
        roll_builder(top.clone(), bottom.clone(), Axis::Vertical, false, Roll::Enter),
        roll_builder(top.clone(), bottom.clone(), Axis::Vertical, false, Roll::Leave),
    );

    html! {
        <a
            ref={container}
            href={props.href.clone()}
            class={classes!("animated-link", props.class.clone())}
            onclick={props.onclick.clone()}
        >
            <span class="animated-link__stack">
                <span ref={top} class="animated-link__line">{ props.children.clone() }</span>
                <span
                    ref={bottom}
                    class="animated-link__line animated-link__line--spare"
                    style="opacity: 0; transform: translateY(-100%);"
                    aria-hidden="true"
                >
                    { props.children.clone() }
                </span>
            </span>
        </a>
    }
}
