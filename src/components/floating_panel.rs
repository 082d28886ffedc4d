use yew::prelude::*;

use crate::hooks::{use_anchored_position, use_panel_transition, AnchorPosition};

#[derive(Properties, PartialEq)]
pub struct FloatingPanelProps {
    pub open: bool,
    /// Element the panel lines up with.
    pub anchor: NodeRef,
    pub on_close: Callback<()>,
    /// Ref to the positioned container, for outside-click checks.
    pub panel_ref: NodeRef,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onmouseenter: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub onmouseleave: Option<Callback<MouseEvent>>,
    pub children: Children,
}

/// Dimmed backdrop plus a card placed under the navigation bar, left-aligned
/// with its anchor.
#[function_component(FloatingPanel)]
pub fn floating_panel(props: &FloatingPanelProps) -> Html {
    let overlay = use_node_ref();
    let content = use_node_ref();

    use_anchored_position(props.anchor.clone(), props.panel_ref.clone(), props.open, AnchorPosition::below_nav);
    use_panel_transition(props.open, overlay.clone(), content.clone());

    let pointer_events = if props.open { "auto" } else { "none" };
    let close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <>
            <div
                ref={overlay}
                class="panel-overlay"
                style={format!("pointer-events: {};", pointer_events)}
                onclick={close}
            />
            <div
                ref={props.panel_ref.clone()}
                class={classes!("panel-container", props.class.clone())}
                style={format!("pointer-events: {};", pointer_events)}
                onmouseenter={props.onmouseenter.clone()}
                onmouseleave={props.onmouseleave.clone()}
            >
                <div ref={content} class="panel-content">
                    { props.children.clone() }
                </div>
            </div>
        </>
    }
}
