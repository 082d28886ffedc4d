use log::info;
use yew::prelude::*;

use crate::catalog::HotspotProduct;
use crate::components::hotspot_card::HotspotCard;
use crate::config::HOTSPOT_GAP;
use crate::dom::Rect;
use crate::hooks::{popover_transition, use_anchored_position, AnchorPosition, HoverSlot};
use crate::motion::{self, AnimationHandle};

fn below_marker(marker: Rect) -> AnchorPosition {
    AnchorPosition::below_center(marker, HOTSPOT_GAP)
}

#[derive(Properties, PartialEq)]
pub struct HotspotPopoverProps {
    /// Product of the open marker; `None` while closed.
    pub product: Option<HotspotProduct>,
    pub marker: NodeRef,
    pub popover_ref: NodeRef,
    #[prop_or_default]
    pub onmouseenter: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub onmouseleave: Option<Callback<MouseEvent>>,
}

/// Floating card centered under a hotspot marker. Keeps showing the last
/// product while it fades out.
#[function_component(HotspotPopover)]
pub fn hotspot_popover(props: &HotspotPopoverProps) -> Html {
    let shown = use_mut_ref(|| None::<HotspotProduct>);
    let slot = use_mut_ref(HoverSlot::<AnimationHandle>::new);
    let body = use_node_ref();
    let open = props.product.is_some();
    if let Some(product) = props.product {
        *shown.borrow_mut() = Some(product);
    }

    use_anchored_position(props.marker.clone(), props.popover_ref.clone(), open, below_marker);

    {
        let body = body.clone();
        use_effect_with_deps(
            move |(open, _)| {
                let open = *open;
                slot.borrow_mut()
                    .restart(|| Some(popover_transition(motion::element(&body)?, open).play()));
                || ()
            },
            (open, props.product.map(|p| p.id)),
        );
    }

    let pointer_events = if open { "auto" } else { "none" };
    let product = *shown.borrow();
    html! {
        <div
            ref={props.popover_ref.clone()}
            class="hotspot-popover"
            style={format!("pointer-events: {};", pointer_events)}
            onmouseenter={props.onmouseenter.clone()}
            onmouseleave={props.onmouseleave.clone()}
        >
            <div class="hotspot-popover__center">
                <div ref={body} class="hotspot-popover__body" style="opacity: 0;">
                    if let Some(product) = product {
                        <HotspotCard {product} on_navigate={Callback::from(|id: u32| info!("Hotspot product clicked: {}", id))} />
                    }
                </div>
            </div>
        </div>
    }
}
