use std::rc::Rc;

use yew::prelude::*;

use crate::catalog::HotspotProduct;
use crate::components::arrow_swap::ArrowSwap;
use crate::components::picture::{Fit, Picture};
use crate::hooks::{use_hover_timeline, HoverTrigger, TimelineBuilder};
use crate::motion::{self, Ease, Props, Timeline, Timing};

fn zoom(image: NodeRef, scale: f64) -> TimelineBuilder {
    Rc::new(move || {
        let image = motion::element(&image)?;
        Some(Timeline::new().to(image, Props::new().scale(scale), Timing::new(0.3, Ease::Power2Out)))
    })
}

#[derive(Properties, PartialEq)]
pub struct HotspotCardProps {
    pub product: HotspotProduct,
    #[prop_or_default]
    pub on_navigate: Option<Callback<u32>>,
}

/// Compact product card shown in a hotspot popover.
#[function_component(HotspotCard)]
pub fn hotspot_card(props: &HotspotCardProps) -> Html {
    let card = use_node_ref();
    let image = use_node_ref();
    let product = props.product;

    use_hover_timeline(HoverTrigger::Node(card.clone()), zoom(image.clone(), 1.1), zoom(image.clone(), 1.0));

    let onclick = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            // Clicks inside the popover must not count as outside clicks.
            e.stop_propagation();
            if let Some(on_navigate) = &on_navigate {
                on_navigate.emit(product.id);
            }
        })
    };

    html! {
        <div ref={card} class="hotspot-card" data-hover-card="true" {onclick}>
            <div class="hotspot-card__thumb">
                <div ref={image} class="hotspot-card__image">
                    if let Some(src) = product.image {
                        <Picture src={src} alt={product.name} fit={Fit::Fixed { width: 80, height: 80 }} />
                    } else {
                        <div class="bottle bottle--small"><div class="bottle__pump" /></div>
                    }
                </div>
            </div>
            <div class="hotspot-card__details">
                <p class="hotspot-card__category">{ product.category }</p>
                <div class="hotspot-card__title">
                    <h3>{ product.name }</h3>
                    <ArrowSwap class="hotspot-card__arrow" />
                </div>
                <p class="hotspot-card__price">{ product.price }</p>
            </div>
        </div>
    }
}
