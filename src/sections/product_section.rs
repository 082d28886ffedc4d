use yew::prelude::*;

use crate::catalog::{SHOWCASE_HOTSPOTS, SHOWCASE_IMAGE};
use crate::components::hotspot_popover::HotspotPopover;
use crate::components::picture::{Fit, ObjectFit, Picture};
use crate::hooks::{use_entrance, use_hover_intent, use_outside_click, PanelAction, PanelGroup};
use crate::motion::{Ease, Props, Timeline, Timing};

pub fn showcase_entrance<T>(targets: Vec<T>) -> Timeline<T> {
    targets.into_iter().fold(Timeline::new(), |timeline, image| {
        timeline.from_to(
            image,
            Props::new().opacity(0.0).scale(0.9),
            Props::new().opacity(1.0).scale(1.0),
            Timing::new(1.0, Ease::Power2Out).delay(0.2),
        )
    })
}

/// Showcase photo with hotspot markers. Hovering a marker previews its
/// product, clicking pins the card open until clicked again or elsewhere.
#[function_component(ProductSection)]
pub fn product_section() -> Html {
    let image = use_node_ref();
    let popover_ref = use_node_ref();
    let markers = use_memo(|_| SHOWCASE_HOTSPOTS.iter().map(|_| NodeRef::default()).collect::<Vec<_>>(), ());

    let hotspots = use_reducer(PanelGroup::<usize>::default);
    let intent = use_hover_intent(&hotspots);

    use_entrance(vec![image.clone()], true, showcase_entrance);

    let mut zones = (*markers).clone();
    zones.push(popover_ref.clone());
    use_outside_click(&hotspots, zones);

    let open = hotspots.open_key();
    let product = open.and_then(|key| SHOWCASE_HOTSPOTS.get(key)).map(|hotspot| hotspot.product);
    let marker = open.and_then(|key| markers.get(key).cloned()).unwrap_or_default();

    html! {
        <section class="product-section">
            <style>{r#"
                .product-section {
                    background: #F2F2EF;
                    padding: 64px 48px;
                }
                .product-section__frame {
                    position: relative;
                    max-width: 1280px;
                    aspect-ratio: 16 / 9;
                    margin: 0 auto;
                    border-radius: 32px;
                    overflow: hidden;
                }
                .product-section__marker {
                    position: absolute;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 32px;
                    height: 32px;
                    margin: -16px 0 0 -16px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .product-section__dot {
                    width: 12px;
                    height: 12px;
                    border-radius: 50%;
                    border: 2px solid #fff;
                    background: rgba(255, 255, 255, 0.8);
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    transition: transform 0.3s;
                }
                .product-section__marker:hover .product-section__dot,
                .product-section__marker--open .product-section__dot {
                    transform: scale(1.25);
                }
            "#}</style>
            <div class="product-section__frame">
                <div ref={image} style="position: absolute; inset: 0;">
                    <Picture src={SHOWCASE_IMAGE} alt="Kanva products" fit={Fit::Fill(ObjectFit::Cover)} />
                </div>
                { for SHOWCASE_HOTSPOTS.iter().zip(markers.iter()).enumerate().map(|(key, (hotspot, marker))| {
                    let hotspots = hotspots.clone();
                    let onclick = Callback::from(move |_: MouseEvent| hotspots.dispatch(PanelAction::Click(key)));
                    html! {
                        <button
                            key={key}
                            ref={marker.clone()}
                            class={classes!("product-section__marker", (open == Some(key)).then_some("product-section__marker--open"))}
                            style={format!("top: {}%; left: {}%;", hotspot.top, hotspot.left)}
                            aria-label={hotspot.product.name}
                            onmouseenter={intent.enter(key)}
                            onmouseleave={intent.leave(key)}
                            {onclick}
                        >
                            <span class="product-section__dot" />
                        </button>
                    }
                }) }
            </div>
            <HotspotPopover
                {product}
                {marker}
                {popover_ref}
                onmouseenter={intent.stay()}
                onmouseleave={open.map(|key| intent.leave(key))}
            />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn image_scales_up_from_ninety_percent() {
        let tl = showcase_entrance(vec!["image"]);
        let tween = &tl.tweens()[0];
        assert_eq!(tween.from.as_ref().and_then(|p| p.scale), Some(0.9));
        assert_eq!(tween.start, 0.2);
        assert!((tl.duration() - 1.2).abs() < 1e-9);
    }
}
