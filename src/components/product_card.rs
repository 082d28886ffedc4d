use std::rc::Rc;

use yew::prelude::*;

use crate::catalog::Product;
use crate::components::picture::{Fit, ObjectFit, Picture};
use crate::hooks::{use_hover_timeline, HoverTrigger, TimelineBuilder};
use crate::motion::{self, Ease, Position, Props, Timeline, Timing};

/// Swaps the packshot for the lifestyle shot while hovered.
pub fn crossfade<T>(primary: T, secondary: T, hovered: bool) -> Timeline<T> {
    let timing = Timing::new(0.3, Ease::Power2Out);
    let (primary_to, secondary_to) = if hovered { (0.0, 1.0) } else { (1.0, 0.0) };
    Timeline::new()
        .to(primary, Props::new().opacity(primary_to), timing)
        .to_at(secondary, Props::new().opacity(secondary_to), timing, Position::WithPrevious(0.0))
}

fn crossfade_builder(primary: NodeRef, secondary: NodeRef, hovered: bool) -> TimelineBuilder {
    Rc::new(move || {
        Some(crossfade(
            motion::element(&primary)?,
            motion::element(&secondary)?,
            hovered,
        ))
    })
}

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub product: Product,
    #[prop_or_default]
    pub favorite: bool,
    #[prop_or_default]
    pub on_click: Option<Callback<u32>>,
    #[prop_or_default]
    pub on_favorite: Option<Callback<u32>>,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let favorited = use_state(|| props.favorite);
    let card = use_node_ref();
    let primary = use_node_ref();
    let secondary = use_node_ref();
    let product = props.product;

    use_hover_timeline(
        HoverTrigger::Node(card.clone()),
        crossfade_builder(primary.clone(), secondary.clone(), true),
        crossfade_builder(primary.clone(), secondary.clone(), false),
    );

    let on_favorite = {
        let favorited = favorited.clone();
        let callback = props.on_favorite.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            favorited.set(!*favorited);
            if let Some(callback) = &callback {
                callback.emit(product.id);
            }
        })
    };

    let on_card = {
        let callback = props.on_click.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(callback) = &callback {
                callback.emit(product.id);
            }
        })
    };

    let image = match product.image {
        Some(src) => html! {
            <div class="product-card__images">
                <div ref={primary} class="product-card__image">
                    <Picture src={src} alt={product.name} fit={Fit::Fill(ObjectFit::Contain)} />
                </div>
                if let Some(hover) = product.hover_image {
                    <div ref={secondary} class="product-card__image product-card__image--hover" style="opacity: 0;">
                        <Picture src={hover} alt={product.name} fit={Fit::Fill(ObjectFit::Cover)} />
                    </div>
                }
            </div>
        },
        None => html! {
            <div class="product-card__placeholder">
                <div class="bottle">
                    <div class="bottle__label">
                        <span class="bottle__brand">{"kanva"}</span>
                    </div>
                    <div class="bottle__pump" />
                </div>
            </div>
        },
    };

    html! {
        <div ref={card} class="product-card" onclick={on_card}>
            <button
                class={classes!("product-card__favorite", (*favorited).then_some("product-card__favorite--on"))}
                aria-label="Add to favorites"
                onclick={on_favorite}
            >
                <svg fill={if *favorited { "currentColor" } else { "none" }} viewBox="0 0 24 24" stroke="currentColor" stroke-width="1.5">
                    <path
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        d="M21 8.25c0-2.485-2.099-4.5-4.688-4.5-1.935 0-3.597 1.126-4.312 2.733-.715-1.607-2.377-2.733-4.312-2.733C5.1 3.75 3 5.765 3 8.25c0 7.22 9 12 9 12s9-4.78 9-12Z"
                    />
                </svg>
            </button>
            if let Some(discount) = product.discount {
                <div class="product-card__discount">{ discount }</div>
            }
            { image }
            <h3 class="product-card__name">{ product.name }</h3>
            <p class="product-card__price">{ product.price }</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crossfade_runs_both_images_together() {
        let tl = crossfade("packshot", "lifestyle", true);
        let tweens = tl.tweens();
        assert_eq!(tweens[0].to.opacity, Some(0.0));
        assert_eq!(tweens[1].to.opacity, Some(1.0));
        assert_eq!(tweens[0].start, tweens[1].start);

        let back = crossfade("packshot", "lifestyle", false);
        assert_eq!(back.tweens()[0].to.opacity, Some(1.0));
        assert!((back.duration() - 0.3).abs() < 1e-9);
    }
}
