use std::rc::Rc;

use yew::prelude::*;

use crate::catalog::Collection;
use crate::components::picture::{Fit, ObjectFit, Picture};
use crate::hooks::{use_hover_timeline, HoverTrigger, TimelineBuilder};
use crate::motion::{self, Ease, Position, Props, Timeline, Timing};

/// Image zoom and arrow nudge, started together.
pub fn collection_hover<T>(image: T, arrow: T, hovered: bool) -> Timeline<T> {
    let timing = Timing::new(0.3, Ease::Power2Out);
    let (scale, shift) = if hovered { (1.05, 5.0) } else { (1.0, 0.0) };
    Timeline::new()
        .to(image, Props::new().scale(scale), timing)
        .to_at(arrow, Props::new().x_px(shift), timing, Position::WithPrevious(0.0))
}

fn hover_builder(image: NodeRef, arrow: NodeRef, hovered: bool) -> TimelineBuilder {
    Rc::new(move || {
        Some(collection_hover(
            motion::element(&image)?,
            motion::element(&arrow)?,
            hovered,
        ))
    })
}

#[derive(Properties, PartialEq)]
pub struct CollectionCardProps {
    pub collection: Collection,
    pub on_click: Callback<()>,
}

#[function_component(CollectionCard)]
pub fn collection_card(props: &CollectionCardProps) -> Html {
    let card = use_node_ref();
    let image = use_node_ref();
    let arrow = use_node_ref();
    let collection = props.collection;

    use_hover_timeline(
        HoverTrigger::Node(card.clone()),
        hover_builder(image.clone(), arrow.clone(), true),
        hover_builder(image.clone(), arrow.clone(), false),
    );

    html! {
        <a
            ref={card}
            href={collection.href}
            class="collection-card"
            onclick={props.on_click.reform(|_: MouseEvent| ())}
        >
            <div ref={image} class="collection-card__image">
                <Picture src={collection.image} alt={collection.name} fit={Fit::Fill(ObjectFit::Cover)} />
            </div>
            <div class="collection-card__caption">
                <span>{ collection.name }</span>
                <span ref={arrow} class="collection-card__arrow">{ "→" }</span>
            </div>
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Length;

    #[test]
    fn image_and_arrow_move_in_sync() {
        let tl = collection_hover("image", "arrow", true);
        let tweens = tl.tweens();
        assert_eq!(tweens[0].to.scale, Some(1.05));
        assert_eq!(tweens[1].to.x, Some(Length::Px(5.0)));
        assert_eq!(tweens[0].start, tweens[1].start);

        let tl = collection_hover("image", "arrow", false);
        assert_eq!(tl.tweens()[0].to.scale, Some(1.0));
        assert_eq!(tl.tweens()[1].to.x, Some(Length::Px(0.0)));
    }
}
