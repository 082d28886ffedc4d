use yew::prelude::*;

use crate::catalog::{QuoteRun, TESTIMONIAL};
use crate::components::pop_image::PopImage;
use crate::hooks::{use_entrance, use_revealed};
use crate::motion::{Ease, Position, Props, Timeline, Timing};

fn rise(distance: f64, duration: f64, delay: f64) -> (Props, Props, Timing) {
    (
        Props::new().opacity(0.0).y_px(distance),
        Props::new().opacity(1.0).y_px(0.0),
        Timing::new(duration, Ease::Power2Out).delay(delay),
    )
}

/// Cards, quote, stars and reviewer come in on their own delays, all measured
/// from the moment the section is revealed.
pub fn testimonial_entrance<T>(targets: Vec<T>) -> Timeline<T> {
    let steps = [
        rise(20.0, 0.8, 0.2),
        rise(20.0, 0.8, 0.4),
        (
            Props::new().opacity(0.0).scale(0.8),
            Props::new().opacity(1.0).scale(1.0),
            Timing::new(0.6, Ease::Power2Out).delay(0.6),
        ),
        rise(10.0, 0.6, 0.8),
    ];
    targets
        .into_iter()
        .zip(steps)
        .fold(Timeline::new(), |timeline, (target, (from, to, timing))| {
            timeline.from_to_at(target, from, to, timing, Position::At(0.0))
        })
}

fn quote(runs: &[QuoteRun]) -> Html {
    runs.iter()
        .map(|run| match run {
            QuoteRun::Plain(text) => html! { { *text } },
            QuoteRun::Emphasis(text) => html! { <em>{ *text }</em> },
        })
        .collect()
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let container = use_node_ref();
    let cards = use_node_ref();
    let text = use_node_ref();
    let stars = use_node_ref();
    let reviewer = use_node_ref();

    let revealed = use_revealed(container.clone());
    use_entrance(
        vec![cards.clone(), text.clone(), stars.clone(), reviewer.clone()],
        revealed,
        testimonial_entrance,
    );

    html! {
        <section ref={container} class="testimonials">
            <style>{r#"
                .testimonials {
                    background: #F2F2EF;
                    padding: 128px 48px;
                    text-align: center;
                }
                .testimonials__inner {
                    max-width: 896px;
                    margin: 0 auto;
                }
                .testimonials__cards {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 48px;
                }
                .testimonials__card {
                    position: relative;
                    z-index: 1;
                    width: 128px;
                    height: 160px;
                    border-radius: 8px;
                    overflow: hidden;
                    background: #9AB5A8;
                    border-left: 4px solid #fff;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                }
                .testimonials__card span {
                    position: absolute;
                    top: 8px;
                    right: 8px;
                    color: #fff;
                    font-size: 1.875rem;
                    font-weight: 700;
                }
                .testimonials__photo {
                    position: relative;
                    width: 112px;
                    height: 144px;
                    margin-left: -32px;
                    border-radius: 8px;
                    overflow: hidden;
                }
                .testimonials__quote {
                    font-size: clamp(1.25rem, 2.5vw, 1.875rem);
                    color: #171717;
                    line-height: 1.6;
                    margin-bottom: 32px;
                }
                .testimonials__stars {
                    display: flex;
                    justify-content: center;
                    gap: 4px;
                    margin-bottom: 24px;
                    color: #8B9A7A;
                }
                .testimonials__reviewer {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }
                .testimonials__badge {
                    color: #6b7280;
                    font-weight: 300;
                }
            "#}</style>
            <div class="testimonials__inner">
                <div ref={cards} class="testimonials__cards" style="opacity: 0;">
                    <div class="testimonials__card"><span>{ "9" }</span></div>
                    <PopImage
                        class="testimonials__photo"
                        src={TESTIMONIAL.image}
                        alt="Product"
                        delay={0.3}
                        play={revealed}
                    />
                </div>
                <p ref={text} class="testimonials__quote" style="opacity: 0;">
                    { quote(TESTIMONIAL.quote) }
                </p>
                <div ref={stars} class="testimonials__stars" style="opacity: 0;">
                    { for (0..TESTIMONIAL.stars).map(|i| html! {
                        <svg key={i} width="24" height="24" viewBox="0 0 20 20" fill="currentColor">
                            <path d="M9.05 2.93c.3-.92 1.6-.92 1.9 0l1.07 3.29a1 1 0 00.95.69h3.46c.97 0 1.37 1.24.59 1.81l-2.8 2.03a1 1 0 00-.36 1.12l1.07 3.3c.3.91-.76 1.68-1.54 1.11l-2.8-2.03a1 1 0 00-1.18 0l-2.8 2.03c-.78.57-1.84-.2-1.54-1.12l1.07-3.29a1 1 0 00-.36-1.12L2.98 8.72c-.78-.57-.38-1.81.59-1.81h3.46a1 1 0 00.95-.69l1.07-3.29z" />
                        </svg>
                    }) }
                </div>
                <div ref={reviewer} class="testimonials__reviewer" style="opacity: 0;">
                    <span>{ TESTIMONIAL.reviewer }</span>
                    <span class="testimonials__badge">{ TESTIMONIAL.badge }</span>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parts_start_on_their_own_delays() {
        let tl = testimonial_entrance(vec!["cards", "text", "stars", "reviewer"]);
        let starts: Vec<f64> = tl.tweens().iter().map(|t| t.start).collect();
        assert_eq!(starts, vec![0.2, 0.4, 0.6, 0.8]);
        assert_eq!(tl.tweens()[2].from.as_ref().and_then(|p| p.scale), Some(0.8));
        assert!((tl.duration() - 1.4).abs() < 1e-9);
    }

    #[test]
    fn missing_targets_are_skipped() {
        let tl = testimonial_entrance(vec!["cards"]);
        assert_eq!(tl.tweens().len(), 1);
    }
}
