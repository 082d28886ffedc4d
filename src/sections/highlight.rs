use web_sys::Element;
use yew::prelude::*;

use crate::catalog::{BENEFITS, REVIEWER_IMAGES, REVIEW_SUMMARY};
use crate::components::heading_text::HeadingText;
use crate::components::picture::{Fit, ObjectFit, Picture};
use crate::dom;
use crate::hooks::{use_entrance, use_intro_ready};
use crate::motion::{Ease, Position, Props, Timeline, Timing};

pub fn review_entrance<T>(targets: Vec<T>) -> Timeline<T> {
    targets.into_iter().fold(Timeline::new(), |timeline, review| {
        timeline.from_to(
            review,
            Props::new().opacity(0.0).x_px(20.0),
            Props::new().opacity(1.0).x_px(0.0),
            Timing::new(0.8, Ease::Power2Out).delay(0.4),
        )
    })
}

/// Panels rise into place one by one, 0.15s apart.
pub fn panels_stagger<T>(panels: Vec<T>) -> Timeline<T> {
    Timeline::new().stagger(
        panels,
        Some(Props::new().opacity(0.0).y_px(30.0)),
        Props::new().opacity(1.0).y_px(0.0),
        Timing::new(0.8, Ease::Power2Out).delay(0.6),
        0.15,
        Position::End,
    )
}

fn panels_entrance(grids: Vec<Element>) -> Timeline<Element> {
    let panels = grids.iter().flat_map(|grid| dom::query_all(grid, ":scope > *")).collect();
    panels_stagger(panels)
}

fn star() -> Html {
    html! {
        <svg width="15" height="15" viewBox="0 0 24 24" fill="#3C4433">
            <path d="M12 17.27L18.18 21l-1.64-7.03L22 9.24l-7.19-.61L12 2 9.19 8.63 2 9.24l5.46 4.73L5.82 21z" />
        </svg>
    }
}

#[function_component(Highlight)]
pub fn highlight() -> Html {
    let review = use_node_ref();
    let grid = use_node_ref();
    let ready = use_intro_ready();

    use_entrance(vec![review.clone()], ready, review_entrance);
    use_entrance(vec![grid.clone()], ready, panels_entrance);

    html! {
        <section class="highlight">
            <style>{r#"
                .highlight {
                    background: #F2F2EF;
                    padding: 64px;
                }
                .highlight__header {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-end;
                    margin-bottom: 48px;
                }
                .highlight__title,
                .highlight__subtitle {
                    font-size: clamp(2.5rem, 5vw, 4.5rem);
                    font-weight: 400;
                    margin: 0;
                }
                .highlight__subtitle {
                    font-style: italic;
                }
                .highlight__review {
                    display: flex;
                    flex-direction: column;
                    align-items: flex-end;
                    gap: 12px;
                }
                .highlight__rating {
                    display: flex;
                    align-items: center;
                    gap: 8px;
                }
                .highlight__avatars {
                    display: flex;
                }
                .highlight__avatar {
                    position: relative;
                    width: 64px;
                    height: 64px;
                    margin-left: -12px;
                    border: 3px solid #fff;
                    border-radius: 12px;
                    overflow: hidden;
                }
                .highlight__grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 24px;
                }
                .highlight__panel {
                    position: relative;
                    border-radius: 24px;
                    overflow: hidden;
                    background: #fff;
                    min-height: 320px;
                    padding: 32px;
                }
                .highlight__panel--video {
                    grid-row: span 2;
                    padding: 0;
                    color: #fff;
                }
                .highlight__panel video {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .highlight__overlay {
                    position: absolute;
                    left: 32px;
                    bottom: 32px;
                    max-width: 320px;
                }
                .highlight__panel-title {
                    font-size: 2rem;
                    margin: 8px 0 0;
                }
                .highlight__panel-subtitle {
                    font-size: 2rem;
                    font-style: italic;
                    margin: 0 0 12px;
                }
                .highlight__bullets {
                    display: flex;
                    flex-direction: column;
                    gap: 8px;
                    position: relative;
                }
            "#}</style>
            <div class="highlight__header">
                <div>
                    <h2 class="highlight__title"><HeadingText text="Why Your Skin" delay={0.2} /></h2>
                    <h3 class="highlight__subtitle"><HeadingText text="Deserves the Best" delay={0.3} /></h3>
                </div>
                <div ref={review} class="highlight__review">
                    <div class="highlight__rating">
                        <div>{ for (0..5).map(|_| star()) }</div>
                        <span>{ REVIEW_SUMMARY.label() }</span>
                    </div>
                    <div class="highlight__avatars">
                        { for REVIEWER_IMAGES.iter().enumerate().map(|(i, (src, tilt))| html! {
                            <div
                                key={*src}
                                class="highlight__avatar"
                                style={format!("z-index: {}; transform: rotate({}deg);", i + 1, tilt)}
                            >
                                <Picture src={*src} alt={format!("Reviewer {}", i + 1)} fit={Fit::Fill(ObjectFit::Cover)} />
                            </div>
                        }) }
                    </div>
                </div>
            </div>

            <div ref={grid} class="highlight__grid">
                <div class="highlight__panel highlight__panel--video">
                    <video autoplay=true loop=true muted=true playsinline=true>
                        <source src="/images/highlightvideo.mp4" type="video/mp4" />
                    </video>
                    <div class="highlight__overlay">
                        <svg width="24" height="24" viewBox="0 0 24 24" fill="currentColor">
                            <path d="M9 16.17L4.83 12l-1.42 1.41L9 19 21 7l-1.41-1.41L9 16.17z" />
                        </svg>
                        <h4 class="highlight__panel-title">{ "Proven" }</h4>
                        <h5 class="highlight__panel-subtitle">{ "Effectiveness" }</h5>
                        <p>{ "Every product is carefully crafted to meet the highest quality standards." }</p>
                    </div>
                </div>
                <div class="highlight__panel">
                    <svg width="32" height="32" viewBox="0 0 24 24" fill="currentColor">
                        <path d="M5 7h14l-1 5H6l-1-5zm1.5-2L7 2h10l.5 3H6.5zM7 20c-1.1 0-2-.9-2-2s.9-2 2-2 2 .9 2 2-.9 2-2 2zm10 0c-1.1 0-2-.9-2-2s.9-2 2-2 2 .9 2 2-.9 2-2 2z" />
                    </svg>
                    <h4 class="highlight__panel-title">{ "Eco-Friendly" }</h4>
                    <h5 class="highlight__panel-subtitle">{ "Packaging" }</h5>
                    <p>{ "Eco-friendly materials designed to care" }</p>
                    <p>{ "for the planet as much as your skin." }</p>
                    <Picture src="/images/highlightimage3.webp" alt="Eco-Friendly Packaging" fit={Fit::Fixed { width: 160, height: 200 }} />
                </div>
                <div class="highlight__panel">
                    <Picture src="/images/highlightimage1.webp" alt="100% Natural" fit={Fit::Fill(ObjectFit::Cover)} />
                    <h4 class="highlight__panel-title">{ "100%" }</h4>
                    <h5 class="highlight__panel-subtitle">{ "Natural" }</h5>
                    <div class="highlight__bullets">
                        { for BENEFITS.iter().map(|item| html! {
                            <p key={item.text}>{ item.text }</p>
                        }) }
                    </div>
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
    fn panels_follow_each_other() {
        let tl = panels_stagger(vec!["video", "packaging", "natural"]);
        let starts: Vec<f64> = tl.tweens().iter().map(|t| t.start).collect();
        let expected = [0.6, 0.75, 0.9];
        for (got, want) in starts.iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "{} != {}", got, want);
        }
        assert_eq!(tl.tweens()[2].from.as_ref().and_then(|p| p.opacity), Some(0.0));
    }

    #[test]
    fn review_slides_in_from_the_right() {
        let tl = review_entrance(vec!["review"]);
        let tween = &tl.tweens()[0];
        assert_eq!(tween.start, 0.4);
        assert_eq!(tween.from.as_ref().and_then(|p| p.x), Some(crate::motion::Length::Px(20.0)));
    }
}
