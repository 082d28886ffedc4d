use yew::prelude::*;

use crate::catalog::{BenefitIcon, BENEFITS, BENEFIT_BODY};
use crate::components::heading_text::HeadingText;
use crate::components::picture::{Fit, ObjectFit, Picture};
use crate::hooks::{use_entrance, use_intro_ready, use_revealed};
use crate::motion::{Ease, Position, Props, Timeline, Timing};

/// Banner settles in from slightly smaller once the intro is over.
pub fn banner_entrance<T>(targets: Vec<T>) -> Timeline<T> {
    targets.into_iter().fold(Timeline::new(), |timeline, banner| {
        timeline.from_to(
            banner,
            Props::new().opacity(0.0).scale(0.95),
            Props::new().opacity(1.0).scale(1.0),
            Timing::new(1.0, Ease::Power2Out).delay(0.2),
        )
    })
}

pub fn fade_in<T>(targets: Vec<T>) -> Timeline<T> {
    Timeline::new().stagger(
        targets,
        None,
        Props::new().opacity(1.0),
        Timing::new(0.5, Ease::Power2Out),
        0.0,
        Position::End,
    )
}

fn icon(kind: BenefitIcon) -> Html {
    let path = match kind {
        BenefitIcon::NoChemicals => "M12 3a9 9 0 1 0 0 18 9 9 0 0 0 0-18zM5.6 5.6l12.8 12.8",
        BenefitIcon::PlantBased => "M5 21c0-9 5-14 14-16-1 9-6 14-14 16zm0 0l7-7",
        BenefitIcon::Ethical => "M12 21s-7-4.5-9.5-9A5.5 5.5 0 0 1 12 6a5.5 5.5 0 0 1 9.5 6c-2.5 4.5-9.5 9-9.5 9z",
    };
    html! {
        <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5">
            <path d={path} />
        </svg>
    }
}

#[function_component(Benefit)]
pub fn benefit() -> Html {
    let banner = use_node_ref();
    let headline = use_node_ref();
    let ready = use_intro_ready();
    let revealed = use_revealed(banner.clone());

    use_entrance(vec![banner.clone()], ready, banner_entrance);
    use_entrance(vec![headline.clone()], revealed, fade_in);

    html! {
        <section class="benefit">
            <style>{r#"
                .benefit {
                    background: #F2F2EF;
                    padding: 64px;
                }
                .benefit__banner {
                    position: relative;
                    width: 100%;
                    aspect-ratio: 21 / 9;
                    border-radius: 32px;
                    overflow: hidden;
                }
                .benefit__shade {
                    position: absolute;
                    left: 0;
                    top: 0;
                    bottom: 0;
                    width: 40%;
                    background: linear-gradient(to right, rgba(0, 0, 0, 0.6), rgba(0, 0, 0, 0.4), transparent);
                }
                .benefit__copy {
                    position: absolute;
                    left: 7rem;
                    top: 50%;
                    transform: translateY(-50%);
                    max-width: 42rem;
                    color: #e5e7eb;
                }
                .benefit__title {
                    font-size: clamp(3rem, 6vw, 6rem);
                    font-weight: 400;
                    color: #fff;
                    margin: 0;
                }
                .benefit__subtitle {
                    font-size: clamp(3rem, 6vw, 6rem);
                    font-weight: 300;
                    font-style: italic;
                    margin: 0;
                }
                .benefit__body {
                    font-size: 1.5rem;
                    line-height: 1.6;
                    opacity: 0.75;
                }
                .benefit__items {
                    padding-top: 48px;
                    display: flex;
                    flex-direction: column;
                    gap: 16px;
                }
                .benefit__item {
                    display: flex;
                    align-items: center;
                    gap: 16px;
                    opacity: 0.75;
                }
            "#}</style>
            <div ref={banner} class="benefit__banner">
                <Picture
                    src="/images/benifitimage.webp"
                    alt="Natural skincare benefits"
                    fit={Fit::Fill(ObjectFit::Cover)}
                    priority=true
                />
                <div class="benefit__shade" />
                <div class="benefit__copy">
                    <div ref={headline} style="opacity: 0;">
                        <h2 class="benefit__title">
                            <HeadingText text="Eco-Friendly," delay={0.4} armed={revealed} />
                        </h2>
                        <h3 class="benefit__subtitle">
                            <HeadingText text="Skin-Friendly" delay={0.5} armed={revealed} />
                        </h3>
                    </div>
                    <div class="benefit__body">
                        { for BENEFIT_BODY.iter().map(|line| html! { <div key={*line}>{ *line }</div> }) }
                    </div>
                    <div class="benefit__items">
                        { for BENEFITS.iter().map(|item| html! {
                            <div key={item.text} class="benefit__item">
                                { icon(item.icon) }
                                <span>{ item.text }</span>
                            </div>
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
    fn banner_grows_in_after_a_beat() {
        let tl = banner_entrance(vec!["banner"]);
        let tween = &tl.tweens()[0];
        assert_eq!(tween.start, 0.2);
        assert_eq!(tween.from.as_ref().and_then(|p| p.scale), Some(0.95));
        assert_eq!(tween.to.opacity, Some(1.0));
    }

    #[test]
    fn headline_fades_from_current() {
        let tl = fade_in(vec!["headline"]);
        assert!(tl.tweens()[0].from.is_none());
        assert!((tl.duration() - 0.5).abs() < 1e-9);
    }
}
