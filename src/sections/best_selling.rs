use log::info;
use yew::prelude::*;

use crate::catalog::{best_selling, Category};
use crate::components::heading_text::HeadingText;
use crate::components::picture::ObjectFit;
use crate::components::pop_image::{PopImage, Tilt};
use crate::components::product_card::ProductCard;
use crate::hooks::{use_entrance, use_revealed};
use crate::motion::{Ease, Position, Props, Timeline, Timing};

/// Heading lines fade in one after another, 0.2s apart.
pub fn lines_entrance<T>(lines: Vec<T>) -> Timeline<T> {
    lines.into_iter().enumerate().fold(Timeline::new(), |timeline, (i, line)| {
        timeline.to_at(
            line,
            Props::new().opacity(1.0),
            Timing::new(0.5, Ease::Power2Out).delay(0.2 * i as f64),
            Position::At(0.0),
        )
    })
}

#[function_component(BestSelling)]
pub fn best_selling_section() -> Html {
    let container = use_node_ref();
    let line1 = use_node_ref();
    let line2 = use_node_ref();
    let category = use_state(|| Category::Cleansers);

    let revealed = use_revealed(container.clone());
    use_entrance(vec![line1.clone(), line2.clone()], revealed, lines_entrance);

    let on_product = Callback::from(|id: u32| info!("Product clicked: {}", id));
    let on_favorite = Callback::from(|id: u32| info!("Favorite clicked: {}", id));

    html! {
        <section ref={container} class="best-selling">
            <style>{r#"
                .best-selling {
                    background: #F2F2EF;
                    padding: 64px 48px;
                    text-align: center;
                }
                .best-selling__line {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: center;
                    gap: 16px;
                    margin-bottom: 24px;
                    font-size: clamp(1.875rem, 4vw, 3.75rem);
                    font-style: italic;
                    font-weight: 400;
                }
                .best-selling__thumb {
                    position: relative;
                    width: 64px;
                    height: 64px;
                    border: 5px solid #fff;
                    border-radius: 8px;
                    overflow: hidden;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }
                .best-selling__bottle {
                    position: relative;
                    width: 96px;
                    height: 96px;
                }
                .best-selling__tabs {
                    display: flex;
                    justify-content: center;
                    gap: 12px;
                    margin-top: 64px;
                }
                .best-selling__tab {
                    border: none;
                    border-radius: 6px;
                    padding: 6px 12px;
                    background: #DBDBD1;
                    color: #374151;
                    cursor: pointer;
                    transition: all 0.3s ease-in-out;
                }
                .best-selling__tab--active {
                    background: #3C4433;
                    color: #fff;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                }
                .best-selling__grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 32px;
                    max-width: 1152px;
                    margin: 64px auto 0;
                }
            "#}</style>
            <div ref={line1} class="best-selling__line" style="opacity: 0;">
                <HeadingText text="Refresh your skin," delay={0.5} armed={revealed} />
                <PopImage
                    class="best-selling__thumb"
                    src="/images/himage1.webp"
                    alt="Healthy skin"
                    delay={1.2}
                    tilt={Tilt { from: -5.0, to: 8.0 }}
                    play={revealed}
                />
                <HeadingText text="love yourself," delay={1.4} armed={revealed} />
                <PopImage
                    class="best-selling__thumb"
                    src="/images/himage2.webp"
                    alt="Radiant skin"
                    delay={2.1}
                    tilt={Tilt { from: 5.0, to: -8.0 }}
                    play={revealed}
                />
            </div>
            <div ref={line2} class="best-selling__line" style="opacity: 0;">
                <HeadingText text="renew your glow." delay={2.5} armed={revealed} />
                <PopImage
                    class="best-selling__bottle"
                    src="/images/himage3.png"
                    alt="Kanva bottle"
                    delay={3.2}
                    play={revealed}
                    object_fit={ObjectFit::Contain}
                />
            </div>

            <div class="best-selling__tabs">
                { for Category::ALL.iter().map(|tab| {
                    let tab = *tab;
                    let category = category.clone();
                    let active = *category == tab;
                    let onclick = Callback::from(move |_: MouseEvent| category.set(tab));
                    html! {
                        <button
                            key={tab.label()}
                            class={classes!("best-selling__tab", active.then_some("best-selling__tab--active"))}
                            {onclick}
                        >
                            { tab.label() }
                        </button>
                    }
                }) }
            </div>

            <div class="best-selling__grid">
                { for best_selling(*category).iter().map(|product| html! {
                    <ProductCard
                        key={product.id}
                        product={*product}
                        on_click={on_product.clone()}
                        on_favorite={on_favorite.clone()}
                    />
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_line_trails_the_first() {
        let tl = lines_entrance(vec!["line1", "line2"]);
        let starts: Vec<f64> = tl.tweens().iter().map(|t| t.start).collect();
        assert_eq!(starts, vec![0.0, 0.2]);
        assert!((tl.duration() - 0.7).abs() < 1e-9);
    }
}
