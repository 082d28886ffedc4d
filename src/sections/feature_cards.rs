use yew::prelude::*;

use crate::catalog::{FeatureIcon, FEATURES};

fn icon(kind: FeatureIcon) -> Html {
    let path = match kind {
        FeatureIcon::Formula => "M12 3c-3 4-6 7-6 11a6 6 0 0 0 12 0c0-4-3-7-6-11z",
        FeatureIcon::CrueltyFree => "M8 4c-1.5 0-2.5 2-2.5 4S7 11 8 11s2.5-1 2.5-3S9.5 4 8 4zm8 0c-1.5 0-2.5 2-2.5 4s1.5 3 2.5 3 2.5-1 2.5-3-1-4-2.5-4zM12 13c-3 0-6 2.5-6 5.5 0 1.5 1.5 2.5 3 2.5h6c1.5 0 3-1 3-2.5 0-3-3-5.5-6-5.5z",
        FeatureIcon::Approved => "M12 2l3 3h4v4l3 3-3 3v4h-4l-3 3-3-3H5v-4l-3-3 3-3V5h4l3-3zm-3 10l2 2 4-4",
        FeatureIcon::Shipping => "M3 6h11v9H3zM14 9h4l3 3v3h-7zM7 18a2 2 0 1 0 0-4 2 2 0 0 0 0 4zm10 0a2 2 0 1 0 0-4 2 2 0 0 0 0 4z",
    };
    html! {
        <svg class="feature-card__icon" width="32" height="32" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5">
            <path d={path} />
        </svg>
    }
}

#[function_component(FeatureCards)]
pub fn feature_cards() -> Html {
    html! {
        <section class="feature-cards">
            <style>{r#"
                .feature-cards {
                    background: #F2F2EF;
                    padding: 64px 48px;
                }
                .feature-cards__grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 24px;
                    max-width: 1280px;
                    margin: 0 auto;
                }
                .feature-card {
                    background: #fff;
                    border-radius: 16px;
                    padding: 32px;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                }
                .feature-card__title {
                    font-size: 1.5rem;
                    margin: 16px 0 12px;
                }
                .feature-card__description {
                    color: #4b5563;
                    line-height: 1.6;
                }
            "#}</style>
            <div class="feature-cards__grid">
                { for FEATURES.iter().map(|feature| html! {
                    <div key={feature.title} class="feature-card">
                        { icon(feature.icon) }
                        <h3 class="feature-card__title">{ feature.title }</h3>
                        <p class="feature-card__description">{ feature.description }</p>
                    </div>
                }) }
            </div>
        </section>
    }
}
