use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

/// Page-wide reset plus the styles of the shared components. Section layout
/// lives next to each section.
#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    html! {
        <Global css={css!(r#"
            *, *::before, *::after {
                box-sizing: border-box;
            }
            body {
                margin: 0;
                background: #F2F2EF;
                color: #171717;
                font-family: "Figtree", Arial, Helvetica, sans-serif;
                -webkit-font-smoothing: antialiased;
            }
            a {
                color: inherit;
                text-decoration: none;
            }
            h1, h2, h3, h4, h5 {
                font-family: "Sentient", Georgia, serif;
            }

            .animated-link {
                display: inline-block;
                position: relative;
                overflow: hidden;
                line-height: 1.2;
            }
            .animated-link__stack {
                display: block;
                position: relative;
            }
            .animated-link__line {
                display: block;
            }
            .animated-link__line--spare {
                position: absolute;
                left: 0;
                top: 0;
            }

            .arrow-swap {
                position: relative;
                display: inline-flex;
                width: 1em;
                height: 1em;
                overflow: hidden;
            }
            .arrow-swap__arrow {
                position: absolute;
                inset: 0;
            }

            .heading-text {
                display: inline-block;
            }
            .char-split {
                white-space: pre;
                will-change: transform, opacity, filter;
            }

            .panel-overlay {
                position: fixed;
                inset: 0;
                top: 112px;
                background: rgba(0, 0, 0, 0.25);
                opacity: 0;
                z-index: 40;
            }
            .panel-container {
                position: fixed;
                z-index: 45;
            }
            .panel-content {
                background: #F2F2EF;
                color: #171717;
                border-radius: 16px;
                padding: 24px;
                box-shadow: 0 20px 40px rgba(0, 0, 0, 0.15);
                opacity: 0;
            }
            .shop-dropdown__layout {
                display: flex;
                gap: 32px;
            }
            .shop-dropdown__links {
                display: flex;
                flex-direction: column;
                gap: 8px;
            }
            .shop-dropdown__products,
            .collection-dropdown__grid {
                display: flex;
                gap: 16px;
            }
            .country-selector__list {
                display: flex;
                flex-direction: column;
                gap: 4px;
            }
            .country-selector__option {
                display: flex;
                align-items: center;
                gap: 8px;
                padding: 8px 12px;
                border: none;
                border-radius: 8px;
                background: none;
                cursor: pointer;
            }
            .country-selector__option:hover {
                background: #DBDBD1;
            }

            .product-card {
                position: relative;
                display: flex;
                flex-direction: column;
                gap: 8px;
                cursor: pointer;
                text-align: left;
            }
            .product-card__images {
                position: relative;
                aspect-ratio: 4 / 5;
                border-radius: 16px;
                overflow: hidden;
                background: #E8E8E2;
            }
            .product-card__image {
                position: absolute;
                inset: 0;
            }
            .product-card__discount {
                position: absolute;
                top: 12px;
                left: 12px;
                z-index: 1;
                padding: 4px 8px;
                border-radius: 6px;
                background: #3C4433;
                color: #fff;
                font-size: 0.75rem;
            }
            .product-card__favorite {
                position: absolute;
                top: 12px;
                right: 12px;
                z-index: 1;
                border: none;
                background: rgba(255, 255, 255, 0.8);
                border-radius: 50%;
                width: 32px;
                height: 32px;
                cursor: pointer;
            }
            .product-card__favorite--on {
                color: #b91c1c;
            }
            .product-card__placeholder {
                display: flex;
                align-items: center;
                justify-content: center;
                height: 100%;
            }

            .bottle {
                position: relative;
                width: 56px;
                height: 120px;
                border-radius: 999px 999px 12px 12px;
                background: linear-gradient(#115e59, #134e4a, #115e59);
            }
            .bottle--small {
                width: 28px;
                height: 60px;
            }
            .bottle__pump {
                position: absolute;
                top: -6px;
                left: 50%;
                width: 10px;
                height: 8px;
                transform: translateX(-50%);
                border-radius: 999px 999px 0 0;
                background: #000;
            }
            .bottle__label {
                position: absolute;
                top: 25%;
                left: 50%;
                width: 60%;
                height: 30%;
                transform: translateX(-50%);
                background: rgba(255, 255, 255, 0.2);
            }
            .bottle__brand {
                position: absolute;
                bottom: 12px;
                width: 100%;
                text-align: center;
                color: #fff;
                font-size: 0.5rem;
            }

            .collection-card {
                display: flex;
                flex-direction: column;
                gap: 12px;
                width: 220px;
            }
            .collection-card__image {
                position: relative;
                aspect-ratio: 1;
                border-radius: 12px;
                overflow: hidden;
            }
            .collection-card__caption {
                display: flex;
                justify-content: space-between;
            }

            .hotspot-popover {
                position: fixed;
                z-index: 30;
            }
            .hotspot-popover__center {
                transform: translateX(-50%);
            }
            .hotspot-card {
                display: flex;
                gap: 12px;
                width: 280px;
                padding: 12px;
                border-radius: 12px;
                background: #fff;
                box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15);
                cursor: pointer;
            }
            .hotspot-card__thumb {
                position: relative;
                flex-shrink: 0;
                border-radius: 8px;
                overflow: hidden;
                background: #E8E8E2;
            }
            .hotspot-card__details {
                display: flex;
                flex-direction: column;
                justify-content: center;
                flex: 1;
            }
            .hotspot-card__category {
                font-size: 0.75rem;
                color: #6b7280;
            }
            .hotspot-card__arrow {
                align-self: center;
            }

            .pop-image__inner {
                position: relative;
                width: 100%;
                height: 100%;
            }

            .intro-loader {
                position: fixed;
                inset: 0;
                z-index: 100;
                background: #F2F2EF;
            }
            .intro-loader__overlay {
                position: absolute;
                inset: 0;
                background: #3C4433;
            }
            .intro-loader__center {
                position: absolute;
                inset: 0;
                display: flex;
                align-items: center;
                justify-content: center;
            }
            .intro-loader__wordmark {
                font-family: "Sentient", Georgia, serif;
                font-size: 3rem;
                color: #fff;
            }
        "#)} />
    }
}
