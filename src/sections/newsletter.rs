use log::{debug, info};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::picture::{Fit, ObjectFit, Picture};
use crate::error::EmailError;
use crate::hooks::{use_entrance, use_revealed};
use crate::motion::{Ease, Position, Props, Timeline, Timing};

/// Trims the input and checks it looks like an address.
pub fn validate_email(input: &str) -> Result<String, EmailError> {
    let email = input.trim();
    if email.is_empty() {
        return Err(EmailError::Blank);
    }
    if !email.contains('@') {
        return Err(EmailError::MissingAt);
    }
    Ok(email.to_string())
}

/// Container rises, then the form and the image slide in from either side.
pub fn newsletter_entrance<T>(targets: Vec<T>) -> Timeline<T> {
    let steps = [
        (
            Props::new().opacity(0.0).y_px(30.0),
            Props::new().opacity(1.0).y_px(0.0),
            Timing::new(1.0, Ease::Power2Out).delay(0.2),
        ),
        (
            Props::new().opacity(0.0).x_px(-20.0),
            Props::new().opacity(1.0).x_px(0.0),
            Timing::new(0.8, Ease::Power2Out).delay(0.4),
        ),
        (
            Props::new().opacity(0.0).x_px(20.0),
            Props::new().opacity(1.0).x_px(0.0),
            Timing::new(0.8, Ease::Power2Out).delay(0.6),
        ),
    ];
    targets
        .into_iter()
        .zip(steps)
        .fold(Timeline::new(), |timeline, (target, (from, to, timing))| {
            timeline.from_to_at(target, from, to, timing, Position::At(0.0))
        })
}

#[function_component(Newsletter)]
pub fn newsletter() -> Html {
    let section = use_node_ref();
    let container = use_node_ref();
    let form = use_node_ref();
    let image = use_node_ref();
    let email = use_state(String::new);
    let hint = use_state(|| None::<EmailError>);

    let revealed = use_revealed(section.clone());
    use_entrance(vec![container.clone(), form.clone(), image.clone()], revealed, newsletter_entrance);

    let oninput = {
        let email = email.clone();
        let hint = hint.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
            hint.set(None);
        })
    };

    let onsubmit = {
        let email = email.clone();
        let hint = hint.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match validate_email(&email) {
                Ok(address) => {
                    info!("Email submitted: {}", address);
                    email.set(String::new());
                    hint.set(None);
                }
                Err(err) => {
                    debug!("Newsletter signup rejected: {:?}", err);
                    hint.set(Some(err));
                }
            }
        })
    };

    html! {
        <section ref={section} class="newsletter">
            <style>{r#"
                .newsletter {
                    background: #F2F2EF;
                    padding: 64px 48px;
                }
                .newsletter__container {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    align-items: center;
                    gap: 48px;
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 64px;
                    border-radius: 32px;
                    background: #3C4433;
                    color: #fff;
                }
                .newsletter__title {
                    font-size: clamp(2.5rem, 5vw, 4.5rem);
                    font-weight: 400;
                    margin: 0;
                }
                .newsletter__subtitle {
                    font-size: clamp(2.5rem, 5vw, 4.5rem);
                    font-style: italic;
                    font-weight: 300;
                    margin: 0;
                }
                .newsletter__form {
                    display: flex;
                    gap: 12px;
                    max-width: 28rem;
                    margin-top: 32px;
                }
                .newsletter__input {
                    flex: 1;
                    padding: 12px 16px;
                    border: none;
                    border-radius: 8px;
                    color: #374151;
                }
                .newsletter__submit {
                    padding: 12px 24px;
                    border: none;
                    border-radius: 8px;
                    background: #6B7A5F;
                    color: #fff;
                    cursor: pointer;
                    transition: background-color 0.3s;
                }
                .newsletter__submit:hover {
                    background: #5A6754;
                }
                .newsletter__hint {
                    margin-top: 8px;
                    color: #fca5a5;
                    font-size: 0.875rem;
                }
                .newsletter__image {
                    position: relative;
                    aspect-ratio: 1;
                }
            "#}</style>
            <div ref={container} class="newsletter__container" style="opacity: 0;">
                <div ref={form}>
                    <h2 class="newsletter__title">{ "Stay Updated," }</h2>
                    <h3 class="newsletter__subtitle">{ "Stay Radiant" }</h3>
                    <p>{ "Be the first to know about new products, offers, and skincare tips." }</p>
                    <form class="newsletter__form" {onsubmit} novalidate=true>
                        <input
                            class="newsletter__input"
                            type="email"
                            placeholder="Your Email"
                            value={(*email).clone()}
                            {oninput}
                        />
                        <button class="newsletter__submit" type="submit">{ "Subscribe" }</button>
                    </form>
                    if let Some(err) = *hint {
                        <p class="newsletter__hint">{ err.to_string() }</p>
                    }
                </div>
                <div ref={image} class="newsletter__image">
                    <Picture src="/images/product.png" alt="Skincare Product" fit={Fit::Fill(ObjectFit::Contain)} />
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
    fn accepts_and_trims_addresses() {
        assert_eq!(validate_email("  jen@kanva.com "), Ok("jen@kanva.com".to_string()));
    }

    #[test]
    fn rejects_blank_input() {
        assert_eq!(validate_email(""), Err(EmailError::Blank));
        assert_eq!(validate_email("   \t"), Err(EmailError::Blank));
    }

    #[test]
    fn rejects_input_without_at() {
        assert_eq!(validate_email("jen.kanva.com"), Err(EmailError::MissingAt));
    }

    #[test]
    fn form_and_image_follow_the_container() {
        let tl = newsletter_entrance(vec!["container", "form", "image"]);
        let starts: Vec<f64> = tl.tweens().iter().map(|t| t.start).collect();
        assert_eq!(starts, vec![0.2, 0.4, 0.6]);
        assert_eq!(tl.tweens()[1].from.as_ref().and_then(|p| p.x), Some(crate::motion::Length::Px(-20.0)));
    }
}
