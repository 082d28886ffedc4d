use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectFit {
    Cover,
    Contain,
}

impl ObjectFit {
    fn css(&self) -> &'static str {
        match self {
            ObjectFit::Cover => "cover",
            ObjectFit::Contain => "contain",
        }
    }
}

/// How an image occupies its box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fit {
    /// Stretch over the positioned parent.
    Fill(ObjectFit),
    Fixed { width: u32, height: u32 },
}

#[derive(Properties, PartialEq)]
pub struct PictureProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    pub fit: Fit,
    #[prop_or_default]
    pub priority: bool,
    #[prop_or_default]
    pub class: Classes,
}

/// `loading` and `fetchpriority` attribute values.
pub(crate) fn loading_hints(priority: bool) -> (&'static str, &'static str) {
    if priority {
        ("eager", "high")
    } else {
        ("lazy", "auto")
    }
}

#[function_component(Picture)]
pub fn picture(props: &PictureProps) -> Html {
    let (loading, fetch_priority) = loading_hints(props.priority);
    match props.fit {
        Fit::Fill(fit) => html! {
            <img
                src={props.src.clone()}
                alt={props.alt.clone()}
                class={props.class.clone()}
                style={format!("position: absolute; inset: 0; width: 100%; height: 100%; object-fit: {};", fit.css())}
                loading={loading}
                fetchpriority={fetch_priority}
                decoding="async"
            />
        },
        Fit::Fixed { width, height } => html! {
            <img
                src={props.src.clone()}
                alt={props.alt.clone()}
                class={props.class.clone()}
                width={width.to_string()}
                height={height.to_string()}
                loading={loading}
                fetchpriority={fetch_priority}
                decoding="async"
            />
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_images_load_eagerly() {
        assert_eq!(loading_hints(true), ("eager", "high"));
        assert_eq!(loading_hints(false), ("lazy", "auto"));
    }
}
