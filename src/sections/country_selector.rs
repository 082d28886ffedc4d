use yew::prelude::*;

use crate::catalog::{other_countries, Country};
use crate::components::floating_panel::FloatingPanel;
use crate::components::picture::{Fit, Picture};

#[derive(Properties, PartialEq)]
pub struct CountrySelectorProps {
    pub open: bool,
    pub anchor: NodeRef,
    pub panel_ref: NodeRef,
    pub selected: Country,
    pub on_select: Callback<Country>,
    pub on_close: Callback<()>,
}

/// Lists every country except the selected one. Picking one selects it and
/// closes the panel.
#[function_component(CountrySelector)]
pub fn country_selector(props: &CountrySelectorProps) -> Html {
    html! {
        <FloatingPanel
            open={props.open}
            anchor={props.anchor.clone()}
            panel_ref={props.panel_ref.clone()}
            on_close={props.on_close.clone()}
            class="country-selector"
        >
            <div class="country-selector__list">
                { for other_countries(&props.selected).map(|country| {
                    let country = *country;
                    let on_select = props.on_select.clone();
                    let on_close = props.on_close.clone();
                    let onclick = Callback::from(move |_: MouseEvent| {
                        on_select.emit(country);
                        on_close.emit(());
                    });
                    html! {
                        <button key={country.code} class="country-selector__option" {onclick}>
                            <Picture src={country.flag} alt={country.name} fit={Fit::Fixed { width: 24, height: 18 }} />
                            <span>{ country.name }</span>
                        </button>
                    }
                }) }
            </div>
        </FloatingPanel>
    }
}
