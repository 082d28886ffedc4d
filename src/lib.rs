use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod carousel;
pub mod catalog;
pub mod config;
pub mod dom;
pub mod error;
pub mod hooks;
pub mod motion;
mod styles;

pub mod components {
    pub mod animated_link;
    pub mod arrow_swap;
    pub mod collection_card;
    pub mod floating_panel;
    pub mod heading_text;
    pub mod hotspot_card;
    pub mod hotspot_popover;
    pub mod picture;
    pub mod pop_image;
    pub mod product_card;
}
pub mod sections {
    pub mod benefit;
    pub mod best_selling;
    pub mod collection_dropdown;
    pub mod country_selector;
    pub mod feature_cards;
    pub mod hero;
    pub mod highlight;
    pub mod intro_loader;
    pub mod navbar;
    pub mod newsletter;
    pub mod product_section;
    pub mod shop_dropdown;
    pub mod testimonials;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use pages::{home::Home, not_found::NotFound};
use styles::GlobalStyles;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <GlobalStyles />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

pub fn run() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting storefront");
    yew::Renderer::<App>::new().render();
}
