use log::{debug, info};
use yew::prelude::*;

use crate::catalog::{default_country, Country, NavMenu, LOGO, NAV_ITEMS};
use crate::components::animated_link::AnimatedLink;
use crate::components::picture::{Fit, Picture};
use crate::hooks::{use_hover_intent, use_outside_click, PanelAction, PanelGroup};
use crate::sections::collection_dropdown::CollectionDropdown;
use crate::sections::country_selector::CountrySelector;
use crate::sections::shop_dropdown::ShopDropdown;

/// Trigger and panel refs of one navigation menu.
#[derive(Clone, PartialEq)]
struct MenuRefs {
    trigger: NodeRef,
    panel: NodeRef,
}

impl MenuRefs {
    fn new() -> Self {
        Self { trigger: NodeRef::default(), panel: NodeRef::default() }
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let panels = use_reducer(PanelGroup::<NavMenu>::default);
    let intent = use_hover_intent(&panels);
    let country = use_state(default_country);

    let shop = use_memo(|_| MenuRefs::new(), ());
    let collections = use_memo(|_| MenuRefs::new(), ());
    let countries = use_memo(|_| MenuRefs::new(), ());

    use_outside_click(
        &panels,
        vec![
            shop.trigger.clone(),
            shop.panel.clone(),
            collections.trigger.clone(),
            collections.panel.clone(),
            countries.trigger.clone(),
            countries.panel.clone(),
        ],
    );

    let open_key = panels.open_key();
    use_effect_with_deps(
        |open_key| {
            debug!("Navigation menu open: {:?}", open_key);
            || ()
        },
        open_key,
    );

    let refs_for = |menu: NavMenu| match menu {
        NavMenu::Shop => (*shop).clone(),
        NavMenu::Collections => (*collections).clone(),
        NavMenu::Country => (*countries).clone(),
    };
    let toggle = |menu: NavMenu| {
        let panels = panels.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            panels.dispatch(PanelAction::Click(menu));
        })
    };
    let close = |menu: NavMenu| {
        let panels = panels.clone();
        Callback::from(move |_| panels.dispatch(PanelAction::Close(menu)))
    };

    let on_country = {
        let country = country.clone();
        Callback::from(move |selected: Country| {
            info!("Country selected: {}", selected.name);
            country.set(selected);
        })
    };

    html! {
        <header class="navbar">
            <style>{r#"
                .navbar {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    height: 112px;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 0 48px;
                    z-index: 50;
                    color: #fff;
                }
                .navbar__links {
                    display: flex;
                    gap: 32px;
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }
                .navbar__actions {
                    display: flex;
                    align-items: center;
                    gap: 20px;
                }
                .navbar__icon {
                    background: none;
                    border: none;
                    color: inherit;
                    cursor: pointer;
                    padding: 4px;
                }
                .navbar__country {
                    display: flex;
                    align-items: center;
                    gap: 8px;
                    background: none;
                    border: 1px solid rgba(255, 255, 255, 0.4);
                    border-radius: 999px;
                    color: inherit;
                    padding: 6px 12px;
                    cursor: pointer;
                }
            "#}</style>
            <a href="/" class="navbar__logo">
                <Picture src={LOGO} alt="Kanva" fit={Fit::Fixed { width: 80, height: 32 }} priority=true />
            </a>
            <ul class="navbar__links">
                { for NAV_ITEMS.iter().map(|item| match item.menu {
                    Some(menu) => {
                        let refs = refs_for(menu);
                        html! {
                            <li
                                key={item.label}
                                ref={refs.trigger}
                                class="navbar__trigger"
                                onmouseenter={intent.enter(menu)}
                                onmouseleave={intent.leave(menu)}
                            >
                                <AnimatedLink href={item.href} class="nav-link" onclick={toggle(menu)}>
                                    { item.label }
                                </AnimatedLink>
                            </li>
                        }
                    }
                    None => html! {
                        <li key={item.label}>
                            <AnimatedLink href={item.href} class="nav-link">{ item.label }</AnimatedLink>
                        </li>
                    },
                }) }
            </ul>
            <div class="navbar__actions">
                <button
                    ref={countries.trigger.clone()}
                    class="navbar__country"
                    onclick={toggle(NavMenu::Country)}
                >
                    <Picture src={country.flag} alt={country.name} fit={Fit::Fixed { width: 20, height: 14 }} />
                    <span>{ country.name }</span>
                </button>
                <button class="navbar__icon" aria-label="Profile">
                    <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5">
                        <circle cx="12" cy="8" r="4" />
                        <path d="M4 21c0-4.4 3.6-8 8-8s8 3.6 8 8" />
                    </svg>
                </button>
                <button class="navbar__icon" aria-label="Search">
                    <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5">
                        <circle cx="11" cy="11" r="7" />
                        <path d="M21 21l-4.35-4.35" />
                    </svg>
                </button>
                <button class="navbar__icon" aria-label="Wishlist">
                    <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5">
                        <path d="M12 21s-7-4.5-9.5-9A5.5 5.5 0 0 1 12 6a5.5 5.5 0 0 1 9.5 6c-2.5 4.5-9.5 9-9.5 9z" />
                    </svg>
                </button>
                <button class="navbar__icon" aria-label="Bag">
                    <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5">
                        <path d="M5 8h14l-1 13H6L5 8z" />
                        <path d="M9 8V6a3 3 0 0 1 6 0v2" />
                    </svg>
                </button>
            </div>

            <ShopDropdown
                open={panels.is_open(NavMenu::Shop)}
                anchor={shop.trigger.clone()}
                panel_ref={shop.panel.clone()}
                on_close={close(NavMenu::Shop)}
                onmouseenter={intent.stay()}
                onmouseleave={intent.leave(NavMenu::Shop)}
            />
            <CollectionDropdown
                open={panels.is_open(NavMenu::Collections)}
                anchor={collections.trigger.clone()}
                panel_ref={collections.panel.clone()}
                on_close={close(NavMenu::Collections)}
                onmouseenter={intent.stay()}
                onmouseleave={intent.leave(NavMenu::Collections)}
            />
            <CountrySelector
                open={panels.is_open(NavMenu::Country)}
                anchor={countries.trigger.clone()}
                panel_ref={countries.panel.clone()}
                selected={*country}
                on_select={on_country}
                on_close={close(NavMenu::Country)}
            />
        </header>
    }
}
