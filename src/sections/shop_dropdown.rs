use log::info;
use yew::prelude::*;

use crate::catalog::{SHOP_MENU, SHOP_PRODUCTS};
use crate::components::animated_link::AnimatedLink;
use crate::components::floating_panel::FloatingPanel;
use crate::components::product_card::ProductCard;

#[derive(Properties, PartialEq)]
pub struct DropdownProps {
    pub open: bool,
    pub anchor: NodeRef,
    pub panel_ref: NodeRef,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub onmouseenter: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub onmouseleave: Option<Callback<MouseEvent>>,
}

#[function_component(ShopDropdown)]
pub fn shop_dropdown(props: &DropdownProps) -> Html {
    let close_on_click = props.on_close.reform(|_: MouseEvent| ());
    let on_product = {
        let on_close = props.on_close.clone();
        Callback::from(move |id: u32| {
            info!("Product clicked: {}", id);
            on_close.emit(());
        })
    };
    let on_favorite = Callback::from(|id: u32| info!("Favorite toggled: {}", id));

    html! {
        <FloatingPanel
            open={props.open}
            anchor={props.anchor.clone()}
            panel_ref={props.panel_ref.clone()}
            on_close={props.on_close.clone()}
            class="shop-dropdown"
            onmouseenter={props.onmouseenter.clone()}
            onmouseleave={props.onmouseleave.clone()}
        >
            <div class="shop-dropdown__layout">
                <div class="shop-dropdown__menu">
                    <h2 class="shop-dropdown__title">{ "Shop" }</h2>
                    <nav class="shop-dropdown__links">
                        { for SHOP_MENU.iter().map(|item| html! {
                            <AnimatedLink
                                key={item.label}
                                href={item.href}
                                class="menu-item"
                                onclick={close_on_click.clone()}
                            >
                                { item.label }
                            </AnimatedLink>
                        }) }
                    </nav>
                </div>
                <div class="shop-dropdown__products">
                    { for SHOP_PRODUCTS.iter().map(|product| html! {
                        <ProductCard
                            key={product.id}
                            product={*product}
                            on_click={on_product.clone()}
                            on_favorite={on_favorite.clone()}
                        />
                    }) }
                </div>
            </div>
        </FloatingPanel>
    }
}
