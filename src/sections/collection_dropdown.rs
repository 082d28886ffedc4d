use yew::prelude::*;

use crate::catalog::COLLECTIONS;
use crate::components::collection_card::CollectionCard;
use crate::components::floating_panel::FloatingPanel;
use crate::sections::shop_dropdown::DropdownProps;

#[function_component(CollectionDropdown)]
pub fn collection_dropdown(props: &DropdownProps) -> Html {
    html! {
        <FloatingPanel
            open={props.open}
            anchor={props.anchor.clone()}
            panel_ref={props.panel_ref.clone()}
            on_close={props.on_close.clone()}
            class="collection-dropdown"
            onmouseenter={props.onmouseenter.clone()}
            onmouseleave={props.onmouseleave.clone()}
        >
            <div class="collection-dropdown__grid">
                { for COLLECTIONS.iter().map(|collection| html! {
                    <CollectionCard
                        key={collection.id}
                        collection={*collection}
                        on_click={props.on_close.clone()}
                    />
                }) }
            </div>
        </FloatingPanel>
    }
}
