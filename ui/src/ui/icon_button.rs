use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::ui::style::icon_style;

#[derive(Properties, PartialEq)]
pub struct IconButtonProps {
    pub icon_id: IconId,
    /// Shown as the native tooltip.
    pub label: String,
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconButton)]
pub fn icon_button(props: &IconButtonProps) -> Html {
    html! {
        <span class={classes!(icon_style(), props.class.clone())} title={props.label.clone()}>
            <Icon
                width={"1.5em"}
                height={"1.5em"}
                icon_id={props.icon_id}
                onclick={props.onclick.clone()}
            />
        </span>
    }
}
