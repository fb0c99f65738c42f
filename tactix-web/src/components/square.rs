use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// "X", "O", or empty.
    #[prop_or_default]
    pub value: AttrValue,
    /// Part of the winning line.
    #[prop_or_default]
    pub highlight: bool,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

#[function_component(Square)]
pub fn square(p: &Props) -> Html {
    let class = if p.highlight {
        "square highlight"
    } else {
        "square"
    };
    let onclick = p.onclick.clone();
    let value = p.value.clone();
    html! { <button {class} {onclick}>{ value }</button> }
}
