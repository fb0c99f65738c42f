use crate::game::GamePhase;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub phase: GamePhase,
}

/// One-line game status: next player, winner, or draw.
#[function_component(StatusLine)]
pub fn status_line(p: &Props) -> Html {
    html! { <div class="status">{ p.phase.to_string() }</div> }
}
