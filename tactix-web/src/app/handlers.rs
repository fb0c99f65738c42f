use crate::app::state::AppState;
use yew::prelude::*;

/// Callbacks the view hands to components. Each one clones the current
/// game state, applies a single engine operation, and replaces the
/// handle.
#[derive(Clone)]
pub struct AppHandlers {
    pub cell_click: Callback<usize>,
    pub jump: Callback<usize>,
    pub sort_toggle: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            cell_click: build_cell_click(state),
            jump: build_jump(state),
            sort_toggle: build_sort_toggle(state),
        }
    }
}

fn build_cell_click(state: &AppState) -> Callback<usize> {
    let game = state.game.clone();
    Callback::from(move |cell: usize| {
        let mut next = (*game).clone();
        // Occupied cells and decided games are ignored inside the engine.
        next.apply_move(cell);
        game.set(next);
    })
}

fn build_jump(state: &AppState) -> Callback<usize> {
    let game = state.game.clone();
    Callback::from(move |step: usize| {
        let mut next = (*game).clone();
        match next.jump_to(step) {
            Ok(()) => game.set(next),
            // The move list only offers valid steps; anything else is a
            // stale click and gets dropped without touching state.
            Err(err) => log::warn!("ignoring history jump: {err}"),
        }
    })
}

fn build_sort_toggle(state: &AppState) -> Callback<()> {
    let game = state.game.clone();
    Callback::from(move |()| {
        let mut next = (*game).clone();
        next.toggle_sort_order();
        game.set(next);
    })
}
