use crate::game::GameState;
use yew::prelude::*;

/// Root application state: the single [`GameState`] the whole UI
/// renders from. Every update replaces the value wholesale, so each
/// render sees one consistent snapshot.
#[derive(Clone)]
pub struct AppState {
    pub game: UseStateHandle<GameState>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        game: use_state(GameState::default),
    }
}
