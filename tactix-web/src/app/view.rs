use crate::app::handlers::AppHandlers;
use crate::app::state::AppState;
use crate::components::board::BoardGrid;
use crate::components::ui::move_list::MoveList;
use crate::components::ui::status_line::StatusLine;
use yew::prelude::*;

/// Top-level layout: board on one side, status plus move history on the
/// other. Pure function of the current state so SSR tests can exercise
/// it through the `App` component.
pub fn render_app(state: &AppState, handlers: &AppHandlers) -> Html {
    let game = &*state.game;
    let verdict = game.verdict();

    let on_sort = {
        let cb = handlers.sort_toggle.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="game">
            <div class="game-board">
                <BoardGrid
                    board={game.current_board()}
                    winning_line={verdict.line}
                    on_cell_click={handlers.cell_click.clone()}
                />
            </div>
            <div class="game-info">
                <StatusLine phase={game.phase()} />
                <div>
                    <button onclick={on_sort}>{ "Sort moves" }</button>
                </div>
                <MoveList
                    summaries={game.history().summaries()}
                    selected={game.selected_step()}
                    ascending={game.sort_ascending()}
                    on_jump={handlers.jump.clone()}
                />
            </div>
        </div>
    }
}
