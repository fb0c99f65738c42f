use crate::components::square::Square;
use crate::game::Board;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub board: Board,
    /// Indices to emphasize once the game is won.
    #[prop_or_default]
    pub winning_line: Option<[usize; 3]>,
    #[prop_or_default]
    pub on_cell_click: Callback<usize>,
}

/// The 3x3 grid, three `board-row` divs of three squares each. Clicks
/// bubble up as the flat cell index.
#[function_component(BoardGrid)]
pub fn board_grid(p: &Props) -> Html {
    let rows = (0..3)
        .map(|row| {
            let squares = (0..3)
                .map(|col| {
                    let cell = row * 3 + col;
                    let onclick = {
                        let cb = p.on_cell_click.clone();
                        Callback::from(move |_: MouseEvent| cb.emit(cell))
                    };
                    let value = p
                        .board
                        .get(cell)
                        .map(|mark| AttrValue::from(mark.as_str()))
                        .unwrap_or_default();
                    let highlight = p.winning_line.is_some_and(|line| line.contains(&cell));
                    html! {
                        <Square key={cell.to_string()} {value} {highlight} {onclick} />
                    }
                })
                .collect::<Html>();
            html! { <div key={row.to_string()} class="board-row">{ squares }</div> }
        })
        .collect::<Html>();
    html! { <div>{ rows }</div> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Mark;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn x_wins_left_column() -> Board {
        Board::default()
            .with_mark(0, Mark::X)
            .with_mark(3, Mark::X)
            .with_mark(6, Mark::X)
            .with_mark(1, Mark::O)
            .with_mark(4, Mark::O)
    }

    #[test]
    fn grid_renders_three_rows_of_squares() {
        let props = Props {
            board: Board::default(),
            winning_line: None,
            on_cell_click: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<BoardGrid>::with_props(props).render());
        assert_eq!(html.matches("board-row").count(), 3);
        assert_eq!(html.matches("class=\"square\"").count(), 9);
    }

    #[test]
    fn winning_line_highlights_exactly_three_squares() {
        let props = Props {
            board: x_wins_left_column(),
            winning_line: Some([0, 3, 6]),
            on_cell_click: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<BoardGrid>::with_props(props).render());
        assert_eq!(html.matches("square highlight").count(), 3);
        assert_eq!(html.matches('X').count(), 3);
        assert_eq!(html.matches('O').count(), 2);
    }
}
