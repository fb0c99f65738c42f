use crate::game::MoveSummary;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Ascending per-step descriptions; entry 0 is the game start.
    pub summaries: Vec<Option<MoveSummary>>,
    /// Step to emphasize (the last one jumped to).
    #[prop_or_default]
    pub selected: Option<usize>,
    #[prop_or(true)]
    pub ascending: bool,
    #[prop_or_default]
    pub on_jump: Callback<usize>,
}

fn entry_label(summary: Option<&MoveSummary>) -> String {
    summary.map_or_else(
        || "Go to game start".to_string(),
        |s| {
            format!(
                "Go to move (row: {}, column: {}, player: {})",
                s.row, s.column, s.player
            )
        },
    )
}

/// Ordered list of jump buttons, one per history step. Descending
/// display reverses the ascending list; each entry keeps its true step
/// number via the `value` attribute so the numbering stays honest.
#[function_component(MoveList)]
pub fn move_list(p: &Props) -> Html {
    let mut steps: Vec<usize> = (0..p.summaries.len()).collect();
    if !p.ascending {
        steps.reverse();
    }
    let items = steps
        .into_iter()
        .map(|step| {
            let onclick = {
                let cb = p.on_jump.clone();
                Callback::from(move |_: MouseEvent| cb.emit(step))
            };
            let style = if p.selected == Some(step) {
                "font-weight: bold"
            } else {
                "font-weight: normal"
            };
            let label = entry_label(p.summaries.get(step).and_then(Option::as_ref));
            html! {
                <li key={step.to_string()} value={(step + 1).to_string()}>
                    <button {onclick} {style}>{ label }</button>
                </li>
            }
        })
        .collect::<Html>();
    html! { <ol>{ items }</ol> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Mark;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn sample_summaries() -> Vec<Option<MoveSummary>> {
        vec![
            None,
            Some(MoveSummary {
                row: 1,
                column: 1,
                player: Mark::X,
            }),
            Some(MoveSummary {
                row: 2,
                column: 2,
                player: Mark::O,
            }),
        ]
    }

    fn render(props: Props) -> String {
        block_on(LocalServerRenderer::<MoveList>::with_props(props).render())
    }

    #[test]
    fn ascending_list_starts_at_game_start() {
        let html = render(Props {
            summaries: sample_summaries(),
            selected: None,
            ascending: true,
            on_jump: Callback::noop(),
        });
        let start = html.find("Go to game start").unwrap();
        let second = html
            .find("Go to move (row: 1, column: 1, player: X)")
            .unwrap();
        let third = html
            .find("Go to move (row: 2, column: 2, player: O)")
            .unwrap();
        assert!(start < second && second < third);
        assert!(!html.contains("font-weight: bold"));
    }

    #[test]
    fn descending_list_is_the_reversal() {
        let html = render(Props {
            summaries: sample_summaries(),
            selected: None,
            ascending: false,
            on_jump: Callback::noop(),
        });
        let start = html.find("Go to game start").unwrap();
        let third = html
            .find("Go to move (row: 2, column: 2, player: O)")
            .unwrap();
        assert!(third < start);
    }

    #[test]
    fn selected_step_is_emphasized() {
        let html = render(Props {
            summaries: sample_summaries(),
            selected: Some(1),
            ascending: true,
            on_jump: Callback::noop(),
        });
        assert_eq!(html.matches("font-weight: bold").count(), 1);
        assert_eq!(html.matches("font-weight: normal").count(), 2);
    }
}
