use yew::prelude::*;

pub mod handlers;
pub mod state;
pub mod view;

pub use handlers::AppHandlers;

#[function_component(App)]
pub fn app() -> Html {
    let app_state = state::use_app_state();
    let handlers = AppHandlers::new(&app_state);
    view::render_app(&app_state, &handlers)
}

#[cfg(test)]
mod tests {
    use super::App;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn fresh_app_renders_board_status_and_history() {
        let html = block_on(LocalServerRenderer::<App>::new().render());
        assert!(
            html.contains("Next player: X"),
            "fresh game should prompt X: {html}"
        );
        assert!(
            html.contains("Go to game start"),
            "history list should start with the game-start entry: {html}"
        );
        assert!(
            html.contains("Sort moves"),
            "sort toggle should be present: {html}"
        );
        assert_eq!(
            html.matches("class=\"square\"").count(),
            9,
            "board should render nine squares: {html}"
        );
    }
}
