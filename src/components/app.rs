use super::game::{Game, VIEW_ROWS};
use crate::config::ClientConfig;
use common::board::COLUMNS;
use yew::prelude::*;

// Room left around the board for the title, status line and reset button.
const MARGIN_X: f64 = 20.;
const MARGIN_Y: f64 = 160.;
const FALLBACK_SIZE: f64 = 480.;

/// Width in pixels of the largest board viewport that fits in `width` x
/// `height`, keeping cells square.
fn fit_board(width: f64, height: f64) -> f64 {
    let cell = (width / COLUMNS as f64).min(height / VIEW_ROWS as f64);
    cell.max(0.) * COLUMNS as f64
}

fn window_size() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

#[derive(Clone, PartialEq, Properties)]
pub struct Props {
    pub config: ClientConfig,
}

#[function_component(App)]
pub fn app(props: &Props) -> Html {
    let board_size = match window_size() {
        Some((width, height)) => fit_board(width - MARGIN_X, height - MARGIN_Y),
        None => FALLBACK_SIZE,
    };

    html! {
        <div class="app">
            <h1>{"Connect Four"}</h1>
            <Game config={props.config.clone()} board_size={board_size} />
        </div>
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_fit_board() {
        // Wide window: height is the limit.
        assert_eq!(fit_board(1000., 700.), 700.);
        // Tall window: width is the limit.
        assert_eq!(fit_board(350., 1000.), 350.);
        assert_eq!(fit_board(-20., 300.), 0.);
    }
}
