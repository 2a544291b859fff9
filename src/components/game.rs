use super::board::Board;
use super::button::Button;
use super::overlay::ColumnOverlay;
use crate::api::HttpApi;
use crate::config::ClientConfig;
use crate::sync::{BoardSync, Screen, StatusKind};
use common::board::{COLUMNS, ROWS};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Rows in the viewport: the marker row above the board, then the board.
pub const VIEW_ROWS: usize = ROWS + 1;

#[derive(Clone, PartialEq, Properties)]
pub struct Props {
    pub config: ClientConfig,
    /// Rendered width of the board in pixels.
    pub board_size: f64,
}

fn status_class(kind: StatusKind) -> &'static str {
    match kind {
        StatusKind::Outcome => "outcome",
        StatusKind::Progress => "progress",
        StatusKind::Notice => "notice",
    }
}

#[function_component(Game)]
pub fn game(props: &Props) -> Html {
    let Props { config, board_size } = props.clone();
    let screen = use_state(Screen::default);

    let cloned_screen = screen.clone();
    let sync = use_ref(move || {
        let api = HttpApi::new(config.clone());
        BoardSync::new(api, config, move |frame: &Screen| {
            cloned_screen.set(frame.clone())
        })
    });

    let cloned_sync = sync.clone();
    use_effect_with_deps(
        move |_| {
            spawn_local(async move { cloned_sync.bootstrap().await });
            || ()
        },
        (),
    );

    let cloned_sync = sync.clone();
    let onpick = Callback::from(move |column: usize| {
        let sync = cloned_sync.clone();
        spawn_local(async move { sync.play_move(column).await });
    });

    let cloned_sync = sync;
    let onreset = Callback::from(move |event: web_sys::MouseEvent| {
        event.prevent_default();
        let sync = cloned_sync.clone();
        spawn_local(async move { sync.reset().await });
    });

    let board = match &screen.grid {
        Some(grid) => html! { <Board grid={*grid} top={1.} /> },
        None => html! {},
    };

    let width = board_size.to_string();
    let height = (board_size * VIEW_ROWS as f64 / COLUMNS as f64).to_string();
    let view_box = format!("0 0 {} {}", COLUMNS, VIEW_ROWS);

    html! {
        <div class="game">
            <p class={classes!("status", status_class(screen.status.kind))}>{screen.status.text.clone()}</p>
            <svg width={width.clone()} height={height} viewBox={view_box}>
                {board}
                <ColumnOverlay
                    overlay={screen.overlay}
                    height={VIEW_ROWS as f64}
                    onpick={onpick} />
            </svg>
            <svg width={width} height={(board_size / COLUMNS as f64).to_string()} viewBox={format!("0 0 {} 1", COLUMNS)}>
                <Button x={COLUMNS as f64 / 2.} y={0.5} width={2.} height={0.8} onclick={onreset}>{"Reset"}</Button>
            </svg>
        </div>
    }
}
