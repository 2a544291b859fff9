use super::cell::Cell;
use common::board::{cells, Grid, COLUMNS, ROWS};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub grid: Grid,
    /// Vertical offset of row 0, in cells.
    #[prop_or_default]
    pub top: f64,
}

/// Redraws all 42 slots from the grid every time.
#[function_component(Board)]
pub fn board(props: &Props) -> Html {
    let Props { grid, top } = props;
    let top = *top;

    let slots = cells(grid).map(|(row, column, mark)| {
        html! {
            <Cell mark={mark} x={column as f64} y={row as f64 + top} />
        }
    });

    html! {
        <g class="board">
            <rect x="0" y={top.to_string()} width={COLUMNS.to_string()} height={ROWS.to_string()} rx="0.2" class="frame" />
            {for slots}
        </g>
    }
}
