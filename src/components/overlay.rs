use crate::sync::Overlay;
use common::board::COLUMNS;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub overlay: Overlay,
    /// Height of a hit target, in cells.
    pub height: f64,
    pub onpick: Callback<usize>,
}

fn marker_points(column: usize) -> String {
    let x = column as f64;
    format!("{},{} {},{} {},{}", x + 0.3, 0.3, x + 0.7, 0.3, x + 0.5, 0.7)
}

#[function_component(ColumnOverlay)]
pub fn column_overlay(props: &Props) -> Html {
    let Props {
        overlay,
        height,
        onpick,
    } = props;

    let columns = (0..COLUMNS).map(|column| {
        let enabled = overlay.is_enabled(column);

        let (onclick, ontouchstart) = if enabled {
            let cloned_onpick = onpick.clone();
            let onclick = Callback::from(move |_: web_sys::MouseEvent| cloned_onpick.emit(column));
            let cloned_onpick = onpick.clone();
            let ontouchstart = Callback::from(move |event: web_sys::TouchEvent| {
                event.prevent_default();
                cloned_onpick.emit(column);
            });
            (onclick, ontouchstart)
        } else {
            (Callback::from(|_| ()), Callback::from(|_| ()))
        };

        let (opacity, cursor) = if enabled {
            ("1", "cursor: pointer;")
        } else {
            ("0.25", "cursor: not-allowed;")
        };

        html! {
            <g class={classes!("column", enabled.then(|| "enabled"))} opacity={opacity} style={cursor}>
                <polygon points={marker_points(column)} class="marker" />
                <rect
                    x={column.to_string()}
                    y="0"
                    width="1"
                    height={height.to_string()}
                    fill="transparent"
                    onclick={onclick}
                    ontouchstart={ontouchstart} />
            </g>
        }
    });

    html! {
        <g class="overlay">
            {for columns}
        </g>
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_marker_points() {
        assert_eq!(marker_points(0), "0.3,0.3 0.7,0.3 0.5,0.7");
        assert_eq!(marker_points(6), "6.3,0.3 6.7,0.3 6.5,0.7");
    }
}
