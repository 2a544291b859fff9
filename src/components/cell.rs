use common::board::Cell as Mark;
use yew::prelude::*;

const RADIUS: f64 = 0.4;

#[derive(Clone, Properties, PartialEq)]
pub struct Props {
    pub mark: Mark,
    pub x: f64,
    pub y: f64,
}

#[function_component(Cell)]
pub fn cell(props: &Props) -> Html {
    let Props { mark, x, y } = props.clone();
    let cx = (x + 0.5).to_string();
    let cy = (y + 0.5).to_string();
    let r = RADIUS.to_string();
    let owner = match mark {
        Mark::Empty => None,
        Mark::Player => Some("player"),
        Mark::Cpu => Some("cpu"),
    };

    html! {
        <circle cx={cx} cy={cy} r={r} class={classes!("slot", owner)} />
    }
}
