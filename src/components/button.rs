use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Center of the button, in board cells.
    pub x: f64,
    pub y: f64,
    /// Size of the button, in board cells.
    pub width: f64,
    pub height: f64,
    #[prop_or_default]
    pub children: Children,
    pub onclick: Callback<web_sys::MouseEvent>,
}

/// Returns `(x, y)` of the top left corner for a box centered on `(cx, cy)`.
fn corner(cx: f64, cy: f64, width: f64, height: f64) -> (f64, f64) {
    (cx - width / 2., cy - height / 2.)
}

#[function_component(Button)]
pub fn button(props: &Props) -> Html {
    let Props {
        x,
        y,
        width,
        height,
        children,
        onclick,
    } = props;
    let (left, top) = corner(*x, *y, *width, *height);
    // Label takes most of the box height.
    let font_size = format!("{}px", height * 0.6);

    html! {
        <g class="button" onclick={onclick.clone()}>
            <rect
                x={left.to_string()}
                y={top.to_string()}
                width={width.to_string()}
                height={height.to_string()}
                rx="0.1"
                class="button-background" />
            <text
                x={x.to_string()}
                y={y.to_string()}
                font-size={font_size}
                dominant-baseline="middle"
                text-anchor="middle">
                {for children.iter()}
            </text>
        </g>
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_corner() {
        assert_eq!(corner(3.5, 0.5, 2., 0.5), (2.5, 0.25));
        assert_eq!(corner(1., 1., 2., 2.), (0., 0.));
    }
}
