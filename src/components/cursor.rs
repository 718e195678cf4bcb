use yew::prelude::*;

use crate::state::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct CursorGlowProps {
    pub x: f64,
    pub y: f64,
    pub theme: Theme,
}

/// Two fixed full-screen layers that trail the pointer: a darkening vignette
/// with a transparent hole around the cursor, and a blue glow inside it.
/// Both are pointer-events: none so they never swallow clicks.
#[function_component(CursorGlow)]
pub fn cursor_glow(props: &CursorGlowProps) -> Html {
    let (x, y, theme) = (props.x, props.y, props.theme);

    let shade = if theme.is_dark() {
        "rgba(0, 0, 0, 0.7)"
    } else {
        "rgba(0, 0, 0, 0.4)"
    };
    let glow = if theme.is_dark() {
        "rgba(59, 130, 246, 0.2)"
    } else {
        "rgba(59, 130, 246, 0.3)"
    };

    html! {
        <>
            <div
                class="cursor-layer cursor-shade"
                style={format!(
                    "background: radial-gradient(circle 300px at {x}px {y}px, transparent, {shade} 80%);"
                )}
            />
            <div
                class="cursor-layer cursor-glow"
                style={format!(
                    "background: radial-gradient(circle 200px at {x}px {y}px, {glow}, transparent 80%);"
                )}
            />
        </>
    }
}
