//! Inline SVG glyphs.
//!
//! Icons are leaf elements with no behaviour: static path data on a 256x256
//! canvas, filled with `currentColor` so the surrounding text colour class
//! tints them.

use leptos::prelude::*;

use crate::types::Glyph;

/// Renders a [`Glyph`] as an inline, decorative SVG.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon glyph=GLYPH_ROCKET size="16" class="ml-2" /> }
/// ```
#[component]
pub fn Icon(
    /// Glyph to draw
    glyph: Glyph,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let fill_rule = if glyph.even_odd { "evenodd" } else { "nonzero" };

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill="currentColor"
            viewBox="0 0 256 256"
            class=class
            data-glyph={glyph.name}
            aria-hidden="true"
            focusable="false"
        >
            <path d={glyph.path} fill-rule=fill_rule></path>
        </svg>
    }
}

/// Concentric rings with a center dot.
pub const GLYPH_BULLSEYE: Glyph = Glyph {
    name: "bullseye",
    path: "M24,128a104,104,0,1,1,208,0a104,104,0,1,1,-208,0ZM40,128a88,88,0,1,1,176,0a88,88,0,1,1,-176,0ZM64,128a64,64,0,1,1,128,0a64,64,0,1,1,-128,0ZM80,128a48,48,0,1,1,96,0a48,48,0,1,1,-96,0ZM108,128a20,20,0,1,1,40,0a20,20,0,1,1,-40,0Z",
    even_odd: true,
};

/// Two people, front and back.
pub const GLYPH_USERS: Glyph = Glyph {
    name: "users",
    path: "M56,88a40,40,0,1,1,80,0a40,40,0,1,1,-80,0ZM16,208c0-44,36-72,80-72s80,28,80,72ZM156,96a32,32,0,1,1,64,0a32,32,0,1,1,-64,0ZM188,144c32,0,56,26,56,64H192c0-24-8-44-26-58A72,72,0,0,1,188,144Z",
    even_odd: false,
};

/// Rising line over chart axes.
pub const GLYPH_CHART_LINE: Glyph = Glyph {
    name: "chart-line",
    path: "M32,32H48V208H232v16H32ZM64,168L112,112L152,144L212,72L224,82L154,166L114,134L76,178Z",
    even_odd: false,
};

/// Rocket with a round window, fins and exhaust.
pub const GLYPH_ROCKET: Glyph = Glyph {
    name: "rocket",
    path: "M128,16C168,48,184,96,176,160H80C72,96,88,48,128,16ZM128,72a24,24,0,1,0,0,48a24,24,0,1,0,0,-48ZM80,112V184L40,208V168ZM176,112L216,168V208L176,184ZM104,176H152L128,232Z",
    even_odd: false,
};
