//! Stylesheets for the section.
//!
//! Layout, colour and spacing come from Tailwind utility classes on each
//! element. This module only carries what utility classes cannot express:
//! the generic motion rules fed by [`crate::motion::Motion::style`], and the
//! `primary` palette the utility classes refer to.
//!
//! # Customization
//!
//! ```rust
//! use marketing_leptos::styles::MOTION_CSS;
//!
//! let slower = ".motion-enter { animation-timing-function: linear; }";
//! let combined = format!("{}\n{}", MOTION_CSS, slower);
//! assert!(combined.contains("motion-enter"));
//! ```

/// Generic motion rules.
///
/// - `.motion` pins the element to its resting state and animates gesture
///   changes over `--gesture-duration`.
/// - `.motion-enter` plays the one-shot entrance. The `backwards` fill shows
///   the start state during the delay and releases `transform` afterwards so
///   the gesture rules can take over.
/// - `.motion-hover:hover` / `.motion-tap:active` switch to the gesture
///   targets; `:active` comes last so a press wins over a hover.
pub const MOTION_CSS: &str = r#"
.motion {
    opacity: var(--rest-opacity, 1);
    transform: translate(var(--rest-x, 0px), var(--rest-y, 0px)) scale(var(--rest-scale, 1));
    z-index: var(--rest-z, auto);
    transition-property: transform, opacity;
    transition-duration: var(--gesture-duration, 0ms);
    transition-timing-function: ease-out;
}

.motion-enter {
    animation-name: motion-enter;
    animation-duration: var(--enter-duration, 0ms);
    animation-delay: var(--enter-delay, 0ms);
    animation-timing-function: ease-out;
    animation-iteration-count: 1;
    animation-fill-mode: backwards;
}

@keyframes motion-enter {
    from {
        opacity: var(--enter-opacity, 1);
        transform: translate(var(--enter-x, 0px), var(--enter-y, 0px)) scale(var(--enter-scale, 1));
    }
}

.motion-hover:hover {
    opacity: var(--hover-opacity, 1);
    transform: translate(var(--hover-x, 0px), var(--hover-y, 0px)) scale(var(--hover-scale, 1));
    z-index: var(--hover-z, var(--rest-z, auto));
}

.motion-tap:active {
    opacity: var(--tap-opacity, 1);
    transform: translate(var(--tap-x, 0px), var(--tap-y, 0px)) scale(var(--tap-scale, 1));
}

.motion-backdrop {
    pointer-events: none;
    user-select: none;
}

@media (prefers-reduced-motion: reduce) {
    .motion-enter { animation: none; }
    .motion { transition-duration: 0ms; }
}
"#;

/// The `primary-*` colour scale (emerald), as `(shade, hex)` pairs.
pub const PRIMARY_PALETTE: [(u16, &str); 10] = [
    (50, "#ecfdf5"),
    (100, "#d1fae5"),
    (200, "#a7f3d0"),
    (300, "#6ee7b7"),
    (400, "#34d399"),
    (500, "#10b981"),
    (600, "#059669"),
    (700, "#047857"),
    (800, "#065f46"),
    (900, "#064e3b"),
];

/// Inline script registering [`PRIMARY_PALETTE`] with the Tailwind CDN build.
pub fn tailwind_theme_script() -> String {
    let shades = PRIMARY_PALETTE
        .iter()
        .map(|(shade, hex)| format!("{}: \"{}\"", shade, hex))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "tailwind.config = {{ theme: {{ extend: {{ colors: {{ primary: {{ {} }} }} }} }} }};",
        shades
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_script_registers_every_shade() {
        let script = tailwind_theme_script();

        assert!(script.starts_with("tailwind.config = {"));
        assert!(script.contains("600: \"#059669\""));
        assert_eq!(script.matches('#').count(), PRIMARY_PALETTE.len());
    }

    #[test]
    fn landing_page_embeds_the_current_theme() {
        let landing = include_str!("../../landing/index.html");

        assert!(landing.contains(&tailwind_theme_script()));
    }

    #[test]
    fn press_rule_follows_hover_rule() {
        let hover = MOTION_CSS.find(".motion-hover:hover").unwrap();
        let tap = MOTION_CSS.find(".motion-tap:active").unwrap();
        assert!(hover < tap);
    }

    #[test]
    fn entrance_is_one_shot() {
        assert!(MOTION_CSS.contains("animation-iteration-count: 1;"));
        assert!(MOTION_CSS.contains("animation-fill-mode: backwards;"));
    }
}
