//! Declarative motion descriptors.
//!
//! A [`Motion`] says how an element enters (from [`Motion::initial`] to
//! [`Motion::animate`]) and what it looks like while hovered or pressed. It
//! never drives frames itself: [`Motion::style`] compiles the descriptor to
//! CSS custom properties and the generic rules in
//! [`crate::styles::MOTION_CSS`] let the browser interpolate.
//!
//! Every animated element has exactly two observable states per gesture,
//! resting and hovered/pressed. [`Motion::target`] is the single source of
//! truth for both the stylesheet and the tests.
//!
//! ```rust
//! use marketing_leptos::motion::{self, Interaction};
//!
//! let image = motion::showcase_image();
//! assert_eq!(image.target(Interaction::Hovered).scale, 1.5);
//! assert_eq!(image.target(Interaction::Resting).scale, 1.0);
//! ```

use std::time::Duration;

/// Entrance duration shared by heading, cards and image.
pub const ENTER_DURATION: Duration = Duration::from_millis(800);
/// Per-index entrance delay between feature cards.
pub const STAGGER_UNIT: Duration = Duration::from_millis(100);
/// Entrance delay of the centered image.
pub const IMAGE_DELAY: Duration = Duration::from_millis(200);
/// Hover transition for cards and the centered image.
pub const HOVER_DURATION: Duration = Duration::from_millis(300);
/// Gesture transition when none is given (the call-to-action).
pub const GESTURE_DURATION: Duration = Duration::from_millis(200);

/// Vertical start offset of a card, in px.
pub const CARD_ENTER_OFFSET: f32 = 50.0;
/// Vertical start offset of the heading, in px.
pub const HEADING_ENTER_OFFSET: f32 = 20.0;

/// Stacking layer of the card columns.
pub const CARD_LAYER: i32 = 10;
/// Resting stacking layer of the centered image.
pub const IMAGE_LAYER: i32 = 20;
/// Stacking layer of the centered image while hovered.
pub const IMAGE_HOVER_LAYER: i32 = 30;

/// A complete visual state of an element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    /// 0.0 transparent .. 1.0 opaque
    pub opacity: f32,
    /// Horizontal offset in px
    pub x: f32,
    /// Vertical offset in px (positive is down)
    pub y: f32,
    /// Uniform scale factor
    pub scale: f32,
    /// Stacking order; `None` keeps the layout default
    pub z_index: Option<i32>,
}

impl VisualState {
    /// Fully opaque, in place, unscaled.
    pub const REST: Self = Self {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        z_index: None,
    };

    /// Same as [`VisualState::REST`] but transparent.
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        ..Self::REST
    };

    /// Shift vertically by `y` px.
    pub fn offset_y(self, y: f32) -> Self {
        Self { y, ..self }
    }

    /// Scale by `scale`.
    pub fn scaled(self, scale: f32) -> Self {
        Self { scale, ..self }
    }

    /// Place on stacking layer `z`.
    pub fn layer(self, z: i32) -> Self {
        Self {
            z_index: Some(z),
            ..self
        }
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::REST
    }
}

/// Timing of a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// How long the interpolation runs
    pub duration: Duration,
    /// Wait before it starts
    pub delay: Duration,
}

impl Transition {
    /// Transition starting immediately.
    pub const fn new(duration: Duration) -> Self {
        Self {
            duration,
            delay: Duration::ZERO,
        }
    }

    /// Same transition, started after `delay`.
    pub const fn delayed(self, delay: Duration) -> Self {
        Self { delay, ..self }
    }
}

/// Target state while a pointer gesture is active.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gesture {
    /// State shown while the gesture lasts
    pub target: VisualState,
    /// Timing of the move into and out of `target`
    pub transition: Transition,
}

/// Pointer interaction an element can be in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Interaction {
    /// No pointer over the element
    #[default]
    Resting,
    /// Pointer over the element
    Hovered,
    /// Pointer pressed on the element
    Pressed,
}

/// Full motion description of one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    /// Entrance start state; `None` means no entrance animation
    pub initial: Option<VisualState>,
    /// Resting state after entrance
    pub animate: VisualState,
    /// Entrance timing
    pub transition: Transition,
    /// State while hovered
    pub while_hover: Option<Gesture>,
    /// State while pressed
    pub while_tap: Option<Gesture>,
}

impl Motion {
    /// Element resting at `animate`, no entrance and no gestures.
    pub fn at_rest(animate: VisualState) -> Self {
        Self {
            initial: None,
            animate,
            transition: Transition::new(ENTER_DURATION),
            while_hover: None,
            while_tap: None,
        }
    }

    /// Enter from `initial` with `transition`.
    pub fn enter_from(self, initial: VisualState, transition: Transition) -> Self {
        Self {
            initial: Some(initial),
            transition,
            ..self
        }
    }

    /// Show `target` while hovered.
    pub fn on_hover(self, target: VisualState, transition: Transition) -> Self {
        Self {
            while_hover: Some(Gesture { target, transition }),
            ..self
        }
    }

    /// Show `target` while pressed.
    pub fn on_tap(self, target: VisualState, transition: Transition) -> Self {
        Self {
            while_tap: Some(Gesture { target, transition }),
            ..self
        }
    }

    /// Visual state shown for `interaction` once the entrance has finished.
    ///
    /// A press without a tap target keeps the hover target, and a gesture
    /// without any target keeps the resting state.
    pub fn target(&self, interaction: Interaction) -> VisualState {
        let gesture = match interaction {
            Interaction::Resting => None,
            Interaction::Hovered => self.while_hover,
            Interaction::Pressed => self.while_tap.or(self.while_hover),
        };
        gesture.map_or(self.animate, |g| g.target)
    }

    /// CSS classes selecting the generic motion rules this element needs.
    pub fn classes(&self) -> String {
        let mut classes = String::from("motion");
        if self.initial.is_some() {
            classes.push_str(" motion-enter");
        }
        if self.while_hover.is_some() {
            classes.push_str(" motion-hover");
        }
        if self.while_tap.is_some() {
            classes.push_str(" motion-tap");
        }
        classes
    }

    /// Inline `style` value carrying the descriptor as CSS custom properties.
    pub fn style(&self) -> String {
        let mut css = String::new();
        push_state(&mut css, "rest", &self.animate);

        if let Some(initial) = &self.initial {
            push_state(&mut css, "enter", initial);
            css.push_str(&format!(
                "--enter-duration:{}ms;--enter-delay:{}ms;",
                self.transition.duration.as_millis(),
                self.transition.delay.as_millis()
            ));
        }
        if let Some(hover) = &self.while_hover {
            push_state(&mut css, "hover", &hover.target);
        }
        if let Some(tap) = &self.while_tap {
            push_state(&mut css, "tap", &tap.target);
        }
        if let Some(gesture) = self.while_hover.or(self.while_tap) {
            css.push_str(&format!(
                "--gesture-duration:{}ms;",
                gesture.transition.duration.as_millis()
            ));
        }
        css
    }
}

fn push_state(css: &mut String, prefix: &str, state: &VisualState) {
    css.push_str(&format!(
        "--{p}-opacity:{};--{p}-x:{}px;--{p}-y:{}px;--{p}-scale:{};",
        state.opacity,
        state.x,
        state.y,
        state.scale,
        p = prefix
    ));
    if let Some(z) = state.z_index {
        css.push_str(&format!("--{}-z:{};", prefix, z));
    }
}

/// Entrance delay of the element at `index` in a staggered group.
pub fn stagger(index: usize, unit: Duration) -> Duration {
    unit.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}

/// Feature card at global position `index`.
pub fn feature_card(index: usize) -> Motion {
    Motion::at_rest(VisualState::REST)
        .enter_from(
            VisualState::HIDDEN.offset_y(CARD_ENTER_OFFSET),
            Transition::new(ENTER_DURATION).delayed(stagger(index, STAGGER_UNIT)),
        )
        .on_hover(
            VisualState::REST.scaled(1.05),
            Transition::new(HOVER_DURATION),
        )
}

/// Heading block: fades in and slides up, independent of the cards.
pub fn heading() -> Motion {
    Motion::at_rest(VisualState::REST).enter_from(
        VisualState::HIDDEN.offset_y(HEADING_ENTER_OFFSET),
        Transition::new(ENTER_DURATION),
    )
}

/// Centered image: grows in, then pops above the cards on hover.
pub fn showcase_image() -> Motion {
    Motion::at_rest(VisualState::REST.layer(IMAGE_LAYER))
        .enter_from(
            VisualState::HIDDEN.scaled(0.8).layer(IMAGE_LAYER),
            Transition::new(ENTER_DURATION).delayed(IMAGE_DELAY),
        )
        .on_hover(
            VisualState::REST.scaled(1.5).layer(IMAGE_HOVER_LAYER),
            Transition::new(HOVER_DURATION),
        )
}

/// Call-to-action wrapper: grows on hover, shrinks on press.
pub fn call_to_action() -> Motion {
    Motion::at_rest(VisualState::REST)
        .on_hover(
            VisualState::REST.scaled(1.05),
            Transition::new(GESTURE_DURATION),
        )
        .on_tap(
            VisualState::REST.scaled(0.95),
            Transition::new(GESTURE_DURATION),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn card_delay_is_monotonic_in_index() {
        let delays: Vec<Duration> = (0..4)
            .map(|i| feature_card(i).transition.delay)
            .collect();

        assert_eq!(delays[0], Duration::ZERO);
        assert!(delays.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(delays[3], Duration::from_millis(300));
    }

    #[test]
    fn card_enters_from_below_transparent() {
        let card = feature_card(1);
        let initial = card.initial.expect("cards have an entrance");

        assert_eq!(initial.opacity, 0.0);
        assert_eq!(initial.y, CARD_ENTER_OFFSET);
        assert_eq!(card.animate, VisualState::REST);
        assert_eq!(card.transition.duration, ENTER_DURATION);
    }

    #[test]
    fn heading_has_no_delay() {
        let heading = heading();

        assert_eq!(heading.transition.delay, Duration::ZERO);
        assert_eq!(heading.initial.map(|s| s.y), Some(HEADING_ENTER_OFFSET));
        assert!(heading.while_hover.is_none());
    }

    #[test]
    fn image_hover_raises_above_cards_and_reverts() {
        let image = showcase_image();

        let hovered = image.target(Interaction::Hovered);
        assert_eq!(hovered.scale, 1.5);
        assert!(hovered.z_index > Some(CARD_LAYER));
        assert!(hovered.z_index > image.animate.z_index);

        let released = image.target(Interaction::Resting);
        assert_eq!(released.scale, 1.0);
        assert_eq!(released.z_index, Some(IMAGE_LAYER));
    }

    #[test]
    fn image_enters_from_eighty_percent() {
        let image = showcase_image();
        let initial = image.initial.expect("image has an entrance");

        assert_eq!(initial.scale, 0.8);
        assert_eq!(initial.opacity, 0.0);
        assert_eq!(image.transition.delay, IMAGE_DELAY);
    }

    #[test]
    fn cta_scales_up_on_hover_down_on_press_and_back() {
        let cta = call_to_action();

        assert_eq!(cta.target(Interaction::Hovered).scale, 1.05);
        assert_eq!(cta.target(Interaction::Pressed).scale, 0.95);
        assert_eq!(cta.target(Interaction::Resting).scale, 1.0);
        assert!(cta.initial.is_none());
    }

    #[test]
    fn press_falls_back_to_hover_then_rest() {
        let card = feature_card(0);
        assert_eq!(card.target(Interaction::Pressed).scale, 1.05);

        let still = heading();
        assert_eq!(still.target(Interaction::Pressed), VisualState::REST);
    }

    #[test]
    fn classes_follow_configured_gestures() {
        assert_eq!(heading().classes(), "motion motion-enter");
        assert_eq!(feature_card(2).classes(), "motion motion-enter motion-hover");
        assert_eq!(call_to_action().classes(), "motion motion-hover motion-tap");
    }

    #[test]
    fn style_encodes_entrance_and_gestures() {
        let style = showcase_image().style();

        assert!(style.starts_with("--rest-opacity:1;"));
        assert!(style.contains("--rest-z:20;"));
        assert!(style.contains("--enter-scale:0.8;"));
        assert!(style.contains("--enter-opacity:0;"));
        assert!(style.contains("--enter-duration:800ms;--enter-delay:200ms;"));
        assert!(style.contains("--hover-scale:1.5;"));
        assert!(style.contains("--hover-z:30;"));
        assert!(style.contains("--gesture-duration:300ms;"));
        assert!(!style.contains("--tap-"));
    }

    #[test]
    fn style_without_entrance_omits_timing() {
        let style = call_to_action().style();

        assert!(!style.contains("--enter-"));
        assert!(style.contains("--hover-scale:1.05;"));
        assert!(style.contains("--tap-scale:0.95;"));
        assert!(style.contains("--gesture-duration:200ms;"));
    }

    #[test]
    fn stagger_saturates() {
        assert_eq!(stagger(2, STAGGER_UNIT), Duration::from_millis(200));
        assert_eq!(stagger(usize::MAX, Duration::MAX), Duration::MAX);
    }
}
