//! # marketing-leptos
//!
//! Leptos renderer for the strategic marketing feature section.
//!
//! The section is a single static view: a heading, four feature cards split
//! two and two around a centered promotional image, a decorative background
//! path and a call-to-action link. Content is fixed at build time.
//!
//! ## Quick Start
//!
//! ```rust
//! use marketing_leptos::{render_page, PageOptions};
//!
//! let html = render_page(&PageOptions::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - the feature table and the section copy
//! - [`motion`] - declarative entrance/hover/press descriptors
//! - [`components`] - Leptos UI components
//! - [`styles`] - motion stylesheet and utility-class theme
//!
//! ## Animation
//!
//! Components never drive frames. Every animated element carries a
//! [`motion::Motion`] compiled to CSS custom properties; the rules in
//! [`styles::MOTION_CSS`] hand them to the browser's animation engine.
//! Hover and press therefore work on a fully static page, no hydration
//! required.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod motion;
pub mod styles;
pub mod types;

use components::{FeatureMarketingSection, SectionDocument};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use styles::MOTION_CSS;

/// Default Tailwind CDN script used by [`PageOptions::default`].
pub const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

/// Render the section as an HTML fragment (no `<html>` shell).
///
/// The fragment opens with a `<style>` block holding [`styles::MOTION_CSS`],
/// so entrance, hover and press work wherever it is pasted. The host page
/// still has to load the utility classes.
pub fn render_section() -> String {
    view! {
        <style>{MOTION_CSS}</style>
        <FeatureMarketingSection />
    }
    .to_html()
}

/// Render a complete standalone HTML page hosting the section.
///
/// # Example
///
/// ```rust
/// use marketing_leptos::{render_page, PageOptions};
///
/// let options = PageOptions {
///     tailwind_cdn: None,
///     ..Default::default()
/// };
/// let html = render_page(&options);
/// assert!(!html.contains("cdn.tailwindcss.com"));
/// ```
pub fn render_page(options: &PageOptions) -> String {
    let doc = view! { <SectionDocument options=options.clone() /> };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Document-level settings for [`render_page`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageOptions {
    /// Contents of `<title>`
    pub title: String,
    /// Value of `<html lang>`
    pub lang: String,
    /// Tailwind script URL; `None` leaves class resolution to the host page
    pub tailwind_cdn: Option<String>,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: format!("{}{}", types::HEADING_LEAD, types::HEADING_ACCENT),
            lang: "en".into(),
            tailwind_cdn: Some(TAILWIND_CDN.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CTA_HREF, CTA_LABEL, FEATURES};
    use pretty_assertions::assert_eq;

    fn count(html: &str, needle: &str) -> usize {
        html.matches(needle).count()
    }

    fn position(html: &str, needle: &str) -> usize {
        html.find(needle)
            .unwrap_or_else(|| panic!("`{}` not rendered", needle))
    }

    #[test]
    fn renders_default_section_scenario() {
        let html = render_section();

        assert_eq!(count(&html, r#"data-role="feature-card""#), 4);
        assert_eq!(count(&html, "<img"), 1);
        assert_eq!(count(&html, "<h2"), 1);
        assert_eq!(count(&html, r#"data-role="cta""#), 1);
        assert!(html.contains(CTA_LABEL));
        assert!(!html.contains("<html"));
    }

    #[test]
    fn fragment_carries_its_motion_rules_once() {
        let html = render_section();

        assert!(html.starts_with("<style>"));
        assert_eq!(count(&html, "@keyframes motion-enter"), 1);
        assert!(html.contains(".motion-hover:hover"));
        assert!(html.contains(".motion-tap:active"));
        assert!(position(&html, "</style>") < position(&html, "<section"));
    }

    #[test]
    fn page_holds_a_single_motion_stylesheet() {
        let html = render_page(&PageOptions::default());

        assert_eq!(count(&html, "@keyframes motion-enter"), 1);
    }

    #[test]
    fn every_feature_text_appears_exactly_once() {
        let html = render_section();

        for feature in &FEATURES {
            assert_eq!(count(&html, feature.title), 1, "title {}", feature.title);
            assert_eq!(count(&html, feature.description), 1, "{}", feature.description);
            assert_eq!(count(&html, feature.value), 1, "{}", feature.value);
        }
    }

    #[test]
    fn feature_text_sits_under_its_icon() {
        let html = render_section();
        let mut last = 0;

        for feature in &FEATURES {
            let glyph = html[last..]
                .find(&format!(r#"data-glyph="{}""#, feature.icon.name))
                .map(|p| p + last)
                .expect("glyph rendered");
            let title = position(&html, feature.title);
            let description = position(&html, feature.description);
            let value = position(&html, feature.value);

            assert!(glyph < title && title < description && description < value);
            last = value;
        }
    }

    #[test]
    fn columns_keep_source_order_around_the_image() {
        let html = render_section();

        let left = position(&html, r#"data-column="left""#);
        let image = position(&html, r#"data-role="showcase""#);
        let right = position(&html, r#"data-column="right""#);

        let titles: Vec<usize> = FEATURES.iter().map(|f| position(&html, f.title)).collect();

        assert!(left < titles[0] && titles[0] < titles[1] && titles[1] < image);
        assert!(image < right && right < titles[2] && titles[2] < titles[3]);
    }

    #[test]
    fn right_column_continues_the_stagger() {
        let html = render_section();

        assert!(html.contains("--enter-delay:0ms"));
        assert!(html.contains("--enter-delay:100ms"));
        assert!(html.contains("--enter-delay:200ms"));
        assert!(html.contains("--enter-delay:300ms"));
        assert!(html.contains(r#"data-index="3""#));
    }

    #[test]
    fn cta_points_at_a_single_fixed_destination() {
        let html = render_section();

        assert!(!CTA_HREF.is_empty());
        assert_eq!(count(&html, "<a "), 1);
        assert_eq!(count(&html, &format!(r#"href="{}""#, CTA_HREF)), 1);
    }

    #[test]
    fn renders_page_document() {
        let html = render_page(&PageOptions::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="en""#));
        assert!(html.contains("<title>Elevate Your Marketing Strategy</title>"));
        assert!(html.contains(TAILWIND_CDN));
        assert!(html.contains("@keyframes motion-enter"));
        assert_eq!(count(&html, r#"data-role="feature-card""#), 4);
    }

    #[test]
    fn page_without_tailwind_keeps_motion_styles() {
        let options = PageOptions {
            title: "Preview".into(),
            lang: "de".into(),
            tailwind_cdn: None,
        };
        let html = render_page(&options);

        assert!(!html.contains("<script"));
        assert!(html.contains("<title>Preview</title>"));
        assert!(html.contains(r#"lang="de""#));
        assert!(html.contains("@keyframes motion-enter"));
    }
}
