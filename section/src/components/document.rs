//! Root document component - a standalone page hosting the section.

use leptos::prelude::*;

use super::FeatureMarketingSection;
use crate::PageOptions;
use crate::styles::{MOTION_CSS, tailwind_theme_script};

/// The complete HTML document
#[component]
pub fn SectionDocument(
    /// Title, language and script settings
    options: PageOptions,
) -> impl IntoView {
    let PageOptions {
        title,
        lang,
        tailwind_cdn,
    } = options;

    view! {
        <html lang=lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                {tailwind_cdn.map(|src| {
                    view! {
                        <script src=src></script>
                        <script>{tailwind_theme_script()}</script>
                    }
                })}
                <style>{MOTION_CSS}</style>
            </head>
            <body class="antialiased">
                <FeatureMarketingSection />
            </body>
        </html>
    }
}
