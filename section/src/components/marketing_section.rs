//! The full marketing section: heading, split card columns around the
//! showcase image, decorative backdrop and call-to-action.

use leptos::prelude::*;

use super::{DecorativeBackdrop, FeatureCard, GLYPH_ROCKET, Icon};
use crate::motion;
use crate::types::{
    CTA_HREF, CTA_LABEL, FEATURES, HEADING_ACCENT, HEADING_LEAD, IMAGE_ALT, IMAGE_SRC, SUBTITLE,
    split_columns,
};

/// The strategic marketing feature section.
///
/// Cards `0..2` go to the left column and `2..4` to the right one, each
/// keeping its table index so the entrance cascade continues across the
/// image. Narrow viewports stack the three blocks vertically.
#[component]
pub fn FeatureMarketingSection() -> impl IntoView {
    let (left, right) = split_columns(&FEATURES);
    let offset = left.len();

    let heading = motion::heading();
    let image = motion::showcase_image();
    let cta = motion::call_to_action();

    view! {
        <section class="py-20 bg-gradient-to-br from-gray-50 to-green-50 overflow-hidden">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div
                    class=format!("{} text-center mb-12", heading.classes())
                    style=heading.style()
                    data-role="heading"
                >
                    <h2 class="text-3xl md:text-4xl font-extrabold text-gray-900 mb-3">
                        {HEADING_LEAD}
                        <span class="text-primary-600">{HEADING_ACCENT}</span>
                    </h2>
                    <p class="text-lg text-gray-600 max-w-2xl mx-auto">{SUBTITLE}</p>
                </div>

                <div class="relative flex flex-col md:flex-row items-center justify-between">
                    <DecorativeBackdrop />

                    <div class="md:w-1/3 space-y-6 relative z-10" data-column="left">
                        {left
                            .iter()
                            .enumerate()
                            .map(|(index, feature)| view! { <FeatureCard feature={*feature} index=index /> })
                            .collect_view()}
                    </div>

                    <div
                        class=format!("{} md:w-1/2 my-8 md:my-0 relative", image.classes())
                        style=image.style()
                        data-role="showcase"
                    >
                        <img
                            src=IMAGE_SRC
                            alt=IMAGE_ALT
                            class="w-full rounded-lg shadow-2xl transition-shadow duration-300"
                        />
                    </div>

                    <div class="md:w-1/3 space-y-6 relative z-10" data-column="right">
                        {right
                            .iter()
                            .enumerate()
                            .map(|(i, feature)| view! { <FeatureCard feature={*feature} index={offset + i} /> })
                            .collect_view()}
                    </div>
                </div>

                <div class=format!("{} flex justify-center mt-8", cta.classes()) style=cta.style()>
                    <a
                        href=CTA_HREF
                        data-role="cta"
                        class="inline-flex items-center px-6 py-3 border border-transparent text-base font-medium rounded-md text-white bg-primary-600 hover:bg-primary-700 transition-colors duration-300 shadow-md hover:shadow-lg"
                    >
                        {CTA_LABEL}
                        <Icon glyph=GLYPH_ROCKET size="16" class="ml-2" />
                    </a>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn image_sits_above_cards_and_backdrop_is_first() {
        let html = view! { <FeatureMarketingSection /> }.to_html();

        let backdrop = html.find("motion-backdrop").unwrap();
        let left = html.find(r#"data-column="left""#).unwrap();
        assert!(backdrop < left);

        assert!(html.contains("--rest-z:20;"));
        assert!(html.contains("--hover-z:30;"));
        assert!(html.contains("--hover-scale:1.5;"));
        assert!(html.contains("relative z-10"));
    }

    #[test]
    fn heading_renders_lead_and_accent() {
        let html = view! { <FeatureMarketingSection /> }.to_html();

        assert!(html.contains(HEADING_ACCENT));
        assert!(html.contains(SUBTITLE));
        assert!(html.contains(r#"data-role="heading""#));
    }

    #[test]
    fn cta_wrapper_carries_press_and_hover() {
        let html = view! { <FeatureMarketingSection /> }.to_html();

        assert!(html.contains("motion motion-hover motion-tap flex justify-center"));
        assert!(html.contains("--tap-scale:0.95;"));
        assert!(html.contains(&format!(r#"href="{}""#, CTA_HREF)));
    }
}
