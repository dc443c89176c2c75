//! Feature card: one descriptor, one staggered block.

use leptos::prelude::*;

use super::Icon;
use crate::motion;
use crate::types::FeatureDescriptor;

/// A single feature card.
///
/// `index` is the card's position in the whole table, not in its column; it
/// drives the entrance delay so cards cascade across both columns.
#[component]
pub fn FeatureCard(
    /// Card content
    feature: FeatureDescriptor,
    /// Position in the whole table
    index: usize,
) -> impl IntoView {
    let motion = motion::feature_card(index);
    let class = format!("{} rounded-xl p-6", motion.classes());

    view! {
        <article
            class=class
            style=motion.style()
            data-role="feature-card"
            data-index=index.to_string()
        >
            <div class="flex items-center mb-3">
                <div class="bg-primary-100 rounded-full p-2 mr-3">
                    <Icon glyph=feature.icon size="30" class="text-primary-600" />
                </div>
                <h3 class="text-lg font-bold text-gray-900">{feature.title}</h3>
            </div>
            <p class="text-sm text-gray-600 mb-2">{feature.description}</p>
            <p class="text-sm text-primary-600 font-semibold">{feature.value}</p>
        </article>
    }
}
