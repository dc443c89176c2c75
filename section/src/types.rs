//! Section content: the feature table and the fixed copy around it.
//!
//! Everything here is compile-time data. The table is a `static` array of
//! exactly [`FEATURE_COUNT`] records; the order of the records decides the
//! column a card lands in and its entrance delay.
//!
//! # Example
//!
//! ```rust
//! use marketing_leptos::types::{split_columns, FEATURES};
//!
//! let (left, right) = split_columns(&FEATURES);
//! assert_eq!(left[0].title, "Tactical Planning");
//! assert_eq!(right[1].title, "Strategic Alignment");
//! ```

use serde::{Serialize, Serializer};

use crate::components::icons::{GLYPH_BULLSEYE, GLYPH_CHART_LINE, GLYPH_ROCKET, GLYPH_USERS};

/// An icon as static SVG path data on a 256x256 canvas.
///
/// Serializes as its name only; the path data is a rendering detail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    /// Stable identifier, rendered as `data-glyph`
    pub name: &'static str,
    /// SVG path data (the `d` attribute value)
    pub path: &'static str,
    /// Fill with the even-odd rule (nested rings punch holes)
    pub even_odd: bool,
}

impl Serialize for Glyph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}

/// One product capability shown as a feature card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FeatureDescriptor {
    /// Glyph shown in the circular badge
    pub icon: Glyph,
    /// Short label
    pub title: &'static str,
    /// One-sentence explanation
    pub description: &'static str,
    /// One-sentence benefit
    pub value: &'static str,
}

/// Number of cards in the section.
pub const FEATURE_COUNT: usize = 4;

/// The feature table, in display order.
pub static FEATURES: [FeatureDescriptor; FEATURE_COUNT] = [
    FeatureDescriptor {
        icon: GLYPH_BULLSEYE,
        title: "Tactical Planning",
        description: "Develop data-driven marketing tactics for each campaign.",
        value: "Align strategies with business goals and target personas.",
    },
    FeatureDescriptor {
        icon: GLYPH_USERS,
        title: "Persona Targeting",
        description: "Create and target specific customer personas for campaigns.",
        value: "Increase relevance and engagement with tailored messaging.",
    },
    FeatureDescriptor {
        icon: GLYPH_CHART_LINE,
        title: "KPI Tracking",
        description: "Monitor key performance indicators in real-time.",
        value: "Make data-driven decisions to optimize campaign performance.",
    },
    FeatureDescriptor {
        icon: GLYPH_ROCKET,
        title: "Strategic Alignment",
        description: "Ensure marketing efforts align with overall business strategy.",
        value: "Maximize ROI and achieve long-term business objectives.",
    },
];

/// Plain part of the section heading.
pub const HEADING_LEAD: &str = "Elevate Your ";
/// Highlighted part of the section heading.
pub const HEADING_ACCENT: &str = "Marketing Strategy";
/// Paragraph under the heading.
pub const SUBTITLE: &str = "Leverage our comprehensive marketing platform to plan, execute, and measure impactful campaigns across multiple channels.";

/// Centered promotional image, served by the host site.
pub const IMAGE_SRC: &str = "/image/MarketingTable.png";
/// Alt text for [`IMAGE_SRC`].
pub const IMAGE_ALT: &str = "Marketing Dashboard";

/// Call-to-action destination.
pub const CTA_HREF: &str = "/signup";
/// Call-to-action visible text.
pub const CTA_LABEL: &str = "Start Your Strategic Marketing Journey";

/// Split the table into the left and right columns.
///
/// The left column takes the first half (rounded up). Callers index the right
/// column starting at `left.len()` so positions stay global.
pub fn split_columns(features: &[FeatureDescriptor]) -> (&[FeatureDescriptor], &[FeatureDescriptor]) {
    features.split_at(features.len().div_ceil(2))
}
