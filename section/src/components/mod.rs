//! Leptos UI components for the marketing section.
//!
//! # Component Hierarchy
//!
//! ```text
//! SectionDocument (standalone page only)
//! └── FeatureMarketingSection
//!     ├── heading block
//!     ├── DecorativeBackdrop
//!     ├── left column: FeatureCard x2 (indices 0, 1)
//!     ├── showcase image
//!     ├── right column: FeatureCard x2 (indices 2, 3)
//!     └── call-to-action link
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_section`] or
//! [`crate::render_page`], but can be mounted directly:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use marketing_leptos::components::FeatureMarketingSection;
//!
//! leptos::mount::mount_to_body(|| view! { <FeatureMarketingSection /> });
//! ```

mod backdrop;
mod document;
mod feature_card;
pub mod icons;
mod marketing_section;

pub use backdrop::{BACKDROP_PATH, DecorativeBackdrop};
pub use document::SectionDocument;
pub use feature_card::FeatureCard;
pub use icons::*;
pub use marketing_section::FeatureMarketingSection;
