//! Decorative background path behind the card layout.

use leptos::prelude::*;

/// Dashed wave drawn across the layout container.
pub const BACKDROP_PATH: &str = "M0 300C0 300 200 100 500 300C800 500 1000 300 1000 300";

/// Ornamental overlay: fills its positioned parent, takes no layout space,
/// ignores the pointer and is hidden from assistive technology.
#[component]
pub fn DecorativeBackdrop() -> impl IntoView {
    view! {
        <div class="motion-backdrop absolute inset-0 pointer-events-none" aria-hidden="true">
            <svg
                class="w-full h-full"
                viewBox="0 0 1000 600"
                fill="none"
                xmlns="http://www.w3.org/2000/svg"
                focusable="false"
            >
                <path
                    d=BACKDROP_PATH
                    stroke="rgba(16, 185, 129, 0.2)"
                    stroke-width="4"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    stroke-dasharray="20 20"
                ></path>
            </svg>
        </div>
    }
}
