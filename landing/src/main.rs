// Marketing landing page - browser build of the feature section
// Built with trunk: `trunk serve` from this directory

use leptos::prelude::*;
use marketing_leptos::components::FeatureMarketingSection;
use marketing_leptos::styles::MOTION_CSS;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}

#[component]
fn App() -> impl IntoView {
    view! {
        <style>{MOTION_CSS}</style>
        <main>
            <FeatureMarketingSection />
        </main>
    }
}
