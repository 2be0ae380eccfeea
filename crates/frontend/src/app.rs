use crate::routes::routes::AppRoutes;
use crate::shared::navigation::NavigationTrail;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // The trail is how the photo route tells an in-app navigation
    // (render as overlay) apart from a direct page load (full page).
    provide_context(NavigationTrail::new());

    view! {
        <AppRoutes />
    }
}
