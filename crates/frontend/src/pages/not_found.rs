use leptos::prelude::*;

/// Shared not-found view: router fallback and out-of-set photo ids.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1 class="not-found__title">"404"</h1>
            <p class="not-found__text">"This page could not be found."</p>
        </section>
    }
}
