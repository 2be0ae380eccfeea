use contracts::PhotoId;
use leptos::prelude::*;

/// Index page: one card per photo id, linking to the detail route.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="cards-container">
            {PhotoId::ALL
                .iter()
                .map(|id| {
                    view! {
                        <a class="card card--link" href=id.href()>
                            {id.as_str()}
                        </a>
                    }
                })
                .collect_view()}
        </section>
    }
}
