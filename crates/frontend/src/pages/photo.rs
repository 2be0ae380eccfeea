use contracts::PhotoId;
use leptos::prelude::*;

/// Full-page rendition of the photo detail route, used on direct
/// loads. In-app navigations get the sheet overlay instead.
#[component]
pub fn PhotoPage(id: PhotoId) -> impl IntoView {
    view! { <div class="card card--photo">{id.as_str()}</div> }
}
