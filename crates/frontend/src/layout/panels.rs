//! Parallel panel slots rendered under the main content.
//!
//! Each slot simulates a slow load: it shows a skeleton card, waits
//! out the shared artificial delay in its own task, then swaps in its
//! placeholder markup. The slots never wait on each other or on the
//! routed content.

use crate::shared::pause::pause;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
fn PanelSlot(title: &'static str, modifier: &'static str) -> impl IntoView {
    let ready = RwSignal::new(false);

    // One task per slot, so completion order between slots is free.
    spawn_local(async move {
        pause().await;
        ready.set(true);
    });

    view! {
        <Show
            when=move || ready.get()
            fallback=|| view! { <div class="card card--skeleton"></div> }
        >
            <div class=format!("card card--{modifier}")>
                <h1 class="card__title">{title}</h1>
            </div>
        </Show>
    }
}

#[component]
pub fn AnalyticsPanel() -> impl IntoView {
    view! { <PanelSlot title="Analytics" modifier="analytics" /> }
}

#[component]
pub fn TeamPanel() -> impl IntoView {
    view! { <PanelSlot title="Team" modifier="team" /> }
}
