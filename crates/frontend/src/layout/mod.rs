pub mod nav_bar;
pub mod panels;

use leptos::prelude::*;
use nav_bar::NavBar;
use panels::{AnalyticsPanel, TeamPanel};

/// Root page shell shared by every route.
///
/// ```text
/// +------------------------------------------+
/// |                 NavBar                   |
/// +------------------------------------------+
/// |            routed content                |
/// +------------------------------------------+
/// |   Analytics slot   |     Team slot       |
/// +------------------------------------------+
/// ```
///
/// The two bottom slots are parallel: they load on their own and are
/// rendered alongside whatever the router put in the main area.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <NavBar />

            <main class="app-main">{children()}</main>

            <div class="panels-row">
                <AnalyticsPanel />
                <TeamPanel />
            </div>
        </div>
    }
}
