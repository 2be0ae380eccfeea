use contracts::PhotoId;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::{use_location, use_params_map};
use leptos_router::{ParamSegment, StaticSegment};

use crate::dialog::PhotoSheet;
use crate::layout::Shell;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFound;
use crate::pages::photo::PhotoPage;
use crate::shared::navigation::{is_intercepted, NavigationTrail};

/// Route table. The shell (nav bar + parallel panels) wraps every
/// route, the fallback included; `/setting` is linked from the nav
/// bar but has no page, so it lands on the fallback too.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=StaticSegment("") view=HomeRoute />
                    <Route
                        path=(StaticSegment("photo"), ParamSegment("id"))
                        view=PhotoRoute
                    />
                </Routes>
            </Shell>
        </Router>
    }
}

/// Index route: records itself on the trail, then renders the cards.
#[component]
fn HomeRoute() -> impl IntoView {
    let trail = expect_context::<NavigationTrail>();
    trail.visit("/");

    view! { <HomePage /> }
}

/// Photo detail route.
///
/// The interception decision is taken once, at mount: if another page
/// was on the trail before this one, the navigation came from within
/// the app and the detail renders as a sheet over the index content.
/// A direct load renders the sole full page. Ids outside the static
/// set resolve to not-found either way.
#[component]
fn PhotoRoute() -> impl IntoView {
    let trail = expect_context::<NavigationTrail>();
    let location = use_location();

    let path = location.pathname.get_untracked();
    let previous = trail.visit(&path);
    let intercepted = is_intercepted(previous.as_deref(), &path);

    let params = use_params_map();
    let id = Memo::new(move |_| {
        params
            .read()
            .get("id")
            .and_then(|raw| PhotoId::parse(&raw))
    });

    view! {
        {move || match id.get() {
            None => view! { <NotFound /> }.into_any(),
            Some(id) if intercepted => {
                view! {
                    <HomePage />
                    <PhotoSheet id=id />
                }
                    .into_any()
            }
            Some(id) => view! { <PhotoPage id=id /> }.into_any(),
        }}
    }
}
