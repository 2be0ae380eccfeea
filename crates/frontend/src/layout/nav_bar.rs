use leptos::prelude::*;

/// The fixed link set of the top bar, in display order.
pub const NAV_LINKS: [(&str, &str); 2] = [("/", "Dashboard"), ("/setting", "Settings")];

/// Top navigation bar, identical on every route.
///
/// Plain anchors: the router upgrades same-origin anchor clicks to
/// client-side navigations, which is what keeps the photo overlay
/// interception working.
#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="nav-bar">
            {NAV_LINKS
                .iter()
                .map(|(href, label)| {
                    view! {
                        <a class="nav-bar__link" href=*href>
                            {*label}
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_links_are_exactly_dashboard_and_settings() {
        assert_eq!(NAV_LINKS, [("/", "Dashboard"), ("/setting", "Settings")]);
    }
}
