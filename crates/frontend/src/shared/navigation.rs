//! Navigation trail and history helpers.
//!
//! The router does not say where a navigation came from, so routed
//! pages record themselves here as they mount. The photo route then
//! asks for the previous entry to decide between its intercepted
//! (overlay) and direct (full page) renditions.

use leptos::prelude::*;
use web_sys::window;

/// The most recently visited routed path, if any.
///
/// Provided once at the application root and handed out via context.
/// Only the previous page matters for the interception decision, so
/// nothing older is kept.
#[derive(Clone, Copy)]
pub struct NavigationTrail {
    last_path: RwSignal<Option<String>>,
}

impl NavigationTrail {
    pub fn new() -> Self {
        Self {
            last_path: RwSignal::new(None),
        }
    }

    /// Record that a routed page mounted at `path` and return the path
    /// recorded before it. A repeat visit of the same path (a refresh)
    /// returns `None` and leaves the record unchanged. Mounting
    /// happens during render, so the writes stay untracked.
    pub fn visit(&self, path: &str) -> Option<String> {
        let previous = self.last_path.get_untracked();
        if previous.as_deref() != Some(path) {
            self.last_path
                .update_untracked(|p| *p = Some(path.to_string()));
        }
        log::debug!("trail: visited {path}, previous {previous:?}");
        previous.filter(|p| p.as_str() != path)
    }
}

impl Default for NavigationTrail {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a detail navigation should render as an overlay.
///
/// A navigation counts as "from within the app" when some other page
/// was on the trail before it. A direct load (or a refresh of the
/// same path) has no such entry and gets the full page.
pub fn is_intercepted(previous: Option<&str>, current: &str) -> bool {
    matches!(previous, Some(p) if p != current)
}

/// Pop one entry off the browser history stack.
pub fn history_back() {
    if let Some(w) = window() {
        if let Ok(history) = w.history() {
            let _ = history.back();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_visit_has_no_previous() {
        let trail = NavigationTrail::new();
        assert_eq!(trail.visit("/photo/1"), None);
    }

    #[test]
    fn test_visit_returns_the_page_before() {
        let trail = NavigationTrail::new();
        trail.visit("/");
        assert_eq!(trail.visit("/photo/1"), Some("/".to_string()));
        assert_eq!(trail.visit("/"), Some("/photo/1".to_string()));
    }

    #[test]
    fn test_refreshing_the_same_path_is_silent() {
        let trail = NavigationTrail::new();
        trail.visit("/");
        trail.visit("/photo/1");

        // A remount of the detail route must render full-page.
        assert_eq!(trail.visit("/photo/1"), None);
        assert_eq!(
            trail.last_path.get_untracked(),
            Some("/photo/1".to_string())
        );

        // And leaving it afterwards still sees it as the previous page.
        assert_eq!(trail.visit("/"), Some("/photo/1".to_string()));
    }

    #[test]
    fn test_direct_load_is_not_intercepted() {
        assert!(!is_intercepted(None, "/photo/1"));
    }

    #[test]
    fn test_in_app_navigation_is_intercepted() {
        assert!(is_intercepted(Some("/"), "/photo/1"));
        assert!(is_intercepted(Some("/photo/2"), "/photo/1"));
    }

    #[test]
    fn test_same_path_does_not_intercept_itself() {
        assert!(!is_intercepted(Some("/photo/1"), "/photo/1"));
    }
}
