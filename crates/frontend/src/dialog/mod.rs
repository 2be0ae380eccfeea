//! Bottom-sheet overlay for the intercepted photo route.
//!
//! Closing is decoupled from navigation: the sheet flips to its
//! `Closing` phase at once (so the slide-out transition can play) and
//! pops the history entry only after a fixed delay. The route change
//! that follows is what actually unmounts the overlay.

use contracts::PhotoId;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::navigation::history_back;

/// How long the slide-out transition runs before the history pop.
/// Must match the CSS transition duration on `.sheet`.
pub const CLOSE_DELAY_MS: u32 = 300;

/// Lifecycle of the sheet. There is no reopened state: once closing,
/// the sheet stays closing until the route change removes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetPhase {
    Open,
    Closing,
}

impl SheetPhase {
    /// Request dismissal. Idempotent: a second close request while
    /// the slide-out runs changes nothing.
    pub fn close(self) -> SheetPhase {
        SheetPhase::Closing
    }

    pub fn is_closing(self) -> bool {
        matches!(self, SheetPhase::Closing)
    }

    pub fn css_class(self) -> &'static str {
        match self {
            SheetPhase::Open => "sheet sheet--open",
            SheetPhase::Closing => "sheet sheet--closing",
        }
    }
}

/// The overlay shown when the photo detail route was reached from
/// within the app.
///
/// Dismissal is deliberately limited to the close button: clicks on
/// the backdrop and the Escape key are inert, matching the observed
/// product behavior.
#[component]
pub fn PhotoSheet(id: PhotoId) -> impl IntoView {
    let phase = RwSignal::new(SheetPhase::Open);

    let request_close = move || {
        if phase.get_untracked().is_closing() {
            return;
        }
        phase.set(phase.get_untracked().close());
        log::debug!("sheet closing, history pop in {CLOSE_DELAY_MS}ms");
        spawn_local(async move {
            TimeoutFuture::new(CLOSE_DELAY_MS).await;
            history_back();
        });
    };

    // Backdrop clicks are swallowed, not turned into dismissals.
    let swallow = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="sheet-overlay" on:click=swallow>
            <div class=move || phase.get().css_class()>
                <div class="sheet__header">
                    <h2 class="sheet__title">"Photo"</h2>
                    <button class="sheet__close" on:click=move |_| request_close()>
                        "\u{00d7}"
                    </button>
                </div>
                <div class="card card--photo">{id.as_str()}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_closes_to_closing() {
        assert_eq!(SheetPhase::Open.close(), SheetPhase::Closing);
    }

    #[test]
    fn test_close_is_idempotent() {
        assert_eq!(SheetPhase::Closing.close(), SheetPhase::Closing);
    }

    #[test]
    fn test_phase_css_classes() {
        assert_eq!(SheetPhase::Open.css_class(), "sheet sheet--open");
        assert_eq!(SheetPhase::Closing.css_class(), "sheet sheet--closing");
        assert!(!SheetPhase::Open.is_closing());
        assert!(SheetPhase::Closing.is_closing());
    }

    #[test]
    fn test_close_delay_matches_the_css_transition() {
        assert_eq!(CLOSE_DELAY_MS, 300);
    }
}
