//! Artificial loading delay shared by the panel slots.

use gloo_timers::future::TimeoutFuture;

/// How long the simulated loads take.
pub const PAUSE_MS: u32 = 1000;

/// Suspends the awaiting render path for a fixed duration, then
/// resolves with no payload. Nothing else in the app is blocked.
pub async fn pause() {
    TimeoutFuture::new(PAUSE_MS).await;
}
