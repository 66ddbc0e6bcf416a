//! Browser-only task helpers.
//!
//! Pages start API calls from event handlers and mount effects. Those futures
//! only make sense inside the WASM bundle; during SSR they are dropped unpolled
//! and the page renders its loading state.

use std::future::Future;

/// Run a future on the browser event loop. No-op outside the browser.
pub fn spawn<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "hydrate"))]
    drop(fut);
}

/// Sleep on a browser timer. Resolves immediately outside the browser.
pub async fn sleep_ms(ms: u32) {
    #[cfg(feature = "hydrate")]
    gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
    #[cfg(not(feature = "hydrate"))]
    let _ = ms;
}
