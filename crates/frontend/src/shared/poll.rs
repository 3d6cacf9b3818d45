//! Fixed-interval polling loop for dashboard data.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;

/// Runs `tick` once immediately, then again every `interval_ms` until
/// stopped.
///
/// The token handed to each tick doubles as a staleness check: a fetch
/// that resolves after the task has been stopped must drop its result
/// instead of writing it into torn-down state.
pub struct PollTask {
    stopped: Arc<AtomicBool>,
}

impl PollTask {
    pub fn start<F, Fut>(interval_ms: u32, tick: F) -> Self
    where
        F: Fn(Arc<AtomicBool>) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        let stopped = Arc::new(AtomicBool::new(false));
        let token = Arc::clone(&stopped);

        spawn_local(async move {
            loop {
                if token.load(Ordering::Relaxed) {
                    break;
                }
                tick(Arc::clone(&token)).await;
                TimeoutFuture::new(interval_ms).await;
            }
        });

        Self { stopped }
    }

    /// Cancellation token shared with in-flight fetches.
    pub fn token(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stopped)
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }
}
