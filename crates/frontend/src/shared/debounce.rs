//! Trailing-edge debounce for text input.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Delays an action until the input has been quiet for the configured
/// window. Each `run` cancels the pending timer, so only the last value
/// inside the window fires.
#[derive(Clone, Copy)]
pub struct Debouncer {
    delay_ms: u32,
    pending: StoredValue<Option<Timeout>, LocalStorage>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: StoredValue::new_local(None),
        }
    }

    pub fn run(&self, action: impl FnOnce() + 'static) {
        if let Some(previous) = self.pending.try_update_value(|p| p.take()).flatten() {
            previous.cancel();
        }
        self.pending
            .set_value(Some(Timeout::new(self.delay_ms, action)));
    }
}
