//! Browser timers for the [`Debouncer`](crate::core::Debouncer).

use gloo_timers::callback::Timeout;

use crate::core::Scheduler;

/// `setTimeout`-backed scheduler. Dropping the returned [`Timeout`]
/// clears the timer.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    type Handle = Timeout;

    fn schedule(&self, wait_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(wait_ms, callback)
    }
}
