use gloo_timers::callback::Timeout;
use sms_ui_core::debounce::{Scheduler, Task};
use std::time::Duration;

/// Browser `setTimeout` scheduler. Dropping a handle clears its timeout.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay: Duration, task: Task) -> Timeout {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task)
    }

    fn cancel(&self, handle: Timeout) {
        drop(handle);
    }
}

/// Fire-and-forget timeout.
pub fn after(millis: u32, f: impl FnOnce() + 'static) {
    let _ = Timeout::new(millis, f).forget();
}
