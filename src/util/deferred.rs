//! One-shot timers owned by the value that scheduled them.
//!
//! A `DeferredTask` fires once after its delay unless it is cancelled or
//! dropped first. Owners keep the task in a field and replace it to
//! reschedule, so no timer handle outlives the component it belongs to.
//!
//! Outside the browser the task is discarded without running; every task
//! scheduled here only touches browser state.

#[cfg(test)]
#[path = "deferred_test.rs"]
mod deferred_test;

/// Pending one-shot callback. Dropping it cancels the callback.
#[must_use = "dropping a DeferredTask cancels it"]
pub struct DeferredTask {
    #[cfg(feature = "hydrate")]
    timeout: Option<gloo_timers::callback::Timeout>,
}

impl DeferredTask {
    /// Run `task` after `delay_ms` milliseconds.
    pub fn schedule(delay_ms: u32, task: impl FnOnce() + 'static) -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self {
                timeout: Some(gloo_timers::callback::Timeout::new(delay_ms, task)),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (delay_ms, task);
            Self {}
        }
    }

    /// Cancel the callback if it has not run yet.
    pub fn cancel(self) {
        #[cfg(feature = "hydrate")]
        {
            let mut this = self;
            if let Some(timeout) = this.timeout.take() {
                let _ = timeout.cancel();
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self;
        }
    }
}

impl std::fmt::Debug for DeferredTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeferredTask").finish_non_exhaustive()
    }
}
