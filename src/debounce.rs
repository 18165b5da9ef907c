//! Single-slot cancelable delayed task.
//!
//! A [`Debouncer`] holds at most one pending action. Scheduling a new action
//! cancels the previous one if its delay has not yet elapsed, so a burst of
//! triggers collapses into one action that runs `delay` after the last
//! trigger.
//!
//! Only the waiting period is cancelable. Once the delay elapses the action
//! is detached onto its own local task and runs to completion even if the
//! debouncer is rescheduled or dropped while it is still in flight.
//!
//! Tasks are spawned with [`tokio::task::spawn_local`], so a debouncer must
//! be used from inside a [`tokio::task::LocalSet`].

use std::future::Future;
use std::time::Duration;

use tokio::task::{self, JoinHandle};
use tokio::time::sleep;
use tracing::trace;

/// Holds the timer task of the one pending action, if any. Dropping the
/// debouncer cancels it.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace any pending action with `action`, to run after the delay.
    pub fn schedule<F>(&mut self, action: F)
    where
        F: Future<Output = ()> + 'static,
    {
        if self.cancel() {
            trace!("Superseded pending debounced action");
        }
        let delay = self.delay;
        self.pending = Some(task::spawn_local(async move {
            sleep(delay).await;
            trace!(?delay, "Debounce window elapsed");
            task::spawn_local(action);
        }));
    }

    /// Cancel the pending action. Returns `true` if one was still waiting.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => {
                let waiting = !handle.is_finished();
                handle.abort();
                waiting
            }
            None => false,
        }
    }

    /// `true` while an action is still waiting out its delay.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
