//! One-shot timer that completes a backdrop cross-fade.

use std::time::Duration;
use tokio::task::JoinHandle;

use crate::ui::events::{AppEvent, AppEventSender};

/// Holds at most one pending expiry.
///
/// Starting a new timer aborts the previous one, and dropping the timer
/// aborts whatever is still pending.
pub struct TransitionTimer {
    duration: Duration,
    pending: Option<JoinHandle<()>>,
}

impl TransitionTimer {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            pending: None,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Schedule `TransitionElapsed { generation }`, cancelling any pending one.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self, generation: u64, events: AppEventSender) {
        self.cancel();
        let duration = self.duration;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let _ = events.send(AppEvent::TransitionElapsed { generation });
        }));
    }

    /// Abort the pending timer. Returns true if one was still running.
    pub fn cancel(&mut self) -> bool {
        let Some(handle) = self.pending.take() else {
            return false;
        };
        let was_running = !handle.is_finished();
        handle.abort();
        if was_running {
            tracing::debug!("pending backdrop transition cancelled");
        }
        was_running
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for TransitionTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
