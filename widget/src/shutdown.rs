//! Stop signal for the refresh loop, shared with the Ctrl-C handler.

use std::{
    sync::{Arc, Condvar, Mutex},
    time::Duration,
};

#[derive(Clone, Debug, Default)]
pub struct Shutdown {
    inner: Arc<Signal>,
}

#[derive(Debug, Default)]
struct Signal {
    stopped: Mutex<bool>,
    cv: Condvar,
}

impl Shutdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask every holder of this signal to stop.
    pub fn stop(&self) {
        let mut g = self.lock();
        *g = true;
        self.inner.cv.notify_all();
    }

    pub fn is_stopped(&self) -> bool {
        *self.lock()
    }

    /// Sleep for `duration`, waking early if stopped.
    /// Returns true if stopped.
    pub fn sleep(&self, duration: Duration) -> bool {
        let g = self.lock();
        let (stopped, _) = self
            .inner
            .cv
            .wait_timeout_while(g, duration, |stopped| !*stopped)
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *stopped
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, bool> {
        // A bool can't be left half-written; ignore poisoning.
        self.inner
            .stopped
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
