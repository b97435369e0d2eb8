//! Cancellable one-shot timer.
//!
//! In the browser this wraps `gloo_timers::callback::Timeout`. Native builds
//! keep the callback until [`Timer::fire`] runs it, which lets tests drive
//! timer-based state deterministically.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::time::Duration;

#[cfg(feature = "csr")]
type Handle = gloo_timers::callback::Timeout;
#[cfg(not(feature = "csr"))]
type Handle = Box<dyn FnOnce()>;

/// Holds at most one scheduled callback.
#[derive(Default)]
pub struct Timer {
    pending: Option<Handle>,
}

impl Timer {
    /// Schedule `callback` after `delay`, replacing (and cancelling) any
    /// callback scheduled earlier.
    pub fn schedule(&mut self, delay: Duration, callback: impl FnOnce() + 'static) {
        self.cancel();
        #[cfg(feature = "csr")]
        {
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            self.pending = Some(gloo_timers::callback::Timeout::new(millis, callback));
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = delay;
            self.pending = Some(Box::new(callback));
        }
    }

    /// Drop the scheduled callback without running it.
    ///
    /// Returns `false` when nothing was held; calling it again is harmless.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            #[cfg(feature = "csr")]
            Some(timeout) => {
                let _ = timeout.cancel();
                true
            }
            #[cfg(not(feature = "csr"))]
            Some(_) => true,
            None => false,
        }
    }

    /// Whether a callback is held. In the browser this stays `true` after the
    /// timeout elapsed until the holder schedules or cancels again.
    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }

    /// Run the held callback now. Returns `false` when nothing was held.
    #[cfg(not(feature = "csr"))]
    pub fn fire(&mut self) -> bool {
        match self.pending.take() {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }
}
