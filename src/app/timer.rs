//! One-shot timer handles.
//!
//! The controller never sleeps. It asks the runtime to schedule a timer under a
//! fresh [`TimerHandle`] and later receives that handle back when the timer
//! fires. Handles that no longer match a pending timer are ignored, which is
//! what makes cancellation safe even if the runtime delivers a late expiry.

use std::time::Duration;

/// Default time the splash screen stays up.
pub const DEFAULT_SPLASH_DELAY: Duration = Duration::from_millis(3000);

/// Opaque identifier for a scheduled one-shot timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Hands out unique timer handles.
#[derive(Debug, Clone, Default)]
pub struct TimerIds {
    next: u64,
}

impl TimerIds {
    pub fn next_handle(&mut self) -> TimerHandle {
        self.next = self.next.wrapping_add(1);
        TimerHandle(self.next)
    }
}
