//! Wrap-safe millisecond timing primitives.
//!
//! The platform clock is a `u32` millisecond counter that wraps after
//! ~49.7 days. Every comparison here is done on `now.wrapping_sub(start)`,
//! which stays correct across the wrap as long as the measured interval is
//! shorter than `u32::MAX` ms.

/// A one-shot window of fixed length.
///
/// Expiry is latched: once a poll observes the window closed, the timer
/// stays idle until restarted. Without the latch an untouched timer would
/// appear to reopen every time the clock wrapped back past its start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    started_at: Option<u32>,
    duration_ms: u32,
}

impl Timer {
    /// An idle timer.
    pub const fn new(duration_ms: u32) -> Self {
        Self {
            started_at: None,
            duration_ms,
        }
    }

    /// (Re)open the window at `now_ms`.
    pub fn start(&mut self, now_ms: u32) {
        self.started_at = Some(now_ms);
    }

    /// True while `now < start + duration`.
    pub fn is_running(&mut self, now_ms: u32) -> bool {
        match self.started_at {
            Some(start) if now_ms.wrapping_sub(start) < self.duration_ms => true,
            Some(_) => {
                self.started_at = None;
                false
            }
            None => false,
        }
    }

    /// True once `now > start + duration`, i.e. strictly past the window.
    /// An idle timer counts as elapsed.
    pub fn has_elapsed(&self, now_ms: u32) -> bool {
        match self.started_at {
            Some(start) => now_ms.wrapping_sub(start) > self.duration_ms,
            None => true,
        }
    }

    pub fn started_at(&self) -> Option<u32> {
        self.started_at
    }
}

/// Fixed-cadence gate for the control tick.
///
/// Fires on the first poll, then whenever at least `period_ms` has passed
/// since the last firing. The next deadline is measured from the poll that
/// fired, so a stalled loop skips ticks instead of bursting to catch up.
#[derive(Debug, Clone, Copy)]
pub struct TickGate {
    period_ms: u32,
    last_tick_ms: Option<u32>,
}

impl TickGate {
    pub const fn new(period_ms: u32) -> Self {
        Self {
            period_ms,
            last_tick_ms: None,
        }
    }

    /// Returns `true` if a tick is due at `now_ms`, and consumes it.
    pub fn poll(&mut self, now_ms: u32) -> bool {
        let due = match self.last_tick_ms {
            None => true,
            Some(last) => now_ms.wrapping_sub(last) >= self.period_ms,
        };
        if due {
            self.last_tick_ms = Some(now_ms);
        }
        due
    }
}
