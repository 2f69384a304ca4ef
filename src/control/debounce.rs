//! Dwell-time debounce for the heater relay.
//!
//! ```text
//!            decision issued
//!   Idle ─────────────────────▶ CoolingDown
//!    ▲                              │
//!    └──────── now > start + dwell ─┘
//! ```
//!
//! In `Idle` the next tick issues a switching decision for whatever the
//! comparison says and starts the dwell. While `CoolingDown` the output is
//! held no matter how often the comparison flips. The expiry check runs
//! before the `Idle` branch, so a tick that ends the dwell also issues the
//! next decision.
//!
//! Expiry is checked lazily: [`ActuatorDebouncer::state`] keeps reporting
//! `CoolingDown` with the last decision time until a tick past the dwell
//! issues the next one. `Idle` is only seen before the first decision.
//!
//! This is a fixed-interval debounce, not a hysteresis band.

use embedded_hal::digital::PinState;

use super::timing::Timer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceState {
    /// Free to issue a new decision.
    Idle,
    /// Holding the last decision until the dwell elapses.
    CoolingDown { since_ms: u32 },
}

#[derive(Debug, Clone, Copy)]
pub struct ActuatorDebouncer {
    dwell: Timer,
    level: PinState,
}

impl ActuatorDebouncer {
    /// Starts `Idle` with the output assumed LOW (heater off at boot).
    pub fn new(dwell_ms: u32) -> Self {
        Self {
            dwell: Timer::new(dwell_ms),
            level: PinState::Low,
        }
    }

    /// Evaluate one tick. Returns the level to drive when a decision is
    /// issued, `None` while the previous decision is being held.
    pub fn update(&mut self, heating_needed: bool, now_ms: u32) -> Option<PinState> {
        let level = if heating_needed {
            PinState::High
        } else {
            PinState::Low
        };
        self.decide(level, now_ms)
    }

    /// Issue `level` immediately regardless of the dwell, and start a new
    /// dwell. Used for sensor faults where the heater must go off now.
    pub fn force(&mut self, level: PinState, now_ms: u32) -> PinState {
        self.issue(level, now_ms)
    }

    fn decide(&mut self, level: PinState, now_ms: u32) -> Option<PinState> {
        if self.state() != DebounceState::Idle && !self.dwell.has_elapsed(now_ms) {
            return None;
        }
        Some(self.issue(level, now_ms))
    }

    fn issue(&mut self, level: PinState, now_ms: u32) -> PinState {
        self.level = level;
        self.dwell.start(now_ms);
        level
    }

    pub fn state(&self) -> DebounceState {
        match self.dwell.started_at() {
            Some(since_ms) => DebounceState::CoolingDown { since_ms },
            None => DebounceState::Idle,
        }
    }

    /// Level of the last issued decision.
    pub fn level(&self) -> PinState {
        self.level
    }
}
