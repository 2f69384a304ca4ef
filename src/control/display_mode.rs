//! Target-preview vs. live-reading display mode.
//!
//! Every change of the dial restarts a fixed preview window during which the
//! display shows the chosen target; outside the window it shows the measured
//! temperature. Any difference from the committed target counts as a change,
//! whatever its size or direction, so a dial that keeps moving keeps the
//! preview open.

use super::timing::Timer;

/// Result of one [`DisplayModeController::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayDecision {
    /// Target the rest of the loop must compare against.
    pub committed_target: i32,
    /// `true` → show the instantaneous target, `false` → show the measurement.
    pub show_target: bool,
    /// The instantaneous target differed from the committed one this tick.
    pub target_changed: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct DisplayModeController {
    committed_target: i32,
    preview: Timer,
}

impl DisplayModeController {
    /// Start with `initial_target` committed and the preview window open from
    /// `now_ms`, so the target is shown at power-up.
    pub fn new(initial_target: i32, preview_ms: u32, now_ms: u32) -> Self {
        let mut preview = Timer::new(preview_ms);
        preview.start(now_ms);
        Self {
            committed_target: initial_target,
            preview,
        }
    }

    /// Feed this tick's instantaneous target.
    pub fn update(&mut self, instantaneous_target: i32, now_ms: u32) -> DisplayDecision {
        let target_changed = instantaneous_target != self.committed_target;
        if target_changed {
            self.preview.start(now_ms);
        }

        let show_target = self.preview.is_running(now_ms);
        if show_target {
            self.committed_target = instantaneous_target;
        }

        DisplayDecision {
            committed_target: self.committed_target,
            show_target,
            target_changed,
        }
    }

    pub fn committed_target(&self) -> i32 {
        self.committed_target
    }
}
