//! Dial position → target temperature.
//!
//! Linear integer range mapping with truncation, the same convention as the
//! classic Arduino `map()`:
//!
//! ```text
//!   target = low + raw * (high - low) / ADC_MAX
//! ```
//!
//! The range is validated once at construction; an inverted range can never
//! reach [`TargetSelector::select`].

use crate::config::ThermostatConfig;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSelector {
    low_c: i32,
    high_c: i32,
    adc_max: u16,
}

impl TargetSelector {
    /// Build a selector over `[low_c, high_c]` inclusive.
    pub fn new(low_c: i32, high_c: i32, adc_max: u16) -> Result<Self> {
        if low_c > high_c {
            return Err(Error::Config("target range inverted (low > high)"));
        }
        if adc_max == 0 {
            return Err(Error::Config("adc_max must be non-zero"));
        }
        Ok(Self {
            low_c,
            high_c,
            adc_max,
        })
    }

    /// Selector over `[room + offset, max_target]`.
    pub fn from_config(config: &ThermostatConfig) -> Result<Self> {
        Self::new(config.min_target_c(), config.max_target_c, config.adc_max)
    }

    /// Map a raw dial sample onto the target range. Samples above `ADC_MAX`
    /// are treated as full scale.
    pub fn select(&self, raw: u16) -> i32 {
        let raw = i64::from(raw.min(self.adc_max));
        let span = i64::from(self.high_c) - i64::from(self.low_c);
        let offset = raw * span / i64::from(self.adc_max);
        self.low_c + offset as i32
    }

    pub fn low_c(&self) -> i32 {
        self.low_c
    }

    pub fn high_c(&self) -> i32 {
        self.high_c
    }
}
