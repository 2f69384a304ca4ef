//! System configuration parameters
//!
//! All tunable parameters for the thermostat. The firmware has no
//! persistent storage, so [`ThermostatConfig::default`] is the build-time
//! configuration; [`ThermostatConfig::validate`] runs once at boot before
//! any control component is constructed.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThermostatConfig {
    // --- ADC ---
    /// Full-scale raw reading of the analog inputs.
    pub adc_max: u16,

    // --- Thermistor model ---
    /// Fixed divider resistor R1 (ohms).
    pub divider_r1_ohms: f32,
    /// Steinhart–Hart coefficients.
    pub steinhart_c1: f32,
    pub steinhart_c2: f32,
    pub steinhart_c3: f32,

    // --- Target range ---
    /// Nominal room temperature (°C).
    pub room_temp_c: i32,
    /// Shift applied to the bottom of the dial range (°C).
    pub temp_offset_c: i32,
    /// Top of the dial range (°C). Two-digit display caps this at 99.
    pub max_target_c: i32,

    // --- Timing ---
    /// Control tick cadence (milliseconds)
    pub sample_interval_ms: u32,
    /// How long a changed target stays on the display (milliseconds)
    pub target_preview_ms: u32,
    /// Minimum hold between heater switching decisions (milliseconds)
    pub heater_dwell_ms: u32,
    /// Telemetry report interval (milliseconds)
    pub telemetry_interval_ms: u32,

    // --- Display ---
    /// Display brightness (0-100%)
    pub display_brightness: u8,
}

impl Default for ThermostatConfig {
    fn default() -> Self {
        Self {
            adc_max: 1023,

            divider_r1_ohms: 10_000.0,
            steinhart_c1: 1.009_249_5e-3,
            steinhart_c2: 2.378_405_4e-4,
            steinhart_c3: 2.019_202_7e-7,

            room_temp_c: 22,
            temp_offset_c: 40,
            max_target_c: 99,

            sample_interval_ms: 100,  // 10 Hz
            target_preview_ms: 2500,
            heater_dwell_ms: 2000,
            telemetry_interval_ms: 5000,

            display_brightness: 90,
        }
    }
}

impl ThermostatConfig {
    /// Lowest selectable target: the room temperature shifted by the offset.
    pub fn min_target_c(&self) -> i32 {
        self.room_temp_c + self.temp_offset_c
    }

    /// Reject values that would make a control component misbehave.
    /// Invalid values are rejected, never clamped.
    pub fn validate(&self) -> Result<()> {
        if self.adc_max == 0 {
            return Err(Error::Config("adc_max must be non-zero"));
        }
        if !(self.divider_r1_ohms.is_finite() && self.divider_r1_ohms > 0.0) {
            return Err(Error::Config("divider_r1_ohms must be positive"));
        }
        let coeffs = [self.steinhart_c1, self.steinhart_c2, self.steinhart_c3];
        if coeffs.iter().any(|c| !c.is_finite()) {
            return Err(Error::Config("steinhart coefficients must be finite"));
        }
        if self.min_target_c() > self.max_target_c {
            return Err(Error::Config("target range inverted (room + offset > max)"));
        }
        if self.sample_interval_ms == 0 {
            return Err(Error::Config("sample_interval_ms must be non-zero"));
        }
        if self.target_preview_ms == 0 || self.heater_dwell_ms == 0 {
            return Err(Error::Config("preview and dwell durations must be non-zero"));
        }
        if self.telemetry_interval_ms == 0 {
            return Err(Error::Config("telemetry_interval_ms must be non-zero"));
        }
        if self.display_brightness > 100 {
            return Err(Error::Config("display_brightness must be 0-100"));
        }
        Ok(())
    }
}
