//! NTC thermistor temperature model (10 kOhm NTC, Steinhart–Hart).
//!
//! The thermistor is the lower leg of a voltage divider against a fixed
//! resistor R1, read by the ADC:
//!
//! ```text
//!   R2      = R1 * (ADC_MAX / raw - 1)
//!   1 / T_k = c1 + c2 * ln(R2) + c3 * ln(R2)^3
//!   T_c     = T_k - 273.15
//! ```
//!
//! Higher raw readings mean lower thermistor resistance, which for an NTC
//! part means a higher temperature. Both rails are degenerate: `raw = 0`
//! divides by zero (open circuit) and `raw = ADC_MAX` gives zero resistance
//! (short circuit). They are reported as [`SensorError`]s so the caller can
//! never mistake them for a real measurement.

use crate::config::ThermostatConfig;
use crate::error::SensorError;

const KELVIN_OFFSET: f32 = 273.15;

/// Pure raw-sample → °C conversion. Holds only model constants.
#[derive(Debug, Clone, Copy)]
pub struct TemperatureSensor {
    adc_max: f32,
    r1_ohms: f32,
    c1: f32,
    c2: f32,
    c3: f32,
}

impl TemperatureSensor {
    pub fn new(config: &ThermostatConfig) -> Self {
        Self {
            adc_max: f32::from(config.adc_max),
            r1_ohms: config.divider_r1_ohms,
            c1: config.steinhart_c1,
            c2: config.steinhart_c2,
            c3: config.steinhart_c3,
        }
    }

    /// Thermistor resistance implied by `raw`. Infinite at `raw = 0`,
    /// zero at `raw = ADC_MAX`, negative above it.
    pub fn resistance_ohms(&self, raw: u16) -> f32 {
        self.r1_ohms * (self.adc_max / f32::from(raw) - 1.0)
    }

    /// Estimate the temperature in °C for one raw sample.
    pub fn estimate(&self, raw: u16) -> Result<f32, SensorError> {
        let r2 = self.resistance_ohms(raw);
        if r2.is_infinite() {
            return Err(SensorError::OpenCircuit);
        }
        if r2 <= 0.0 {
            return Err(SensorError::ShortCircuit);
        }

        let log_r2 = r2.ln();
        let inv_kelvin = self.c1 + self.c2 * log_r2 + self.c3 * log_r2 * log_r2 * log_r2;
        let celsius = 1.0 / inv_kelvin - KELVIN_OFFSET;

        if celsius.is_finite() {
            Ok(celsius)
        } else {
            Err(SensorError::NonFinite)
        }
    }
}
