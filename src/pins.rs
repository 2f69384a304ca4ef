//! GPIO / peripheral pin assignments for the thermostat board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Analog inputs (ADC1)
// ---------------------------------------------------------------------------

/// 10 kΩ NTC thermistor against a 10 kΩ divider resistor.
/// ADC1 channel 1 (GPIO 2 on ESP32-S3).
pub const THERMISTOR_ADC_GPIO: i32 = 2;
pub const THERMISTOR_ADC_CHANNEL: u32 = 1;

/// 10 kΩ potentiometer wiper used as the target dial.
/// ADC1 channel 0 (GPIO 1 on ESP32-S3).
pub const DIAL_ADC_GPIO: i32 = 1;
pub const DIAL_ADC_CHANNEL: u32 = 0;

// ---------------------------------------------------------------------------
// Heater
// ---------------------------------------------------------------------------

/// Digital output to the relay board / MOSFET gate. HIGH = heating.
pub const HEATER_GPIO: i32 = 10;

// ---------------------------------------------------------------------------
// Two-digit seven-segment display (common cathode, multiplexed)
// ---------------------------------------------------------------------------

/// Digit select lines, most significant digit first.
pub const DIGIT_GPIOS: [i32; 2] = [11, 12];

/// Segment lines in `a b c d e f g` order. No resistors on the segments,
/// decimal point not wired.
pub const SEGMENT_GPIOS: [i32; 7] = [3, 4, 5, 6, 7, 8, 9];
