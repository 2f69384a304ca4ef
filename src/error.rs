//! Unified error types for the thermostat firmware.
//!
//! A single `Error` enum that every subsystem converts into, keeping the
//! boot path's error handling uniform. All error types are `Copy` so they
//! can be carried inside events and snapshots without allocation.
//!
//! Thermistor faults are not funnelled here: they are an expected runtime
//! condition handled by the control loop, reported as [`SensorError`].

use core::fmt;

use crate::drivers::hw_init::HwInitError;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Configuration is invalid.
    Config(&'static str),
    /// Peripheral initialisation failed.
    Init(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Sensor errors
// ---------------------------------------------------------------------------

/// Degenerate thermistor readings.
///
/// The divider model maps a raw sample of `0` to an infinite thermistor
/// resistance and a raw sample of `ADC_MAX` to zero resistance. Neither has a
/// finite logarithm, so the Steinhart–Hart step is undefined for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// Raw sample at the bottom rail: thermistor leg open / disconnected.
    OpenCircuit,
    /// Raw sample at the top rail: thermistor leg shorted.
    ShortCircuit,
    /// The model produced a NaN or infinite temperature.
    NonFinite,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenCircuit => write!(f, "thermistor open circuit"),
            Self::ShortCircuit => write!(f, "thermistor short circuit"),
            Self::NonFinite => write!(f, "non-finite temperature"),
        }
    }
}

impl From<HwInitError> for Error {
    fn from(e: HwInitError) -> Self {
        match e {
            HwInitError::AdcInitFailed(_) => Self::Init("ADC1 oneshot unit"),
            HwInitError::GpioConfigFailed(_) => Self::Init("GPIO outputs"),
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
