//! Outbound application events.
//!
//! The [`ControlLoop`](super::service::ControlLoop) emits these through the
//! [`EventSink`](super::ports::EventSink) port. Adapters on the other side
//! decide what to do with them.

use embedded_hal::digital::PinState;

use crate::error::SensorError;

/// Structured events emitted by the application core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The loop has been primed; carries the boot target.
    Started { target_c: i32 },

    /// The dial moved to a new target.
    TargetChanged { from_c: i32, to_c: i32 },

    /// A heater switching decision was issued.
    HeaterCommanded { level: PinState, measured_c: Option<f32>, target_c: i32 },

    /// The thermistor reading became unusable; heater forced off.
    SensorFault(SensorError),

    /// A valid reading returned after a fault.
    SensorRecovered,

    /// Periodic telemetry snapshot.
    Telemetry(TelemetryData),
}

/// A point-in-time telemetry snapshot suitable for logging or transmission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetryData {
    pub uptime_ms: u32,
    pub ticks: u64,
    /// `None` while the sensor is faulted.
    pub temperature_c: Option<f32>,
    pub target_c: i32,
    pub heater: PinState,
    pub showing_target: bool,
}
