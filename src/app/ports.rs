//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ControlLoop (domain)
//! ```
//!
//! Driven adapters (ADC, heater GPIO, display driver, clock, event sinks)
//! implement these traits. The [`ControlLoop`](super::service::ControlLoop)
//! consumes them via generics, so the domain core never touches hardware
//! directly. Every port call is synchronous and returns immediately.

use embedded_hal::digital::PinState;

// ───────────────────────────────────────────────────────────────
// Analog input port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// The two physical analog inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalogChannel {
    Thermistor,
    Dial,
}

/// Read-side port: latest conversion for a channel, in `[0, ADC_MAX]`.
pub trait AnalogPort {
    fn read_raw(&mut self, channel: AnalogChannel) -> u16;
}

// ───────────────────────────────────────────────────────────────
// Heater port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the relay / MOSFET output. Fire-and-forget.
pub trait HeaterPort {
    fn set_heater(&mut self, level: PinState);
}

// ───────────────────────────────────────────────────────────────
// Display port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// What the two-digit display should show. Rendering and truncation are
/// the driver's job.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DisplayValue {
    /// The user-selected target (°C).
    Target(i32),
    /// The measured temperature (°C).
    Temperature(f32),
    /// The thermistor reading could not be converted.
    Fault,
}

pub trait DisplayPort {
    /// Latch a new value; takes effect on the next refresh.
    fn show(&mut self, value: DisplayValue);

    /// Advance multiplexed rendering by one step. Must be called on every
    /// pass of the main loop, far more often than the control tick.
    fn refresh(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// Monotonic millisecond clock. Non-decreasing except for the wrap at
/// `u32::MAX`.
pub trait ClockPort {
    fn now_ms(&self) -> u32;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port. Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
