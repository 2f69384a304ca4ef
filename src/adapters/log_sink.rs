//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (which goes to UART / USB-CDC in production).

use log::{debug, info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Telemetry(t) => match t.temperature_c {
                Some(celsius) => info!(
                    "TELEM | up={}ms ticks={} | T={:.1}\u{00b0}C target={}\u{00b0}C | heater={:?} | display={}",
                    t.uptime_ms,
                    t.ticks,
                    celsius,
                    t.target_c,
                    t.heater,
                    if t.showing_target { "target" } else { "live" },
                ),
                None => info!(
                    "TELEM | up={}ms ticks={} | T=FAULT target={}\u{00b0}C | heater={:?}",
                    t.uptime_ms, t.ticks, t.target_c, t.heater,
                ),
            },
            AppEvent::TargetChanged { from_c, to_c } => {
                info!("TARGET | {}\u{00b0}C -> {}\u{00b0}C", from_c, to_c);
            }
            AppEvent::HeaterCommanded {
                level,
                measured_c,
                target_c,
            } => {
                debug!(
                    "HEATER | {:?} (T={:?} target={}\u{00b0}C)",
                    level, measured_c, target_c
                );
            }
            AppEvent::SensorFault(e) => {
                warn!("FAULT | {}", e);
            }
            AppEvent::SensorRecovered => {
                info!("FAULT | cleared");
            }
            AppEvent::Started { target_c } => {
                info!("START | target={}\u{00b0}C", target_c);
            }
        }
    }
}
