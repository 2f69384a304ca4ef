//! Control loop service, the hexagonal core.
//!
//! [`ControlLoop`] owns every piece of control state: the thermistor model,
//! the dial mapping, the display-mode and debounce state machines and the
//! tick cadence. All I/O flows through port traits injected at call sites,
//! making the whole loop testable with mock adapters.
//!
//! ```text
//!  AnalogPort ──▶ ┌────────────────────────────────┐ ──▶ EventSink
//!                 │          ControlLoop           │
//!   ClockPort ──▶ │ Thermistor · Dial · Display    │ ──▶ DisplayPort
//!                 │ mode · Heater debounce         │ ──▶ HeaterPort
//!                 └────────────────────────────────┘
//! ```
//!
//! Each gated tick, in order: read the thermistor, read the dial, update the
//! display mode and commit the target, run the heater debounce, then latch
//! the display value. Every pass through [`ControlLoop::poll`], tick or not,
//! refreshes the display.

use embedded_hal::digital::PinState;
use log::{debug, info, warn};

use crate::config::ThermostatConfig;
use crate::control::{
    ActuatorDebouncer, DisplayDecision, DisplayModeController, TargetSelector, TickGate,
};
use crate::error::{Result, SensorError};
use crate::sensors::TemperatureSensor;

use super::events::{AppEvent, TelemetryData};
use super::ports::{
    AnalogChannel, AnalogPort, ClockPort, DisplayPort, DisplayValue, EventSink, HeaterPort,
};

/// What one control tick decided. Returned for callers and tests; the
/// side effects have already gone through the ports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    pub measured: core::result::Result<f32, SensorError>,
    pub instantaneous_target: i32,
    pub decision: DisplayDecision,
    /// Level written to the heater this tick, if any.
    pub heater_command: Option<PinState>,
    pub display: DisplayValue,
}

pub struct ControlLoop {
    sensor: TemperatureSensor,
    selector: TargetSelector,
    /// `None` until the loop is primed by [`ControlLoop::start`] or by the
    /// first tick.
    display_mode: Option<DisplayModeController>,
    debouncer: ActuatorDebouncer,
    tick_gate: TickGate,
    telemetry_gate: TickGate,
    preview_ms: u32,
    sensor_fault: Option<SensorError>,
    last_measured: Option<f32>,
    showing_target: bool,
    tick_count: u64,
}

impl ControlLoop {
    /// Validate `config` and build the loop.
    ///
    /// Does **not** touch hardware or read the clock. Call
    /// [`start`](Self::start) next; a tick on an unstarted loop primes it
    /// at that tick's time instead.
    pub fn new(config: &ThermostatConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            sensor: TemperatureSensor::new(config),
            selector: TargetSelector::from_config(config)?,
            display_mode: None,
            debouncer: ActuatorDebouncer::new(config.heater_dwell_ms),
            tick_gate: TickGate::new(config.sample_interval_ms),
            telemetry_gate: TickGate::new(config.telemetry_interval_ms),
            preview_ms: config.target_preview_ms,
            sensor_fault: None,
            last_measured: None,
            showing_target: true,
            tick_count: 0,
        })
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Prime the loop: heater off, sample the dial once, commit it as the
    /// target and show it for one preview window from `now`.
    pub fn start(
        &mut self,
        now_ms: u32,
        hw: &mut (impl AnalogPort + HeaterPort + DisplayPort),
        sink: &mut impl EventSink,
    ) {
        self.display_mode = Some(self.prime(now_ms, hw, sink));
    }

    // ── Per-pass orchestration ────────────────────────────────

    /// One pass of the main loop: run a control tick if the cadence gate
    /// is open, then refresh the display.
    pub fn poll(
        &mut self,
        clock: &impl ClockPort,
        hw: &mut (impl AnalogPort + HeaterPort + DisplayPort),
        sink: &mut impl EventSink,
    ) -> Option<TickOutcome> {
        let now_ms = clock.now_ms();
        let outcome = if self.tick_gate.poll(now_ms) {
            Some(self.tick(now_ms, hw, sink))
        } else {
            None
        };
        hw.refresh();
        outcome
    }

    /// Run one control tick at `now_ms`, bypassing the cadence gate.
    pub fn tick(
        &mut self,
        now_ms: u32,
        hw: &mut (impl AnalogPort + HeaterPort + DisplayPort),
        sink: &mut impl EventSink,
    ) -> TickOutcome {
        self.tick_count += 1;

        let mut display_mode = match self.display_mode {
            Some(mode) => mode,
            None => {
                warn!("ControlLoop ticked before start(), priming at {}ms", now_ms);
                self.prime(now_ms, hw, sink)
            }
        };

        // 1. Thermistor
        let measured = self
            .sensor
            .estimate(hw.read_raw(AnalogChannel::Thermistor));

        // 2. Dial
        let instantaneous_target = self.selector.select(hw.read_raw(AnalogChannel::Dial));

        // 3. Display mode + target commit
        let previous_target = display_mode.committed_target();
        let decision = display_mode.update(instantaneous_target, now_ms);
        self.display_mode = Some(display_mode);
        if decision.target_changed {
            sink.emit(&AppEvent::TargetChanged {
                from_c: previous_target,
                to_c: instantaneous_target,
            });
        }

        // 4. Heater
        let heater_command = match measured {
            Ok(celsius) => self.heater_on_reading(celsius, decision.committed_target, now_ms, sink),
            Err(e) => self.heater_on_fault(e, now_ms, sink),
        };
        if let Some(level) = heater_command {
            hw.set_heater(level);
        }

        // 5. Display
        let display = if decision.show_target {
            DisplayValue::Target(instantaneous_target)
        } else {
            match measured {
                Ok(celsius) => DisplayValue::Temperature(celsius),
                Err(_) => DisplayValue::Fault,
            }
        };
        hw.show(display);

        self.last_measured = measured.ok();
        self.showing_target = decision.show_target;

        if self.telemetry_gate.poll(now_ms) {
            sink.emit(&AppEvent::Telemetry(self.build_telemetry(now_ms)));
        }

        TickOutcome {
            measured,
            instantaneous_target,
            decision,
            heater_command,
            display,
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn build_telemetry(&self, now_ms: u32) -> TelemetryData {
        TelemetryData {
            uptime_ms: now_ms,
            ticks: self.tick_count,
            temperature_c: self.last_measured,
            target_c: self.committed_target(),
            heater: self.debouncer.level(),
            showing_target: self.showing_target,
        }
    }

    /// Target used for heater decisions. The bottom of the range until
    /// the loop is primed.
    pub fn committed_target(&self) -> i32 {
        self.display_mode
            .as_ref()
            .map_or(self.selector.low_c(), DisplayModeController::committed_target)
    }

    pub fn is_started(&self) -> bool {
        self.display_mode.is_some()
    }

    /// Level of the last heater decision.
    pub fn heater_level(&self) -> PinState {
        self.debouncer.level()
    }

    pub fn sensor_fault(&self) -> Option<SensorError> {
        self.sensor_fault
    }

    /// Total control ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    // ── Internal ──────────────────────────────────────────────

    /// Heater off, sample the dial once, show it and open the preview
    /// window from `now_ms`.
    fn prime(
        &mut self,
        now_ms: u32,
        hw: &mut (impl AnalogPort + HeaterPort + DisplayPort),
        sink: &mut impl EventSink,
    ) -> DisplayModeController {
        hw.set_heater(PinState::Low);

        let target_c = self.selector.select(hw.read_raw(AnalogChannel::Dial));
        self.showing_target = true;
        hw.show(DisplayValue::Target(target_c));

        sink.emit(&AppEvent::Started { target_c });
        info!("ControlLoop started, target={}°C", target_c);
        DisplayModeController::new(target_c, self.preview_ms, now_ms)
    }

    fn heater_on_reading(
        &mut self,
        celsius: f32,
        target_c: i32,
        now_ms: u32,
        sink: &mut impl EventSink,
    ) -> Option<PinState> {
        if self.sensor_fault.take().is_some() {
            info!("Thermistor recovered: {:.1}°C", celsius);
            sink.emit(&AppEvent::SensorRecovered);
        }

        let previous = self.debouncer.level();
        let level = self.debouncer.update(celsius < target_c as f32, now_ms)?;
        if level != previous {
            debug!("Heater {:?} at {:.1}°C (target {}°C)", level, celsius, target_c);
        }
        self.emit_heater(level, Some(celsius), sink);
        Some(level)
    }

    /// Never drive the heater on a reading the model rejected: force it
    /// off on the first faulted tick, then keep re-issuing LOW at the
    /// normal dwell cadence until the sensor recovers.
    fn heater_on_fault(
        &mut self,
        error: SensorError,
        now_ms: u32,
        sink: &mut impl EventSink,
    ) -> Option<PinState> {
        if self.sensor_fault.is_none() {
            warn!("Thermistor fault: {}, heater forced off", error);
            self.sensor_fault = Some(error);
            sink.emit(&AppEvent::SensorFault(error));
            let level = self.debouncer.force(PinState::Low, now_ms);
            self.emit_heater(level, None, sink);
            return Some(level);
        }
        self.sensor_fault = Some(error);
        let level = self.debouncer.update(false, now_ms)?;
        self.emit_heater(level, None, sink);
        Some(level)
    }

    fn emit_heater(&self, level: PinState, measured_c: Option<f32>, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::HeaterCommanded {
            level,
            measured_c,
            target_c: self.committed_target(),
        });
    }
}
