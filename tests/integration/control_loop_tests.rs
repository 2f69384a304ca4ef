//! End-to-end scenarios for [`ControlLoop`] driven through `poll()` with a
//! manual clock, the way the firmware main loop drives it.

use embedded_hal::digital::PinState;
use thermostat::app::events::AppEvent;
use thermostat::app::ports::{ClockPort, DisplayValue};
use thermostat::app::service::{ControlLoop, TickOutcome};
use thermostat::config::ThermostatConfig;
use thermostat::error::SensorError;

use crate::mock_hw::{ManualClock, MockHardware, RAW_18C, RAW_70C, RecordingSink};

const DIAL_MIN: u16 = 0;
const DIAL_MAX: u16 = 1023;

struct Rig {
    app: ControlLoop,
    hw: MockHardware,
    clock: ManualClock,
    sink: RecordingSink,
}

impl Rig {
    fn boot(thermistor: u16, dial: u16, now_ms: u32) -> Self {
        let mut app = ControlLoop::new(&ThermostatConfig::default()).unwrap();
        let mut hw = MockHardware::new(thermistor, dial);
        let mut sink = RecordingSink::new();
        app.start(now_ms, &mut hw, &mut sink);
        Self {
            app,
            hw,
            clock: ManualClock::at(now_ms),
            sink,
        }
    }

    fn poll(&mut self) -> Option<TickOutcome> {
        self.app.poll(&self.clock, &mut self.hw, &mut self.sink)
    }

    /// Poll every `step_ms` for `duration_ms`, collecting the tick
    /// outcomes together with the time they ran at.
    fn run(&mut self, duration_ms: u32, step_ms: u32) -> Vec<(u32, TickOutcome)> {
        let mut outcomes = Vec::new();
        let mut elapsed = 0;
        while elapsed < duration_ms {
            let now = self.clock.now_ms();
            if let Some(out) = self.poll() {
                outcomes.push((now, out));
            }
            self.clock.advance(step_ms);
            elapsed += step_ms;
        }
        outcomes
    }
}

fn heater_decisions(outcomes: &[(u32, TickOutcome)]) -> Vec<(u32, PinState)> {
    outcomes
        .iter()
        .filter_map(|(t, o)| o.heater_command.map(|level| (*t, level)))
        .collect()
}

// ── Boot and display mode ─────────────────────────────────────

#[test]
fn dial_at_minimum_targets_62_and_goes_live_after_preview() {
    let mut rig = Rig::boot(512, DIAL_MIN, 0);
    assert_eq!(rig.app.committed_target(), 62);
    assert_eq!(rig.hw.last_shown(), Some(DisplayValue::Target(62)));
    assert!(matches!(
        rig.sink.events.first(),
        Some(AppEvent::Started { target_c: 62 })
    ));

    let outcomes = rig.run(3000, 10);
    for (t, out) in &outcomes {
        if *t < 2500 {
            assert_eq!(out.display, DisplayValue::Target(62), "t={t}");
        } else {
            assert!(
                matches!(out.display, DisplayValue::Temperature(c) if (24.0..25.5).contains(&c)),
                "t={t}: {:?}",
                out.display
            );
        }
    }
    assert_eq!(rig.app.committed_target(), 62);
}

#[test]
fn display_is_refreshed_on_every_pass() {
    let mut rig = Rig::boot(512, DIAL_MIN, 0);
    let ticks = rig.run(1000, 1).len();
    assert_eq!(rig.hw.refreshes, 1000);
    assert_eq!(ticks, 10);
}

#[test]
fn dial_moving_every_500ms_keeps_preview_open() {
    let mut rig = Rig::boot(512, DIAL_MIN, 0);
    let mut outcomes = Vec::new();

    for step in 0..10u32 {
        rig.hw.dial = if step % 2 == 0 { DIAL_MAX } else { DIAL_MIN };
        outcomes.extend(rig.run(500, 10));
    }

    assert!(
        outcomes
            .iter()
            .all(|(_, o)| matches!(o.display, DisplayValue::Target(_))),
        "live reading must never show while the dial keeps moving"
    );
    let changes = rig
        .sink
        .count(|e| matches!(e, AppEvent::TargetChanged { .. }));
    assert_eq!(changes, 10);

    let decisions = heater_decisions(&outcomes);
    assert!(!decisions.is_empty());
    for pair in decisions.windows(2) {
        assert!(pair[1].0 - pair[0].0 > 2000, "{:?}", pair);
    }
}

#[test]
fn stopping_the_dial_commits_and_reverts_to_live() {
    let mut rig = Rig::boot(512, DIAL_MIN, 0);
    rig.run(3000, 100);

    rig.hw.dial = DIAL_MAX;
    let changed_at = rig.clock.now_ms();
    let outcomes = rig.run(3000, 100);

    assert_eq!(rig.app.committed_target(), 99);
    for (t, out) in &outcomes {
        let in_window = t - changed_at < 2500;
        assert_eq!(
            matches!(out.display, DisplayValue::Target(99)),
            in_window,
            "t={t}"
        );
    }
    assert!(rig.sink.events.iter().any(|e| matches!(
        e,
        AppEvent::TargetChanged {
            from_c: 62,
            to_c: 99
        }
    )));
}

// ── Heater debounce ───────────────────────────────────────────

#[test]
fn cold_room_turns_heater_on_and_holds_through_dwell() {
    let mut rig = Rig::boot(RAW_18C, DIAL_MIN, 0);

    let first = rig.poll().unwrap();
    assert_eq!(first.heater_command, Some(PinState::High));
    assert_eq!(rig.hw.heater_level(), PinState::High);

    // Room suddenly reads ~70 °C, well above the 62 °C target.
    rig.hw.thermistor = RAW_70C;
    rig.clock.advance(100);
    let outcomes = rig.run(1950, 50);
    assert!(heater_decisions(&outcomes).is_empty());
    assert_eq!(rig.hw.heater_level(), PinState::High);

    // The dwell is strict: the first tick after 2000 ms switches off.
    let outcomes = rig.run(300, 50);
    let decisions = heater_decisions(&outcomes);
    assert_eq!(decisions.first().map(|d| d.1), Some(PinState::Low));
    assert!(decisions[0].0 > 2000);
    assert_eq!(rig.hw.heater_level(), PinState::Low);
}

#[test]
fn heater_decisions_are_spaced_by_dwell_over_a_long_run() {
    let mut rig = Rig::boot(RAW_18C, DIAL_MIN, 0);
    let mut outcomes = Vec::new();
    for i in 0..30u32 {
        rig.hw.thermistor = if i % 2 == 0 { RAW_18C } else { RAW_70C };
        outcomes.extend(rig.run(700, 25));
    }

    let decisions = heater_decisions(&outcomes);
    assert!(decisions.len() >= 5);
    for pair in decisions.windows(2) {
        assert!(pair[1].0 - pair[0].0 > 2000, "{:?}", pair);
    }
    let commanded = rig
        .sink
        .count(|e| matches!(e, AppEvent::HeaterCommanded { .. }));
    assert_eq!(commanded, decisions.len());
}

// ── Clock wrap ────────────────────────────────────────────────

#[test]
fn survives_millisecond_counter_wrap() {
    let boot = u32::MAX - 1000;
    let mut rig = Rig::boot(RAW_18C, DIAL_MIN, boot);

    let outcomes = rig.run(6000, 50);
    assert!(outcomes.len() >= 55);

    for (t, out) in &outcomes {
        let since_boot = t.wrapping_sub(boot);
        assert_eq!(
            matches!(out.display, DisplayValue::Target(62)),
            since_boot < 2500,
            "t={t}"
        );
    }

    let decisions = heater_decisions(&outcomes);
    assert_eq!(decisions.len(), 3);
    for pair in decisions.windows(2) {
        assert!(pair[1].0.wrapping_sub(pair[0].0) > 2000, "{:?}", pair);
    }
}

// ── Sensor faults ─────────────────────────────────────────────

#[test]
fn open_thermistor_forces_heater_off_then_recovers() {
    let mut rig = Rig::boot(RAW_18C, DIAL_MIN, 0);
    rig.run(3000, 100);
    assert_eq!(rig.hw.heater_level(), PinState::High);

    rig.hw.thermistor = 0;
    let out = rig.poll().unwrap();
    assert_eq!(out.measured, Err(SensorError::OpenCircuit));
    assert_eq!(out.heater_command, Some(PinState::Low));
    assert_eq!(out.display, DisplayValue::Fault);
    assert_eq!(rig.hw.heater_level(), PinState::Low);
    assert_eq!(rig.app.sensor_fault(), Some(SensorError::OpenCircuit));
    assert_eq!(
        rig.sink
            .count(|e| matches!(e, AppEvent::SensorFault(SensorError::OpenCircuit))),
        1
    );

    // Staying faulted never turns the heater back on and does not
    // re-announce the fault.
    rig.clock.advance(100);
    let outcomes = rig.run(5000, 100);
    assert!(
        heater_decisions(&outcomes)
            .iter()
            .all(|(_, level)| *level == PinState::Low)
    );
    assert_eq!(rig.sink.count(|e| matches!(e, AppEvent::SensorFault(_))), 1);

    rig.hw.thermistor = RAW_18C;
    rig.run(2500, 100);
    assert_eq!(rig.app.sensor_fault(), None);
    assert_eq!(rig.sink.count(|e| matches!(e, AppEvent::SensorRecovered)), 1);
    assert_eq!(rig.hw.heater_level(), PinState::High);
}

#[test]
fn shorted_thermistor_is_reported_as_short() {
    let mut rig = Rig::boot(DIAL_MAX, DIAL_MIN, 0);
    let out = rig.poll().unwrap();
    assert_eq!(out.measured, Err(SensorError::ShortCircuit));
    assert_eq!(out.heater_command, Some(PinState::Low));
    // Still inside the boot preview, so the target wins over the fault.
    assert_eq!(out.display, DisplayValue::Target(62));
}

// ── Telemetry ─────────────────────────────────────────────────

#[test]
fn telemetry_is_emitted_on_its_own_cadence() {
    let mut rig = Rig::boot(512, DIAL_MIN, 0);
    rig.run(12_000, 100);

    let snapshots: Vec<_> = rig
        .sink
        .events
        .iter()
        .filter_map(|e| match e {
            AppEvent::Telemetry(t) => Some(*t),
            _ => None,
        })
        .collect();
    // t = 0, 5000, 10000
    assert_eq!(snapshots.len(), 3);
    assert_eq!(snapshots[2].uptime_ms, 10_000);
    assert_eq!(snapshots[2].target_c, 62);
    assert_eq!(snapshots[2].heater, PinState::High);
    assert!(!snapshots[2].showing_target);
    assert!(snapshots[0].showing_target);
}
