//! Thermostat Firmware: Main Entry Point
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter            LogEventSink      Esp32TimeAdapter │
//! │  (Analog+Heater+Display)    (EventSink)       (ClockPort)      │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              ControlLoop (pure logic)                  │    │
//! │  │  Thermistor · Dial · Display mode · Heater debounce    │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use log::info;

use thermostat::adapters::hardware::HardwareAdapter;
use thermostat::adapters::log_sink::LogEventSink;
use thermostat::adapters::time::Esp32TimeAdapter;
use thermostat::app::ports::ClockPort;
use thermostat::app::service::ControlLoop;
use thermostat::config::ThermostatConfig;
use thermostat::error::Error;
use thermostat::drivers::heater::HeaterDriver;
use thermostat::drivers::hw_init::{self, GpioPin};
use thermostat::drivers::seven_segment::{Polarity, SevenSegment};
use thermostat::pins;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("Thermostat v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration ──────────────────────────────────────
    let config = ThermostatConfig::default();
    config.validate()?;
    info!("Config: {}", serde_json::to_string(&config)?);

    // ── 3. Peripherals ────────────────────────────────────────
    if let Err(e) = hw_init::init_peripherals() {
        // Without ADC and GPIO there is nothing safe to do; the heater pin
        // was never configured as an output, so it stays released.
        log::error!("{} ({}), halting", Error::from(e), e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    let Ok(heater) = HeaterDriver::new(GpioPin::new(pins::HEATER_GPIO));
    let Ok(display) = SevenSegment::new(
        pins::DIGIT_GPIOS.map(GpioPin::new),
        pins::SEGMENT_GPIOS.map(GpioPin::new),
        Polarity::CommonCathode,
        config.display_brightness,
    );
    let mut hw = HardwareAdapter::new(heater, display);

    let clock = Esp32TimeAdapter::new();
    let mut log_sink = LogEventSink::new();

    // ── 4. Control loop ───────────────────────────────────────
    let mut app = ControlLoop::new(&config)?;
    app.start(clock.now_ms(), &mut hw, &mut log_sink);

    info!("System ready. Entering control loop.");

    loop {
        // The display needs refreshing on every pass, so the loop spins. Give
        // FreeRTOS one tick after each control tick so the idle task (and
        // its watchdog) still runs. The delay lasts a whole RTOS tick with
        // no refresh, so go dark for it rather than freeze one digit on.
        if app.poll(&clock, &mut hw, &mut log_sink).is_some() {
            hw.blank_display();
            FreeRtos::delay_ms(1);
        }
    }
}
