//! Hardware adapter: bridges real peripherals to domain port traits.
//!
//! Owns the heater driver and the display driver and exposes them, along
//! with the ADC1 channels, through [`AnalogPort`], [`HeaterPort`] and
//! [`DisplayPort`]. Generic over the output pin type so the same adapter
//! runs on [`GpioPin`](crate::drivers::hw_init::GpioPin)s on the device and
//! on mock pins in tests.

use embedded_hal::digital::{OutputPin, PinState};
use log::warn;

use crate::app::ports::{AnalogChannel, AnalogPort, DisplayPort, DisplayValue, HeaterPort};
use crate::drivers::heater::HeaterDriver;
use crate::drivers::hw_init;
use crate::drivers::seven_segment::SevenSegment;
use crate::pins;

/// Two-digit thermostat display.
pub type Display<P> = SevenSegment<P, 2>;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<P> {
    heater: HeaterDriver<P>,
    display: Display<P>,
}

impl<P: OutputPin> HardwareAdapter<P> {
    pub fn new(heater: HeaterDriver<P>, display: Display<P>) -> Self {
        Self { heater, display }
    }

    pub fn heater(&self) -> &HeaterDriver<P> {
        &self.heater
    }

    pub fn display(&self) -> &Display<P> {
        &self.display
    }

    /// Deselect every digit without touching the latched value. Call before
    /// any pause in refreshing so no single digit is left lit; the scan
    /// resumes on the next refresh.
    pub fn blank_display(&mut self) {
        if let Err(e) = self.display.blank() {
            warn!("display blank failed: {:?}", e);
        }
    }

    /// Heater off and display dark, e.g. before a restart.
    pub fn all_off(&mut self) {
        if let Err(e) = self.heater.set(PinState::Low) {
            warn!("heater off failed: {:?}", e);
        }
        self.blank_display();
    }
}

// ── AnalogPort implementation ─────────────────────────────────

impl<P: OutputPin> AnalogPort for HardwareAdapter<P> {
    fn read_raw(&mut self, channel: AnalogChannel) -> u16 {
        let adc_channel = match channel {
            AnalogChannel::Thermistor => pins::THERMISTOR_ADC_CHANNEL,
            AnalogChannel::Dial => pins::DIAL_ADC_CHANNEL,
        };
        hw_init::adc1_read(adc_channel) >> hw_init::ADC_RESOLUTION_SHIFT
    }
}

// ── HeaterPort implementation ─────────────────────────────────

impl<P: OutputPin> HeaterPort for HardwareAdapter<P> {
    fn set_heater(&mut self, level: PinState) {
        if let Err(e) = self.heater.set(level) {
            warn!("heater write failed: {:?}", e);
        }
    }
}

// ── DisplayPort implementation ────────────────────────────────

impl<P: OutputPin> DisplayPort for HardwareAdapter<P> {
    fn show(&mut self, value: DisplayValue) {
        self.display.set_number(value);
    }

    fn refresh(&mut self) {
        if let Err(e) = self.display.refresh() {
            warn!("display refresh failed: {:?}", e);
        }
    }
}
