//! [`HardwareAdapter`] on simulated GPIO and ADC.
//!
//! The host build of `hw_init` keeps pin levels and ADC samples in process
//! statics. Only this file touches them, and each test owns a disjoint set
//! of pins or channels.

use embedded_hal::digital::PinState;
use thermostat::adapters::hardware::HardwareAdapter;
use thermostat::app::ports::{AnalogChannel, AnalogPort, DisplayPort, DisplayValue, HeaterPort};
use thermostat::drivers::heater::HeaterDriver;
use thermostat::drivers::hw_init::{self, GpioPin};
use thermostat::drivers::seven_segment::{Polarity, SevenSegment};
use thermostat::pins;

fn adapter(heater: i32, digits: [i32; 2], segments: [i32; 7]) -> HardwareAdapter<GpioPin> {
    hw_init::init_peripherals().unwrap();
    let heater = HeaterDriver::new(GpioPin::new(heater)).unwrap();
    let display = SevenSegment::new(
        digits.map(GpioPin::new),
        segments.map(GpioPin::new),
        Polarity::CommonCathode,
        90,
    )
    .unwrap();
    HardwareAdapter::new(heater, display)
}

fn lit_segments() -> Vec<bool> {
    pins::SEGMENT_GPIOS
        .iter()
        .map(|&pin| hw_init::sim_gpio_level(pin))
        .collect()
}

#[test]
fn analog_reads_are_scaled_to_ten_bits() {
    // Spare pins, so this test never races the board-pin test.
    let mut hw = adapter(20, [21, 22], [23, 24, 25, 26, 27, 28, 29]);

    hw_init::sim_set_adc(pins::THERMISTOR_ADC_CHANNEL, 2048);
    hw_init::sim_set_adc(pins::DIAL_ADC_CHANNEL, 4095);
    assert_eq!(hw.read_raw(AnalogChannel::Thermistor), 512);
    assert_eq!(hw.read_raw(AnalogChannel::Dial), 1023);

    hw_init::sim_set_adc(pins::DIAL_ADC_CHANNEL, 0);
    assert_eq!(hw.read_raw(AnalogChannel::Dial), 0);
}

#[test]
fn heater_and_display_drive_their_pins() {
    let mut hw = adapter(pins::HEATER_GPIO, pins::DIGIT_GPIOS, pins::SEGMENT_GPIOS);
    assert!(!hw_init::sim_gpio_level(pins::HEATER_GPIO));

    hw.set_heater(PinState::High);
    assert!(hw_init::sim_gpio_level(pins::HEATER_GPIO));
    assert!(hw.heater().is_on());

    // "24": first refresh puts the tens digit on the segment lines and
    // pulls its common low.
    hw.show(DisplayValue::Temperature(24.7));
    hw.refresh();
    assert_eq!(
        lit_segments(),
        vec![true, true, false, true, true, false, true]
    );
    assert!(!hw_init::sim_gpio_level(pins::DIGIT_GPIOS[0]));
    assert!(hw_init::sim_gpio_level(pins::DIGIT_GPIOS[1]));

    hw.all_off();
    assert!(!hw_init::sim_gpio_level(pins::HEATER_GPIO));
    assert!(hw_init::sim_gpio_level(pins::DIGIT_GPIOS[0]));
    assert!(hw_init::sim_gpio_level(pins::DIGIT_GPIOS[1]));
}

#[test]
fn blanking_mid_scan_darkens_digits_and_scan_resumes() {
    const DIGITS: [i32; 2] = [31, 32];
    const SEGMENTS: [i32; 7] = [33, 34, 35, 36, 37, 38, 39];
    let mut hw = adapter(30, DIGITS, SEGMENTS);
    let segments = || -> Vec<bool> {
        SEGMENTS
            .iter()
            .map(|&pin| hw_init::sim_gpio_level(pin))
            .collect()
    };

    hw.show(DisplayValue::Temperature(24.7));
    for _ in 0..5 {
        hw.refresh();
    }
    assert!(!hw_init::sim_gpio_level(DIGITS[0]));

    // Going dark before a pause in refreshing leaves no digit selected.
    hw.blank_display();
    assert!(hw_init::sim_gpio_level(DIGITS[0]));
    assert!(hw_init::sim_gpio_level(DIGITS[1]));

    // slots 5..=9 finish the tens digit, slot 10 selects the units digit
    for _ in 0..6 {
        hw.refresh();
    }
    assert!(hw_init::sim_gpio_level(DIGITS[0]));
    assert!(!hw_init::sim_gpio_level(DIGITS[1]));
    assert_eq!(segments(), vec![false, true, true, false, false, true, true]);
    assert!(!hw_init::sim_gpio_level(30));
}
