//! One-shot hardware peripheral initialization.
//!
//! Configures the ADC1 oneshot unit and the GPIO outputs using raw ESP-IDF
//! sys calls. Called once from `main()` before the control loop starts.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: real ADC reads and GPIO writes.
//! On host/test: ADC readings come from injectable atomics and GPIO writes
//! land in an in-memory level mask.

use core::convert::Infallible;
#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU16, AtomicU64, Ordering};

use embedded_hal::digital::{ErrorType, OutputPin};

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

use crate::pins;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    AdcInitFailed(i32),
    GpioConfigFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::AdcInitFailed(rc) => write!(f, "ADC1 init failed (rc={})", rc),
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
        }
    }
}

impl core::error::Error for HwInitError {}

/// ADC1 is sampled at 12 bits; the thermistor and dial models work on the
/// 10-bit range, so readings are shifted down by this many bits.
pub const ADC_RESOLUTION_SHIFT: u16 = 2;

#[cfg(target_os = "espidf")]
pub fn init_peripherals() -> Result<(), HwInitError> {
    // SAFETY: Called once from main() before the loop; single-threaded.
    unsafe {
        init_adc()?;
        init_gpio_outputs()?;
    }
    info!("hw_init: all peripherals configured");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals() -> Result<(), HwInitError> {
    log::info!("hw_init(sim): peripheral init skipped");
    Ok(())
}

// ── ADC (oneshot) ─────────────────────────────────────────────

#[cfg(target_os = "espidf")]
static mut ADC1_HANDLE: adc_oneshot_unit_handle_t = core::ptr::null_mut();

/// SAFETY: Must be called only from the single-threaded init path or the
/// main-loop ADC read path. `init_adc()` completes before the loop starts.
#[cfg(target_os = "espidf")]
unsafe fn adc1_handle() -> adc_oneshot_unit_handle_t {
    unsafe { ADC1_HANDLE }
}

#[cfg(target_os = "espidf")]
unsafe fn init_adc() -> Result<(), HwInitError> {
    let init_cfg = adc_oneshot_unit_init_cfg_t {
        unit_id: adc_unit_t_ADC_UNIT_1,
        ulp_mode: adc_ulp_mode_t_ADC_ULP_MODE_DISABLE,
        ..Default::default()
    };
    // SAFETY: ADC1_HANDLE is only written here, once at boot.
    let ret = unsafe { adc_oneshot_new_unit(&init_cfg, &raw mut ADC1_HANDLE) };
    if ret != ESP_OK as i32 { return Err(HwInitError::AdcInitFailed(ret)); }

    let chan_cfg = adc_oneshot_chan_cfg_t {
        atten: adc_atten_t_ADC_ATTEN_DB_12,
        bitwidth: adc_bitwidth_t_ADC_BITWIDTH_12,
    };

    for channel in [pins::THERMISTOR_ADC_CHANNEL, pins::DIAL_ADC_CHANNEL] {
        let ret = unsafe { adc_oneshot_config_channel(adc1_handle(), channel, &chan_cfg) };
        if ret != ESP_OK as i32 { return Err(HwInitError::AdcInitFailed(ret)); }
    }

    info!(
        "hw_init: ADC1 configured (CH{}=thermistor, CH{}=dial)",
        pins::THERMISTOR_ADC_CHANNEL,
        pins::DIAL_ADC_CHANNEL
    );
    Ok(())
}

/// Raw 12-bit reading of an ADC1 channel. A failed conversion reads as 0,
/// which the thermistor model reports as an open circuit.
#[cfg(target_os = "espidf")]
pub fn adc1_read(channel: u32) -> u16 {
    let mut raw: i32 = 0;
    // SAFETY: adc1_handle() contract, single-threaded main-loop access only.
    let ret = unsafe { adc_oneshot_read(adc1_handle(), channel, &mut raw) };
    if ret != ESP_OK as i32 {
        return 0;
    }
    raw.max(0) as u16
}

/// Boot-time raw samples of the simulated ADC1, indexed by channel: the
/// thermistor at mid-scale (about 25 °C), the dial at its minimum.
#[cfg(not(target_os = "espidf"))]
const fn sim_adc_defaults() -> [u16; 2] {
    let mut raw = [0; 2];
    raw[pins::THERMISTOR_ADC_CHANNEL as usize] = 2048;
    raw[pins::DIAL_ADC_CHANNEL as usize] = 0;
    raw
}

#[cfg(not(target_os = "espidf"))]
static SIM_ADC: [AtomicU16; 2] = {
    let raw = sim_adc_defaults();
    [AtomicU16::new(raw[0]), AtomicU16::new(raw[1])]
};

/// Inject a raw 12-bit reading for an ADC1 channel (host simulation).
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_adc(channel: u32, raw: u16) {
    if let Some(slot) = SIM_ADC.get(channel as usize) {
        slot.store(raw.min(4095), Ordering::Relaxed);
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn adc1_read(channel: u32) -> u16 {
    SIM_ADC
        .get(channel as usize)
        .map_or(0, |slot| slot.load(Ordering::Relaxed))
}

// ── GPIO Outputs ──────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_gpio_outputs() -> Result<(), HwInitError> {
    let output_pins = core::iter::once(pins::HEATER_GPIO)
        .chain(pins::DIGIT_GPIOS)
        .chain(pins::SEGMENT_GPIOS);

    for pin in output_pins {
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << pin,
            mode: gpio_mode_t_GPIO_MODE_OUTPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        let ret = unsafe { gpio_config(&cfg) };
        if ret != ESP_OK as i32 { return Err(HwInitError::GpioConfigFailed(ret)); }
        unsafe { gpio_set_level(pin, 0) };
    }

    info!("hw_init: GPIO outputs configured (heater, 2 digits, 7 segments)");
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: i32, high: bool) {
    // SAFETY: gpio_set_level writes to an already-configured output pin;
    // pin was validated during init_gpio_outputs(). Main-loop only.
    unsafe { gpio_set_level(pin, u32::from(high)); }
}

#[cfg(not(target_os = "espidf"))]
static SIM_GPIO_LEVELS: AtomicU64 = AtomicU64::new(0);

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(pin: i32, high: bool) {
    let mask = 1u64 << pin;
    if high {
        SIM_GPIO_LEVELS.fetch_or(mask, Ordering::Relaxed);
    } else {
        SIM_GPIO_LEVELS.fetch_and(!mask, Ordering::Relaxed);
    }
}

/// Last level written to `pin` (host simulation).
#[cfg(not(target_os = "espidf"))]
pub fn sim_gpio_level(pin: i32) -> bool {
    SIM_GPIO_LEVELS.load(Ordering::Relaxed) & (1u64 << pin) != 0
}

// ── embedded-hal bridge ───────────────────────────────────────

/// A configured output GPIO exposed as an [`OutputPin`], so drivers stay
/// generic over embedded-hal and can be tested with mock pins.
#[derive(Debug)]
pub struct GpioPin {
    gpio: i32,
}

impl GpioPin {
    /// Wrap a GPIO that `init_peripherals()` configured as an output.
    pub fn new(gpio: i32) -> Self {
        Self { gpio }
    }

    pub fn gpio(&self) -> i32 {
        self.gpio
    }
}

impl ErrorType for GpioPin {
    type Error = Infallible;
}

impl OutputPin for GpioPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        gpio_write(self.gpio, false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        gpio_write(self.gpio, true);
        Ok(())
    }
}
