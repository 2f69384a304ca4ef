//! Heater relay / MOSFET driver.
//!
//! A single digital output: HIGH energises the relay coil (or gates the
//! MOSFET) and the heater runs. The driver is a dumb actuator; switching
//! policy lives in the control loop's debouncer.

use embedded_hal::digital::{OutputPin, PinState};

pub struct HeaterDriver<P> {
    pin: P,
    level: PinState,
}

impl<P: OutputPin> HeaterDriver<P> {
    /// Take ownership of the output and drive it LOW.
    pub fn new(mut pin: P) -> Result<Self, P::Error> {
        pin.set_low()?;
        Ok(Self {
            pin,
            level: PinState::Low,
        })
    }

    pub fn set(&mut self, level: PinState) -> Result<(), P::Error> {
        self.pin.set_state(level)?;
        self.level = level;
        Ok(())
    }

    pub fn level(&self) -> PinState {
        self.level
    }

    pub fn is_on(&self) -> bool {
        self.level == PinState::High
    }
}
