//! Sensor models.
//!
//! Raw ADC sampling is an adapter concern; this module only turns raw
//! samples into physical quantities.

pub mod thermistor;

pub use thermistor::TemperatureSensor;
