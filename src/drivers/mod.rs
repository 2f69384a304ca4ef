//! Actuator and display drivers, and hardware initialisation.

pub mod heater;
pub mod hw_init;
pub mod seven_segment;
