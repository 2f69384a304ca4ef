//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements   | Connects to                      |
//! |-------------|--------------|----------------------------------|
//! | `hardware`  | AnalogPort   | ESP32 ADC1 (thermistor, dial)    |
//! |             | HeaterPort   | Relay / MOSFET GPIO              |
//! |             | DisplayPort  | Multiplexed 7-segment display    |
//! | `log_sink`  | EventSink    | Serial log output                |
//! | `time`      | ClockPort    | ESP32 system timer               |

pub mod hardware;
pub mod log_sink;
pub mod time;
