//! Control state machines driven once per tick by the control loop.
//!
//! | Module         | Decides                                        |
//! |----------------|------------------------------------------------|
//! | `target`       | dial sample → target °C                        |
//! | `display_mode` | show the target or the measured temperature    |
//! | `debounce`     | when the heater may switch again               |
//! | `timing`       | wrap-safe windows and the tick cadence gate    |

pub mod debounce;
pub mod display_mode;
pub mod target;
pub mod timing;

pub use debounce::{ActuatorDebouncer, DebounceState};
pub use display_mode::{DisplayDecision, DisplayModeController};
pub use target::TargetSelector;
pub use timing::{TickGate, Timer};
