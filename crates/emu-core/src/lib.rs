//! Core traits and types for cycle-accurate emulation.
//!
//! Components never run on their own. An external clock calls `tick()` once
//! per virtual pulse and the component reports how long to wait before the
//! next call.

mod bus;
mod clock;
mod cpu;
mod line;
mod observable;
mod ticks;

pub use bus::{Bus, SimpleBus};
pub use clock::{Clock, MasterClock, RunOutcome};
pub use cpu::{Cpu, Tick};
pub use line::{OutputPin, PulledLine};
pub use observable::{Observable, Value};
pub use ticks::Ticks;
