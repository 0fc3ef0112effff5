//! External pins.

use emu_core::{OutputPin, PulledLine};

/// The CPU's control pins. `true` means asserted for every pin, whatever
/// its electrical polarity.
#[derive(Debug, Default)]
pub struct Pins {
    // Outputs
    pub halt: OutputPin,
    pub iorq: OutputPin,
    pub m1: OutputPin,
    pub rfsh: OutputPin,

    // Inputs
    pub reset: bool,
    pub wait: bool,
    pub int: PulledLine,
    pub nmi: PulledLine,
}

impl Pins {
    /// Drop every output. Input lines belong to the devices driving them.
    pub(crate) fn release_outputs(&mut self) {
        self.halt.set(false);
        self.iorq.set(false);
        self.m1.set(false);
        self.rfsh.set(false);
    }
}
