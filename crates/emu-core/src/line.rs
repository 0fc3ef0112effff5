//! Chip pins: driven outputs and multi-driver input lines.

use std::fmt;

/// Callback invoked with the new level when an output pin changes.
pub type PinCallback = Box<dyn FnMut(bool)>;

/// A boolean output pin with an optional change notification.
///
/// `true` means asserted, regardless of the pin's electrical polarity.
#[derive(Default)]
pub struct OutputPin {
    level: bool,
    on_change: Option<PinCallback>,
}

impl OutputPin {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.level
    }

    /// Drive the pin. The callback only fires on an actual transition.
    pub fn set(&mut self, level: bool) {
        if self.level != level {
            self.level = level;
            if let Some(callback) = self.on_change.as_mut() {
                callback(level);
            }
        }
    }

    /// Install (or replace) the change callback.
    pub fn on_change(&mut self, callback: impl FnMut(bool) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    /// Remove the change callback.
    pub fn clear_callback(&mut self) {
        self.on_change = None;
    }
}

impl fmt::Debug for OutputPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputPin")
            .field("level", &self.level)
            .field("callback", &self.on_change.is_some())
            .finish()
    }
}

/// An open-collector input line shared by several drivers.
///
/// Each source pulls the line with [`assert`](Self::assert) and lets go with
/// [`release`](Self::release). The line is active while at least one driver
/// holds it. The counter saturates rather than wrapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PulledLine {
    drivers: u8,
}

impl PulledLine {
    #[must_use]
    pub const fn new() -> Self {
        Self { drivers: 0 }
    }

    pub fn assert(&mut self) {
        self.drivers = self.drivers.saturating_add(1);
    }

    pub fn release(&mut self) {
        self.drivers = self.drivers.saturating_sub(1);
    }

    /// Drop every driver at once (e.g., on machine reset).
    pub fn clear(&mut self) {
        self.drivers = 0;
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.drivers > 0
    }

    #[must_use]
    pub const fn drivers(&self) -> u8 {
        self.drivers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn pulled_line_stays_active_until_last_driver_releases() {
        let mut line = PulledLine::new();
        line.assert();
        line.assert();
        line.release();
        assert!(line.is_active());
        line.release();
        assert!(!line.is_active());
        line.release();
        assert_eq!(line.drivers(), 0);
    }

    #[test]
    fn output_pin_reports_transitions_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut pin = OutputPin::new();
        pin.on_change(move |level| sink.borrow_mut().push(level));

        pin.set(true);
        pin.set(true);
        pin.set(false);

        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn clear_drops_every_driver() {
        let mut line = PulledLine::new();
        line.assert();
        line.assert();
        line.clear();
        assert!(!line.is_active());
    }

    #[test]
    fn cleared_callback_is_not_called() {
        let seen = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&seen);
        let mut pin = OutputPin::new();
        pin.on_change(move |_| *sink.borrow_mut() += 1);

        pin.set(true);
        pin.clear_callback();
        pin.set(false);

        assert_eq!(*seen.borrow(), 1);
        assert!(!pin.is_active());
    }
}
