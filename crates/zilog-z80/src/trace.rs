//! Injected trace logging.
//!
//! The CPU owns its logger for the lifetime of the session instead of
//! reaching for a global one. Callers choose where records go.

use std::fmt;

use tracing::Level;

/// Logging capability handed to the CPU at construction.
pub trait TraceLog {
    /// Whether records at `level` would be kept. Checked before formatting,
    /// so a disabled level costs nothing beyond the call.
    fn enabled(&self, level: Level) -> bool;

    fn log(&mut self, level: Level, args: fmt::Arguments<'_>);
}

/// Forwards records to `tracing` under the `zilog_z80` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl TraceLog for TracingLog {
    fn enabled(&self, level: Level) -> bool {
        match level {
            Level::ERROR => tracing::enabled!(target: "zilog_z80", Level::ERROR),
            Level::WARN => tracing::enabled!(target: "zilog_z80", Level::WARN),
            Level::INFO => tracing::enabled!(target: "zilog_z80", Level::INFO),
            Level::DEBUG => tracing::enabled!(target: "zilog_z80", Level::DEBUG),
            _ => tracing::enabled!(target: "zilog_z80", Level::TRACE),
        }
    }

    fn log(&mut self, level: Level, args: fmt::Arguments<'_>) {
        // `tracing` macros need a constant level.
        match level {
            Level::ERROR => tracing::error!(target: "zilog_z80", "{args}"),
            Level::WARN => tracing::warn!(target: "zilog_z80", "{args}"),
            Level::INFO => tracing::info!(target: "zilog_z80", "{args}"),
            Level::DEBUG => tracing::debug!(target: "zilog_z80", "{args}"),
            _ => tracing::trace!(target: "zilog_z80", "{args}"),
        }
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLog;

impl TraceLog for NullLog {
    fn enabled(&self, _level: Level) -> bool {
        false
    }

    fn log(&mut self, _level: Level, _args: fmt::Arguments<'_>) {}
}

/// Keeps formatted records in memory. Useful for tests and the monitor.
#[derive(Debug, Clone)]
pub struct BufferLog {
    max_level: Level,
    records: Vec<(Level, String)>,
}

impl BufferLog {
    /// Keep records at `max_level` and more severe.
    #[must_use]
    pub fn new(max_level: Level) -> Self {
        Self {
            max_level,
            records: Vec::new(),
        }
    }

    #[must_use]
    pub fn records(&self) -> &[(Level, String)] {
        &self.records
    }
}

impl TraceLog for BufferLog {
    fn enabled(&self, level: Level) -> bool {
        // `Level` orders TRACE > DEBUG > ... > ERROR.
        level <= self.max_level
    }

    fn log(&mut self, level: Level, args: fmt::Arguments<'_>) {
        if self.enabled(level) {
            self.records.push((level, args.to_string()));
        }
    }
}

impl<T: TraceLog + ?Sized> TraceLog for std::rc::Rc<std::cell::RefCell<T>> {
    fn enabled(&self, level: Level) -> bool {
        self.borrow().enabled(level)
    }

    fn log(&mut self, level: Level, args: fmt::Arguments<'_>) {
        self.borrow_mut().log(level, args);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_log_filters_by_level() {
        let mut log = BufferLog::new(Level::DEBUG);
        log.log(Level::TRACE, format_args!("dropped"));
        log.log(Level::DEBUG, format_args!("kept {}", 1));
        log.log(Level::ERROR, format_args!("kept {}", 2));
        let texts: Vec<_> = log.records().iter().map(|(_, s)| s.as_str()).collect();
        assert_eq!(texts, ["kept 1", "kept 2"]);
    }

    #[test]
    fn null_log_is_silent() {
        let mut log = NullLog;
        assert!(!log.enabled(Level::ERROR));
        log.log(Level::ERROR, format_args!("nothing"));
    }
}
