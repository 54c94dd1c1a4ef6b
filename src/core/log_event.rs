//! Log event structure

use super::caller::CallerInfo;
use super::log_level::LogLevel;
use super::output_mode::OutputMode;
use chrono::{DateTime, Utc};
use std::panic::Location;

/// Default maximum rendered line length, in characters.
pub const DEFAULT_MAX_LINE_SIZE: usize = 2000;

/// One logical log call.
///
/// Built once at the public entry point and handed by reference to every
/// sink of the fan-out, so all sinks observe the same timestamp, caller
/// and settings snapshot.
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub level: LogLevel,
    pub mode: OutputMode,
    /// Rendered message body (no prefix, no color, no line break)
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// Resolved call site; present only when debug mode was on
    pub caller: Option<CallerInfo>,
    /// Raw call site, always available for sinks that show it unconditionally
    pub location: &'static Location<'static>,
    pub debug_mode: bool,
    pub max_line_size: usize,
}

impl LogEvent {
    #[track_caller]
    pub fn new(level: LogLevel, mode: OutputMode, message: impl Into<String>) -> Self {
        Self {
            level,
            mode,
            message: message.into(),
            timestamp: Utc::now(),
            caller: None,
            location: Location::caller(),
            debug_mode: false,
            max_line_size: DEFAULT_MAX_LINE_SIZE,
        }
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Switch debug mode on or off for this event; resolves the caller from
    /// the recorded location when switched on.
    #[must_use]
    pub fn with_debug_mode(mut self, debug_mode: bool) -> Self {
        self.debug_mode = debug_mode;
        self.caller = debug_mode.then(|| CallerInfo::from_location(self.location));
        self
    }

    #[must_use]
    pub fn with_max_line_size(mut self, max_line_size: usize) -> Self {
        self.max_line_size = max_line_size;
        self
    }

    /// The call site, resolving it from `location` if debug mode left it empty.
    pub fn call_site(&self) -> CallerInfo {
        self.caller
            .unwrap_or_else(|| CallerInfo::from_location(self.location))
    }
}
