//! Process-wide default logger
//!
//! Convenience entry points for code that does not carry a [`Logger`]
//! around. [`init`] installs a logger built from a [`LoggerBuilder`], e.g.
//! one in async mode; it must run before the first log call. Without it the
//! default logger is synchronous and starts with one [`TerminalSink`]
//! registered as `"stdout"`. More sinks may be registered at any time.
//!
//! The default logger lives until the process exits and is never dropped,
//! so an async default must be drained with [`wait`] before exiting.

use crate::core::{LogLevel, LogSink, Logger, LoggerBuilder, LoggerError, Result};
use crate::sinks::TerminalSink;
use once_cell::sync::OnceCell;
use std::fmt::{self, Display};

static DEFAULT_LOGGER: OnceCell<Logger> = OnceCell::new();

fn stdout_logger() -> Logger {
    let logger = Logger::new();
    logger.add_sink(TerminalSink::new());
    logger
}

/// Install the process-wide default logger.
///
/// # Errors
///
/// Returns an error if the builder's configuration is invalid, or if the
/// default logger was already installed or already used.
///
/// # Example
///
/// ```
/// use rust_adapter_logger::global;
/// use rust_adapter_logger::prelude::*;
///
/// global::init(Logger::builder().async_mode(1024).sink(TerminalSink::new())).unwrap();
/// global::println(&[&"Server started"]);
/// global::wait();
/// ```
pub fn init(builder: LoggerBuilder) -> Result<()> {
    let logger = builder.build()?;
    DEFAULT_LOGGER
        .set(logger)
        .map_err(|_| LoggerError::config("global", "default logger already initialized"))
}

/// The process-wide default logger
#[inline]
pub fn logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(stdout_logger)
}

pub fn set_debug_mode(enabled: bool) {
    logger().set_debug_mode(enabled);
}

pub fn debug_mode() -> bool {
    logger().debug_mode()
}

pub fn set_max_line_size(max_line_size: usize) {
    logger().set_max_line_size(max_line_size);
}

/// Register `sink` under `name` on the default logger; see
/// [`Logger::register_sink`].
pub fn register_sink<S: LogSink + 'static>(name: impl Into<String>, sink: S) -> bool {
    logger().register_sink(name, sink)
}

/// Block until the default logger delivered everything logged so far.
pub fn wait() {
    logger().wait();
}

#[track_caller]
pub fn println(values: &[&dyn Display]) {
    logger().log_line(LogLevel::Message, values);
}

#[track_caller]
pub fn printf(args: fmt::Arguments<'_>) {
    logger().log_fmt(LogLevel::Message, args);
}

#[track_caller]
pub fn errorln(values: &[&dyn Display]) {
    logger().log_line(LogLevel::Error, values);
}

#[track_caller]
pub fn errorf(args: fmt::Arguments<'_>) {
    logger().log_fmt(LogLevel::Error, args);
}

#[track_caller]
pub fn warningln(values: &[&dyn Display]) {
    logger().log_line(LogLevel::Warning, values);
}

#[track_caller]
pub fn warningf(args: fmt::Arguments<'_>) {
    logger().log_fmt(LogLevel::Warning, args);
}

#[track_caller]
pub fn debugln(values: &[&dyn Display]) {
    logger().log_line(LogLevel::Debug, values);
}

#[track_caller]
pub fn debugf(args: fmt::Arguments<'_>) {
    logger().log_fmt(LogLevel::Debug, args);
}

#[track_caller]
pub fn fatal(values: &[&dyn Display]) -> ! {
    logger().fatal(values)
}

#[cfg(feature = "http")]
#[track_caller]
pub fn http_error(status: http::StatusCode) -> http::Response<String> {
    logger().http_error(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_stdout_sink() {
        assert!(logger().registry().contains("stdout"));
        assert!(!logger().is_async());
    }

    #[test]
    fn test_init_after_first_use_is_rejected() {
        let _ = logger();
        let result = init(Logger::builder().async_mode(8));
        assert!(matches!(result, Err(LoggerError::InvalidConfiguration { .. })));
        assert!(!logger().is_async());
    }
}
