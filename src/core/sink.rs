//! Sink trait for log output destinations

use super::{error::Result, log_event::LogEvent};

/// A destination that renders and delivers log events.
///
/// Each sink owns its configuration. The dispatcher consults [`accepts`]
/// before [`handle`], so a sink decides its own level filtering; the
/// default policy drops `Debug` events unless debug mode was on.
///
/// A sink may log or register sinks through its own logger from `handle`.
/// The nested event reaches every other sink but not the one already busy
/// on that thread. With a bounded async queue, nested logging from `handle`
/// blocks the worker once the queue is full; use an unbounded queue for
/// such sinks.
///
/// [`accepts`]: LogSink::accepts
/// [`handle`]: LogSink::handle
pub trait LogSink: Send {
    fn accepts(&self, event: &LogEvent) -> bool {
        event.level.is_enabled(event.debug_mode)
    }

    fn handle(&mut self, event: &LogEvent) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    /// Name the sink is registered under by default
    fn name(&self) -> &str;
}
