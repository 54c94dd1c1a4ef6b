//! Fan-out of one event to every registered sink

use super::{
    log_event::LogEvent, metrics::LoggerMetrics, registry::SinkRegistry, sink::LogSink,
};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Delivers events to the sinks of a registry, in registration order.
///
/// **Per-sink failure isolation**: each sink call is wrapped in
/// `catch_unwind`, and errors are reported rather than propagated, so one
/// failing sink never keeps the event from the sinks after it.
pub struct Dispatcher {
    registry: Arc<SinkRegistry>,
    metrics: Arc<LoggerMetrics>,
}

impl Dispatcher {
    pub fn new(registry: Arc<SinkRegistry>, metrics: Arc<LoggerMetrics>) -> Self {
        Self { registry, metrics }
    }

    pub fn registry(&self) -> &Arc<SinkRegistry> {
        &self.registry
    }

    /// Deliver `event` to every sink that accepts it.
    ///
    /// Returns `true` if at least one sink failed. With no sinks registered
    /// this is a silent no-op.
    pub fn dispatch(&self, event: &LogEvent) -> bool {
        let mut has_error = false;

        self.registry.for_each(|entry| {
            let result = entry.with_sink(|sink| {
                panic::catch_unwind(AssertUnwindSafe(|| deliver(sink, event)))
            });

            match result {
                None => {
                    eprintln!(
                        "[LOGGER WARNING] Sink '{}' logged while handling an event; \
                         nested event not delivered to it",
                        entry.name()
                    );
                }
                Some(Ok(Ok(()))) => {}
                Some(Ok(Err(e))) => {
                    eprintln!("[LOGGER ERROR] Sink '{}' failed: {}", entry.name(), e);
                    self.metrics.record_sink_error();
                    has_error = true;
                }
                Some(Err(panic_info)) => {
                    eprintln!(
                        "[LOGGER CRITICAL] Sink '{}' panicked: {}. \
                         Other sinks continue to function.",
                        entry.name(),
                        panic_message(&*panic_info)
                    );
                    self.metrics.record_sink_panic();
                    has_error = true;
                }
            }
        });

        if has_error {
            self.metrics.record_failed();
        } else {
            self.metrics.record_logged();
        }

        has_error
    }

    /// Flush every sink; failures are reported and do not stop the others.
    ///
    /// Returns the first error encountered.
    pub fn flush(&self) -> super::error::Result<()> {
        let mut first_error = None;

        self.registry.for_each(|entry| {
            let result =
                entry.with_sink(|sink| panic::catch_unwind(AssertUnwindSafe(|| sink.flush())));

            match result {
                None | Some(Ok(Ok(()))) => {}
                Some(Ok(Err(e))) => {
                    eprintln!("[LOGGER ERROR] Sink '{}' flush failed: {}", entry.name(), e);
                    first_error.get_or_insert(e);
                }
                Some(Err(panic_info)) => {
                    eprintln!(
                        "[LOGGER CRITICAL] Sink '{}' panicked during flush: {}. \
                         Other sinks continue to function.",
                        entry.name(),
                        panic_message(&*panic_info)
                    );
                }
            }
        });

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

fn deliver(sink: &mut dyn LogSink, event: &LogEvent) -> super::error::Result<()> {
    if !sink.accepts(event) {
        return Ok(());
    }
    sink.handle(event)
}

fn panic_message(panic_info: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
