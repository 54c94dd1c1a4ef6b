//! Main logger implementation

use super::{
    async_channel::AsyncChannel,
    caller::CallerInfo,
    config::LoggerConfig,
    dispatcher::Dispatcher,
    error::Result,
    log_event::{LogEvent, DEFAULT_MAX_LINE_SIZE},
    log_level::LogLevel,
    metrics::LoggerMetrics,
    output_mode::{concat_values, render_template, OutputMode},
    registry::SinkRegistry,
    sink::LogSink,
};
use chrono::{DateTime, Utc};
use std::fmt::{self, Display};
use std::panic::Location;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Default shutdown timeout for logger cleanup (5 seconds)
///
/// This timeout is used when the logger is dropped without explicit shutdown.
/// For custom timeout control, use the `shutdown()` method instead.
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Process exit status used by [`Logger::fatal`].
pub const FATAL_EXIT_CODE: i32 = 255;

/// Time source stamped on every event
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Logging context: debug mode, line limit, sink registry and, in async
/// mode, the delivery channel.
///
/// All public logging methods are `#[track_caller]`; the caller location
/// shown in debug mode is always the line that called them.
pub struct Logger {
    debug_mode: AtomicBool,
    max_line_size: AtomicUsize,
    clock: Clock,
    dispatcher: Arc<Dispatcher>,
    channel: Option<AsyncChannel>,
    /// Metrics for observability (delivered, failed, suppressed, queue pressure)
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// Synchronous logger with no sinks.
    #[must_use]
    pub fn new() -> Self {
        let metrics = Arc::new(LoggerMetrics::new());
        let dispatcher = Arc::new(Dispatcher::new(
            Arc::new(SinkRegistry::new()),
            Arc::clone(&metrics),
        ));

        Self {
            debug_mode: AtomicBool::new(false),
            max_line_size: AtomicUsize::new(DEFAULT_MAX_LINE_SIZE),
            clock: Arc::new(Utc::now),
            dispatcher,
            channel: None,
            metrics,
        }
    }

    /// Async logger with a bounded queue of `buffer_size` events.
    pub fn with_async(buffer_size: usize) -> Result<Self> {
        Self::builder().async_mode(buffer_size).build()
    }

    pub fn from_config(config: LoggerConfig) -> Result<Self> {
        Self::builder().config(config).build()
    }

    fn start_async(&mut self, capacity: Option<usize>) -> Result<()> {
        let channel = AsyncChannel::start(
            Arc::clone(&self.dispatcher),
            Arc::clone(&self.metrics),
            capacity,
        )?;
        self.channel = Some(channel);
        Ok(())
    }

    pub fn set_debug_mode(&self, enabled: bool) {
        self.debug_mode.store(enabled, Ordering::Relaxed);
    }

    pub fn debug_mode(&self) -> bool {
        self.debug_mode.load(Ordering::Relaxed)
    }

    pub fn set_max_line_size(&self, max_line_size: usize) {
        self.max_line_size.store(max_line_size, Ordering::Relaxed);
    }

    pub fn max_line_size(&self) -> usize {
        self.max_line_size.load(Ordering::Relaxed)
    }

    pub fn set_clock(&mut self, clock: Clock) {
        self.clock = clock;
    }

    /// Register `sink` under `name`, replacing any sink already registered
    /// with that name in place. Returns `true` on replacement.
    pub fn register_sink<S: LogSink + 'static>(&self, name: impl Into<String>, sink: S) -> bool {
        self.dispatcher.registry().register(name, Box::new(sink))
    }

    /// Register `sink` under its own [`LogSink::name`].
    pub fn add_sink<S: LogSink + 'static>(&self, sink: S) -> bool {
        let name = sink.name().to_string();
        self.register_sink(name, sink)
    }

    pub fn add_boxed_sink(&self, name: impl Into<String>, sink: Box<dyn LogSink>) -> bool {
        self.dispatcher.registry().register(name, sink)
    }

    pub fn sink_names(&self) -> Vec<String> {
        self.dispatcher.registry().names()
    }

    pub fn registry(&self) -> &Arc<SinkRegistry> {
        self.dispatcher.registry()
    }

    pub fn is_async(&self) -> bool {
        self.channel.is_some()
    }

    /// Line-mode call at an arbitrary level.
    ///
    /// Values are joined with no separator, whatever their type: `&[&1, &2]`
    /// renders as `12`. Put spaces in the values where they are wanted.
    ///
    /// ```
    /// use rust_adapter_logger::{LogLevel, Logger};
    ///
    /// let logger = Logger::new();
    /// logger.log_line(LogLevel::Message2, &[&"retries: ", &3, &" of ", &5]);
    /// ```
    #[track_caller]
    pub fn log_line(&self, level: LogLevel, values: &[&dyn Display]) {
        self.emit(level, OutputMode::Line, Location::caller(), || {
            concat_values(values)
        });
    }

    /// Formatted-mode call at an arbitrary level.
    #[track_caller]
    pub fn log_fmt(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        self.emit(level, OutputMode::Formatted, Location::caller(), || {
            render_template(args)
        });
    }

    /// Message with line break at the end; values are joined with no
    /// separator, as in [`log_line`](Self::log_line).
    #[track_caller]
    #[inline]
    pub fn println(&self, values: &[&dyn Display]) {
        self.log_line(LogLevel::Message, values);
    }

    /// Formatted message without line break at the end.
    #[track_caller]
    #[inline]
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Message, args);
    }

    #[track_caller]
    #[inline]
    pub fn errorln(&self, values: &[&dyn Display]) {
        self.log_line(LogLevel::Error, values);
    }

    #[track_caller]
    #[inline]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Error, args);
    }

    #[track_caller]
    #[inline]
    pub fn warningln(&self, values: &[&dyn Display]) {
        self.log_line(LogLevel::Warning, values);
    }

    #[track_caller]
    #[inline]
    pub fn warningf(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Warning, args);
    }

    /// Debug message with line break; nothing happens unless debug mode is on.
    #[track_caller]
    #[inline]
    pub fn debugln(&self, values: &[&dyn Display]) {
        self.log_line(LogLevel::Debug, values);
    }

    /// Formatted debug message; nothing happens unless debug mode is on.
    #[track_caller]
    #[inline]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Debug, args);
    }

    /// Log at Error level, drain pending events and exit the process with
    /// [`FATAL_EXIT_CODE`].
    #[track_caller]
    pub fn fatal(&self, values: &[&dyn Display]) -> ! {
        self.log_line(LogLevel::Error, values);
        self.wait();
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush before exit: {}", e);
        }
        std::process::exit(FATAL_EXIT_CODE)
    }

    fn emit(
        &self,
        level: LogLevel,
        mode: OutputMode,
        location: &'static Location<'static>,
        render: impl FnOnce() -> String,
    ) {
        let debug_mode = self.debug_mode();

        // Hard short-circuit: no caller resolution, no rendering, no sinks
        if !level.is_enabled(debug_mode) {
            self.metrics.record_debug_suppressed();
            return;
        }

        let event = LogEvent {
            level,
            mode,
            message: render(),
            timestamp: (self.clock)(),
            caller: debug_mode.then(|| CallerInfo::from_location(location)),
            location,
            debug_mode,
            max_line_size: self.max_line_size(),
        };

        match self.channel {
            Some(ref channel) => {
                if let Err(e) = channel.enqueue(event) {
                    eprintln!("[LOGGER WARNING] Log event dropped: {}", e);
                    self.metrics.record_failed();
                }
            }
            None => {
                self.dispatcher.dispatch(&event);
            }
        }
    }

    /// Block until every event logged so far has reached every sink.
    ///
    /// Returns immediately for a synchronous logger.
    pub fn wait(&self) {
        if let Some(ref channel) = self.channel {
            channel.wait();
        }
    }

    /// Like [`wait`](Self::wait) but gives up after `timeout`.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        match self.channel {
            Some(ref channel) => channel.wait_timeout(timeout),
            None => true,
        }
    }

    /// Events queued but not yet delivered (always 0 in sync mode)
    pub fn pending(&self) -> usize {
        self.channel.as_ref().map_or(0, AsyncChannel::pending)
    }

    /// Number of events for which at least one sink failed
    pub fn failed_count(&self) -> u64 {
        self.metrics.failed_count()
    }

    /// # Example
    ///
    /// ```
    /// use rust_adapter_logger::Logger;
    ///
    /// let logger = Logger::new();
    /// logger.errorln(&[&"disk full"]);
    ///
    /// let metrics = logger.metrics();
    /// assert_eq!(metrics.total_logged(), 1);
    /// assert_eq!(metrics.failure_rate(), 0.0);
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        self.dispatcher.flush()
    }

    /// Gracefully shutdown the logger with a custom timeout
    ///
    /// Closes the async queue, waits for the worker to deliver everything
    /// already queued, then flushes all sinks. Logging after shutdown on an
    /// async logger reports the event as dropped.
    ///
    /// **Note**: When the logger is dropped without calling `shutdown()` explicitly,
    /// it uses [`DEFAULT_SHUTDOWN_TIMEOUT`] (5 seconds).
    ///
    /// # Returns
    ///
    /// `true` if shutdown completed successfully within timeout, `false` otherwise
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rust_adapter_logger::Logger;
    /// use std::time::Duration;
    ///
    /// let mut logger = Logger::with_async(1000).unwrap();
    /// logger.println(&[&"Important message"]);
    ///
    /// if !logger.shutdown(Duration::from_secs(10)) {
    ///     eprintln!("Warning: Logger shutdown timed out");
    /// }
    /// ```
    pub fn shutdown(&mut self, timeout: Duration) -> bool {
        let drained = match self.channel {
            Some(ref mut channel) => channel.shutdown(timeout),
            None => true,
        };

        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
            return false;
        }

        drained
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Some(ref mut channel) = self.channel {
            if channel.is_running() {
                channel.shutdown(DEFAULT_SHUTDOWN_TIMEOUT);
            }
        }

        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }

        let failed = self.metrics.failed_count();
        if failed > 0 {
            eprintln!(
                "[LOGGER WARNING] Logger shutting down with {} failed deliveries (failure rate: {:.2}%)",
                failed,
                self.metrics.failure_rate()
            );
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_adapter_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .debug_mode(true)
///     .max_line_size(120)
///     .sink(TerminalSink::new())
///     .async_mode(1000)
///     .build()
///     .unwrap();
/// assert!(logger.is_async());
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    sinks: Vec<(String, Box<dyn LogSink>)>,
    clock: Option<Clock>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            sinks: Vec::new(),
            clock: None,
        }
    }

    /// Replace every knob with the values from `config`
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn debug_mode(mut self, enabled: bool) -> Self {
        self.config.debug_mode = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn max_line_size(mut self, max_line_size: usize) -> Self {
        self.config.max_line_size = max_line_size;
        self
    }

    /// Enable async mode with a bounded queue of `buffer_size` events
    ///
    /// If neither this nor `async_unbounded` is called, the logger
    /// dispatches synchronously on the caller's thread.
    #[must_use = "builder methods return a new value"]
    pub fn async_mode(mut self, buffer_size: usize) -> Self {
        self.config.async_capacity = Some(buffer_size);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn async_unbounded(mut self) -> Self {
        self.config.async_capacity = None;
        self.config.async_unbounded = true;
        self
    }

    /// Add a sink under its own name
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: LogSink + 'static>(mut self, sink: S) -> Self {
        let name = sink.name().to_string();
        self.sinks.push((name, Box::new(sink)));
        self
    }

    /// Add a sink under an explicit name
    #[must_use = "builder methods return a new value"]
    pub fn named_sink<S: LogSink + 'static>(mut self, name: impl Into<String>, sink: S) -> Self {
        self.sinks.push((name.into(), Box::new(sink)));
        self
    }

    /// Use `clock` instead of `Utc::now` for event timestamps
    #[must_use = "builder methods return a new value"]
    pub fn clock(mut self, clock: Clock) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the Logger
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid configuration or if the async worker
    /// thread cannot be started.
    pub fn build(self) -> Result<Logger> {
        self.config.validate()?;

        let mut logger = Logger::new();
        logger.set_debug_mode(self.config.debug_mode);
        logger.set_max_line_size(self.config.max_line_size);
        if let Some(clock) = self.clock {
            logger.set_clock(clock);
        }
        for (name, sink) in self.sinks {
            logger.add_boxed_sink(name, sink);
        }

        if self.config.is_async() {
            logger.start_async(self.config.async_capacity)?;
        }

        Ok(logger)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
