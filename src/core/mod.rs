//! Core logger types and traits

pub mod async_channel;
pub mod caller;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod formatter;
pub mod log_event;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod output_mode;
pub mod registry;
pub mod sink;

pub use async_channel::{AsyncChannel, PendingCounter};
pub use caller::CallerInfo;
pub use config::LoggerConfig;
pub use dispatcher::Dispatcher;
pub use error::{LoggerError, Result};
pub use formatter::{format_timestamp, render_line, truncate_line, LineFormatter, TIME_FORMAT};
pub use log_event::{LogEvent, DEFAULT_MAX_LINE_SIZE};
pub use log_level::{LogLevel, COLOR_RESET};
pub use logger::{Clock, Logger, LoggerBuilder, DEFAULT_SHUTDOWN_TIMEOUT, FATAL_EXIT_CODE};
pub use metrics::LoggerMetrics;
pub use output_mode::{concat_values, render_template, OutputMode};
pub use registry::{SinkEntry, SinkRegistry};
pub use sink::LogSink;
