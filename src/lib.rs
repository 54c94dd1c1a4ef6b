//! # Rust Adapter Logger
//!
//! A leveled, colorized logging facility that fans every log call out to a
//! set of named sinks.
//!
//! ## Features
//!
//! - **Five levels**: Message, Message2, Warning, Debug and Error, each with
//!   its own prefix and terminal color
//! - **Two call modes**: line mode concatenates values and ends the line,
//!   formatted mode takes a format template
//! - **Pluggable sinks**: terminal, append-only file and error tracking,
//!   registered by name and replaceable at runtime
//! - **Caller annotation**: debug mode shows `file:line` of the call site
//! - **Async delivery**: optional ordered queue with a `wait` barrier
//!
//! ## Example
//!
//! ```
//! use rust_adapter_logger::prelude::*;
//!
//! let logger = Logger::builder()
//!     .sink(TerminalSink::new())
//!     .build()
//!     .unwrap();
//!
//! logger.println(&[&"Application started"]);
//! logger.errorf(format_args!("request {} failed", 42));
//! ```

pub mod core;
#[cfg(feature = "http")]
pub mod http_error;
pub mod global;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        CallerInfo, LogEvent, LogLevel, LogSink, Logger, LoggerBuilder, LoggerConfig, LoggerError,
        LoggerMetrics, OutputMode, Result, DEFAULT_SHUTDOWN_TIMEOUT, FATAL_EXIT_CODE,
    };
    #[cfg(feature = "file")]
    pub use crate::sinks::FileSink;
    pub use crate::sinks::{ErrorReport, ErrorTrackingSink, TerminalSink, Transport};
}

pub use core::{
    CallerInfo, LogEvent, LogLevel, LogSink, Logger, LoggerBuilder, LoggerConfig, LoggerError,
    LoggerMetrics, OutputMode, Result, DEFAULT_SHUTDOWN_TIMEOUT, FATAL_EXIT_CODE,
};
#[cfg(feature = "file")]
pub use sinks::FileSink;
pub use sinks::{ErrorTrackingSink, TerminalSink};
