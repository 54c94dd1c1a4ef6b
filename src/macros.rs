//! Logging macros.
//!
//! Line-mode macros (`*ln!`) take any number of `Display` values and
//! concatenate them; formatted macros (`*f!`) take a format template, like
//! `format!`. Every macro takes the logger first.
//!
//! # Examples
//!
//! ```
//! use rust_adapter_logger::prelude::*;
//! use rust_adapter_logger::{errorf, errorln, msgln};
//!
//! let logger = Logger::new();
//!
//! msgln!(logger, "Server started");
//!
//! let port = 8080;
//! msgln!(logger, "listening on port ", port);
//! errorf!(logger, "request {} failed: {}", 42, "timeout");
//! errorln!(logger, "disk full");
//! ```

/// Line-mode call at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_adapter_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_adapter_logger::logln;
/// logln!(logger, LogLevel::Message2, "second channel");
/// logln!(logger, LogLevel::Error, "code: ", 500);
/// ```
#[macro_export]
macro_rules! logln {
    ($logger:expr, $level:expr $(, $value:expr)* $(,)?) => {
        $logger.log_line($level, &[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

/// Formatted-mode call at an explicit level.
#[macro_export]
macro_rules! logf {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_fmt($level, ::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! msgln {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.println(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! msgf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.printf(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! errorln {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.errorln(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! warningln {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.warningln(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! warningf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warningf(::std::format_args!($($arg)+))
    };
}

/// Debug line; nothing is rendered unless debug mode is on.
///
/// # Examples
///
/// ```
/// # use rust_adapter_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_adapter_logger::debugln;
/// debugln!(logger, "cache miss for key ", 7);
/// ```
#[macro_export]
macro_rules! debugln {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.debugln(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(::std::format_args!($($arg)+))
    };
}

/// Error line followed by process exit.
///
/// # Examples
///
/// ```no_run
/// # use rust_adapter_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_adapter_logger::fatal;
/// fatal!(logger, "Unable to recover from error: ", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.fatal(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}
