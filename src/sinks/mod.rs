//! Sink implementations

pub mod error_tracking;
#[cfg(feature = "file")]
pub mod file;
#[cfg(feature = "network")]
pub mod tcp_transport;
pub mod terminal;

pub use error_tracking::{DeliveryCounters, ErrorReport, ErrorTrackingSink, Severity, Transport};
#[cfg(feature = "file")]
pub use file::{FileErrorPolicy, FileSink, DEFAULT_FILE_NAME};
#[cfg(feature = "network")]
pub use tcp_transport::TcpTransport;
pub use terminal::{CallerDisplay, TerminalSink};

pub use crate::core::LogSink;
