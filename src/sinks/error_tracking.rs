//! Error-tracking sink
//!
//! Forwards events to an external error-tracking service through a
//! [`Transport`]. The service's wire protocol belongs to the transport; the
//! sink only builds the report and keeps delivery counters.

use crate::core::{render_line, CallerInfo, LogEvent, LogLevel, LogSink, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Severity as understood by error trackers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
}

impl From<LogLevel> for Severity {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Message | LogLevel::Message2 => Severity::Info,
            LogLevel::Warning => Severity::Warning,
            LogLevel::Debug => Severity::Debug,
            LogLevel::Error => Severity::Error,
        }
    }
}

/// One forwarded event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub severity: Severity,
    /// Rendered line without color codes or line break
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub culprit: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ErrorReport {
    pub fn from_event(event: &LogEvent) -> Self {
        let message = render_line(event, false).trim_end_matches('\n').to_string();

        Self {
            severity: event.level.into(),
            message,
            culprit: event.caller.as_ref().map(CallerInfo::to_string),
            timestamp: event.timestamp,
        }
    }
}

/// Delivery mechanism of an error-tracking service.
///
/// Implementations must not block indefinitely; a failed delivery is
/// returned as an error.
pub trait Transport: Send {
    fn send(&mut self, report: &ErrorReport) -> Result<()>;

    fn name(&self) -> &str;
}

/// Counters shared between the sink and whoever observes it.
#[derive(Debug, Default)]
pub struct DeliveryCounters {
    calls: AtomicU64,
    failures: AtomicU64,
}

impl DeliveryCounters {
    /// Events handed to the transport
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }

    /// Transport deliveries that returned an error
    pub fn failures(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }
}

pub struct ErrorTrackingSink {
    transport: Box<dyn Transport>,
    errors_only: bool,
    counters: Arc<DeliveryCounters>,
}

impl ErrorTrackingSink {
    pub fn new<T: Transport + 'static>(transport: T) -> Self {
        Self {
            transport: Box::new(transport),
            errors_only: false,
            counters: Arc::new(DeliveryCounters::default()),
        }
    }

    /// Forward Error level only
    #[must_use]
    pub fn errors_only(mut self) -> Self {
        self.errors_only = true;
        self
    }

    /// Handle to the delivery counters; stays valid after registration.
    pub fn counters(&self) -> Arc<DeliveryCounters> {
        Arc::clone(&self.counters)
    }
}

impl LogSink for ErrorTrackingSink {
    fn accepts(&self, event: &LogEvent) -> bool {
        if self.errors_only {
            return event.level == LogLevel::Error;
        }
        event.level.is_enabled(event.debug_mode)
    }

    fn handle(&mut self, event: &LogEvent) -> Result<()> {
        self.counters.calls.fetch_add(1, Ordering::Relaxed);

        let report = ErrorReport::from_event(event);
        self.transport.send(&report).inspect_err(|_| {
            self.counters.failures.fetch_add(1, Ordering::Relaxed);
        })
    }

    fn name(&self) -> &str {
        "error-tracking"
    }
}
