//! Shared helpers for integration tests

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rust_adapter_logger::core::Clock;
use rust_adapter_logger::prelude::*;
use std::io::{self, Write};
use std::sync::Arc;

/// Timestamp rendered as "2017/06/25 15:49:04"
pub const FIXED_SECS: i64 = 1_498_405_744;
pub const FIXED_PREFIX: &str = "2017/06/25 15:49:04";

pub fn fixed_clock() -> Clock {
    let fixed: DateTime<Utc> = DateTime::from_timestamp(FIXED_SECS, 0).expect("valid timestamp");
    Arc::new(move || fixed)
}

/// In-memory writer that can be inspected after being moved into a sink.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Plain terminal sink writing into a fresh buffer.
pub fn plain_terminal() -> (TerminalSink, SharedBuffer) {
    let buffer = SharedBuffer::new();
    let sink = TerminalSink::with_writer(buffer.clone()).with_colors(false);
    (sink, buffer)
}

/// Sink that records every event it receives.
#[derive(Clone, Default)]
pub struct Recorder {
    pub events: Arc<Mutex<Vec<LogEvent>>>,
    name: String,
}

impl Recorder {
    pub fn named(name: &str) -> Self {
        Self {
            events: Arc::default(),
            name: name.to_string(),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.events.lock().iter().map(|e| e.message.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }
}

impl LogSink for Recorder {
    fn handle(&mut self, event: &LogEvent) -> Result<()> {
        self.events.lock().push(event.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        if self.name.is_empty() {
            "recorder"
        } else {
            &self.name
        }
    }
}
