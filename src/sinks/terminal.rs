//! Terminal sink implementation

use crate::core::{LineFormatter, LogEvent, LogSink, Result};
use std::io::{self, Write};

/// When the terminal sink prints the `file:line` of the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CallerDisplay {
    /// Only while debug mode is on
    #[default]
    DebugOnly,
    /// On every line
    Always,
}

/// Writes colored lines to standard output, or to any injected writer.
pub struct TerminalSink {
    writer: Box<dyn Write + Send>,
    formatter: LineFormatter,
    name: String,
}

impl TerminalSink {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Write to `writer` instead of stdout.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_adapter_logger::sinks::TerminalSink;
    ///
    /// let sink = TerminalSink::with_writer(std::io::sink()).with_colors(false);
    /// ```
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Box::new(writer),
            formatter: LineFormatter::new(),
            name: "stdout".to_string(),
        }
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.formatter = self.formatter.with_colors(use_colors);
        self
    }

    #[must_use]
    pub fn with_caller_display(mut self, display: CallerDisplay) -> Self {
        self.formatter = self
            .formatter
            .with_caller_always(display == CallerDisplay::Always);
        self
    }

    /// Default registry name; `"stdout"` unless overridden
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Default for TerminalSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for TerminalSink {
    fn handle(&mut self, event: &LogEvent) -> Result<()> {
        let line = self.formatter.render(event);
        self.writer.write_all(line.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogLevel, OutputMode};
    use chrono::DateTime;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Buffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().clone()).unwrap()
        }
    }

    #[track_caller]
    fn event(level: LogLevel, mode: OutputMode, message: &str) -> LogEvent {
        let fixed = DateTime::from_timestamp(1_498_405_744, 0).unwrap();
        LogEvent::new(level, mode, message).with_timestamp(fixed)
    }

    #[test]
    fn test_levels() {
        let cases = [
            (LogLevel::Message, "\x1b[37m2017/06/25 15:49:04 [msg] log test\x1b[0;00m\n"),
            (LogLevel::Error, "\x1b[91m2017/06/25 15:49:04 [error] log test\x1b[0;00m\n"),
            (LogLevel::Warning, "\x1b[93m2017/06/25 15:49:04 [warning] log test\x1b[0;00m\n"),
        ];

        for (level, expected) in cases {
            let buffer = Buffer::default();
            let mut sink = TerminalSink::with_writer(buffer.clone());
            sink.handle(&event(level, OutputMode::Line, "log test")).unwrap();
            assert_eq!(buffer.contents(), expected);
        }
    }

    #[test]
    fn test_without_colors() {
        let buffer = Buffer::default();
        let mut sink = TerminalSink::with_writer(buffer.clone()).with_colors(false);
        sink.handle(&event(LogLevel::Error, OutputMode::Formatted, "no color"))
            .unwrap();
        assert_eq!(buffer.contents(), "2017/06/25 15:49:04 [error] no color");
    }

    #[test]
    fn test_caller_always() {
        let buffer = Buffer::default();
        let mut sink = TerminalSink::with_writer(buffer.clone())
            .with_colors(false)
            .with_caller_display(CallerDisplay::Always);
        sink.handle(&event(LogLevel::Warning, OutputMode::Line, "with path"))
            .unwrap();
        let expected_line = line!() - 2;

        assert_eq!(
            buffer.contents(),
            format!("2017/06/25 15:49:04 [warning] terminal.rs:{} with path\n", expected_line)
        );
    }

    #[test]
    fn test_name() {
        assert_eq!(TerminalSink::new().name(), "stdout");
        assert_eq!(TerminalSink::new().with_name("console").name(), "console");
    }
}
