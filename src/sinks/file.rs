//! File sink implementation
//!
//! Every event is appended with its own open-append-close cycle and a single
//! write, under an exclusive advisory lock, so concurrent writers never
//! interleave partial lines. The persisted line carries no color codes; the
//! optional terminal echo keeps them.

use crate::core::{LineFormatter, LogEvent, LogSink, LoggerError, Result};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Default file written by [`FileSink::new`].
pub const DEFAULT_FILE_NAME: &str = "file.log";

/// What the file sink does when the log file cannot be opened or written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileErrorPolicy {
    /// Report on stderr and abort the process
    #[default]
    Abort,
    /// Return the error to the dispatcher, which reports and counts it
    Propagate,
}

pub struct FileSink {
    path: PathBuf,
    echo: Option<Box<dyn Write + Send>>,
    echo_formatter: LineFormatter,
    file_formatter: LineFormatter,
    on_error: FileErrorPolicy,
}

impl FileSink {
    /// Append to [`DEFAULT_FILE_NAME`] and echo to stdout.
    pub fn new() -> Self {
        Self::with_path(DEFAULT_FILE_NAME)
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            echo: Some(Box::new(io::stdout())),
            echo_formatter: LineFormatter::new(),
            file_formatter: LineFormatter::plain(),
            on_error: FileErrorPolicy::default(),
        }
    }

    /// Echo to `writer` instead of stdout
    #[must_use]
    pub fn with_echo<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.echo = Some(Box::new(writer));
        self
    }

    /// Only append to the file
    #[must_use]
    pub fn without_echo(mut self) -> Self {
        self.echo = None;
        self
    }

    #[must_use]
    pub fn with_echo_colors(mut self, use_colors: bool) -> Self {
        self.echo_formatter = self.echo_formatter.with_colors(use_colors);
        self
    }

    #[must_use]
    pub fn with_error_policy(mut self, policy: FileErrorPolicy) -> Self {
        self.on_error = policy;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> io::Result<File> {
        let mut options = OpenOptions::new();
        options.create(true).append(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        options.open(&self.path)
    }

    fn append(&self, line: &str) -> Result<()> {
        let display = self.path.display().to_string();

        let file = self
            .open()
            .map_err(|e| LoggerError::file_sink(&display, format!("cannot open: {}", e)))?;
        FileExt::lock_exclusive(&file)
            .map_err(|e| LoggerError::file_sink(&display, format!("cannot lock: {}", e)))?;

        let written = (&file)
            .write_all(line.as_bytes())
            .map_err(|e| LoggerError::file_sink(&display, format!("cannot write: {}", e)));

        // Closing the handle would release the lock too
        let _ = FileExt::unlock(&file);
        written
    }
}

impl Default for FileSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for FileSink {
    fn handle(&mut self, event: &LogEvent) -> Result<()> {
        if let Some(ref mut echo) = self.echo {
            let line = self.echo_formatter.render(event);
            echo.write_all(line.as_bytes())?;
            echo.flush()?;
        }

        let line = self.file_formatter.render(event);
        match self.append(&line) {
            Ok(()) => Ok(()),
            Err(e) => match self.on_error {
                FileErrorPolicy::Propagate => Err(e),
                FileErrorPolicy::Abort => {
                    eprintln!("[LOGGER CRITICAL] {}. Aborting.", e);
                    std::process::abort();
                }
            },
        }
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut echo) = self.echo {
            echo.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogLevel, OutputMode};
    use chrono::DateTime;
    use std::fs;
    use tempfile::TempDir;

    fn event(level: LogLevel, message: &str) -> LogEvent {
        let fixed = DateTime::from_timestamp(1_498_405_744, 0).unwrap();
        LogEvent::new(level, OutputMode::Line, message).with_timestamp(fixed)
    }

    #[test]
    fn test_file_write() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("logfile.txt");
        let mut sink = FileSink::with_path(&path).without_echo();

        for level in [LogLevel::Error, LogLevel::Debug, LogLevel::Warning] {
            let ev = event(level, "test log");
            if sink.accepts(&ev) {
                sink.handle(&ev).unwrap();
            }
        }

        let content = fs::read_to_string(&path).expect("Failed to read log file");
        assert_eq!(
            content,
            "2017/06/25 15:49:04 [error] test log\n2017/06/25 15:49:04 [warning] test log\n"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_owner_only_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("private.log");
        let mut sink = FileSink::with_path(&path).without_echo();
        sink.handle(&event(LogLevel::Message, "secret")).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_propagates_open_failure() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("missing").join("dir").join("out.log");
        let mut sink = FileSink::with_path(&path)
            .without_echo()
            .with_error_policy(FileErrorPolicy::Propagate);

        let result = sink.handle(&event(LogLevel::Error, "lost"));
        assert!(matches!(result, Err(LoggerError::FileSinkError { .. })));
    }

    #[test]
    fn test_defaults() {
        let sink = FileSink::new();
        assert_eq!(sink.path(), Path::new("file.log"));
        assert_eq!(sink.name(), "file");
    }
}
