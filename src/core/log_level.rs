//! Log level definitions

use super::error::LoggerError;
use colored::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Escape sequence that returns the terminal to its default color.
pub const COLOR_RESET: &str = "\x1b[0;00m";

/// Severity of a log event.
///
/// Every level has exactly one display color and one text prefix. `Debug`
/// is additionally gated by the logger's debug mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogLevel {
    #[default]
    Message = 0,
    Message2 = 1,
    Warning = 2,
    Debug = 3,
    Error = 4,
}

impl LogLevel {
    /// Text shown between brackets in a rendered line
    pub fn prefix(&self) -> &'static str {
        match self {
            LogLevel::Message | LogLevel::Message2 => "msg",
            LogLevel::Warning => "warning",
            LogLevel::Debug => "debug",
            LogLevel::Error => "error",
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Message => "message",
            LogLevel::Message2 => "message2",
            LogLevel::Warning => "warning",
            LogLevel::Debug => "debug",
            LogLevel::Error => "error",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            LogLevel::Message => Color::White,
            LogLevel::Message2 => Color::BrightGreen,
            LogLevel::Warning => Color::BrightYellow,
            LogLevel::Debug => Color::BrightCyan,
            LogLevel::Error => Color::BrightRed,
        }
    }

    /// ANSI escape sequence selecting this level's foreground color,
    /// e.g. `"\x1b[91m"` for `Error`.
    pub fn color_code(&self) -> String {
        format!("\x1b[{}m", self.color().to_fg_str())
    }

    /// Whether a sink following the default policy lets this level through.
    #[inline]
    pub fn is_enabled(&self, debug_mode: bool) -> bool {
        *self != LogLevel::Debug || debug_mode
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "message" | "msg" => Ok(LogLevel::Message),
            "message2" | "msg2" => Ok(LogLevel::Message2),
            "warning" | "warn" => Ok(LogLevel::Warning),
            "debug" => Ok(LogLevel::Debug),
            "error" => Ok(LogLevel::Error),
            _ => Err(LoggerError::parse("log level", s)),
        }
    }
}
