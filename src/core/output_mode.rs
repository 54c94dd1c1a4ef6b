//! Write semantics of a log call

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Write};
use std::str::FromStr;

/// How the message body of a call is built and terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum OutputMode {
    /// Values are concatenated and the rendered line ends with `'\n'`.
    #[default]
    Line,
    /// A format template with substitution values; no trailing newline.
    Formatted,
}

impl OutputMode {
    pub fn to_str(&self) -> &'static str {
        match self {
            OutputMode::Line => "line",
            OutputMode::Formatted => "formatted",
        }
    }

    #[inline]
    pub fn line_break(&self) -> &'static str {
        match self {
            OutputMode::Line => "\n",
            OutputMode::Formatted => "",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for OutputMode {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "line" | "ln" => Ok(OutputMode::Line),
            "formatted" | "f" => Ok(OutputMode::Formatted),
            _ => Err(LoggerError::parse("output mode", s)),
        }
    }
}

/// Line-mode body: every value's `Display` output, back to back.
///
/// No separator is inserted between any two values, numbers included.
pub fn concat_values(values: &[&dyn Display]) -> String {
    let mut body = String::new();
    for value in values {
        // Writing into a String cannot fail.
        let _ = write!(body, "{}", value);
    }
    body
}

/// Formatted-mode body.
pub fn render_template(args: fmt::Arguments<'_>) -> String {
    match args.as_str() {
        Some(literal) => literal.to_string(),
        None => fmt::format(args),
    }
}
