//! Serializable logger configuration

use super::error::{LoggerError, Result};
use super::log_event::DEFAULT_MAX_LINE_SIZE;
use serde::{Deserialize, Serialize};

/// Global knobs of a [`Logger`](super::Logger).
///
/// Deserializable with any serde format; missing fields take their defaults.
///
/// # Example
///
/// ```
/// use rust_adapter_logger::LoggerConfig;
///
/// let config: LoggerConfig =
///     serde_json::from_str(r#"{ "debug_mode": true, "async_capacity": 256 }"#).unwrap();
/// assert!(config.debug_mode);
/// assert_eq!(config.max_line_size, 2000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Emit Debug level and annotate lines with `file:line`
    pub debug_mode: bool,

    /// Maximum rendered line length in characters
    pub max_line_size: usize,

    /// Bounded async queue capacity; takes precedence over `async_unbounded`
    pub async_capacity: Option<usize>,

    /// Use an unbounded async queue
    pub async_unbounded: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            debug_mode: false,
            max_line_size: DEFAULT_MAX_LINE_SIZE,
            async_capacity: None,
            async_unbounded: false,
        }
    }
}

impl LoggerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_line_size == 0 {
            return Err(LoggerError::config("max_line_size", "must be greater than zero"));
        }
        if self.async_capacity == Some(0) {
            return Err(LoggerError::config(
                "async_capacity",
                "a zero-capacity queue cannot buffer events",
            ));
        }
        Ok(())
    }

    pub fn is_async(&self) -> bool {
        self.async_capacity.is_some() || self.async_unbounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert!(!config.debug_mode);
        assert_eq!(config.max_line_size, 2000);
        assert!(!config.is_async());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: LoggerConfig = serde_json::from_str(r#"{"async_unbounded": true}"#).unwrap();
        assert!(config.is_async());
        assert_eq!(config.max_line_size, 2000);
    }

    #[test]
    fn test_validate_rejects_zero() {
        let config = LoggerConfig {
            max_line_size: 0,
            ..LoggerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LoggerError::InvalidConfiguration { .. })
        ));

        let config = LoggerConfig {
            async_capacity: Some(0),
            ..LoggerConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
