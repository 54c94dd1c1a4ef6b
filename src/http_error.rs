//! HTTP error responses
//!
//! [`Logger::http_error`] logs the reason phrase of a status code at Error
//! level and returns a JSON error response carrying the same status.

use crate::core::{LogLevel, Logger};
use http::header::{HeaderValue, CONTENT_TYPE, X_CONTENT_TYPE_OPTIONS};
use http::{Response, StatusCode};
use serde::{Deserialize, Serialize};

/// Body of an error response: `{"status": "error", "error": "<reason>"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub status: String,
    pub error: String,
}

impl ErrorBody {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status: "error".to_string(),
            error: status_text(status).to_string(),
        }
    }
}

/// Reason phrase of `status`, empty for codes without one
pub fn status_text(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("")
}

impl Logger {
    /// Log the status text at Error level and build the matching response.
    ///
    /// # Example
    ///
    /// ```
    /// use http::StatusCode;
    /// use rust_adapter_logger::Logger;
    ///
    /// let logger = Logger::new();
    /// let response = logger.http_error(StatusCode::BAD_REQUEST);
    /// assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    /// assert!(response.body().contains("\"Bad Request\""));
    /// ```
    #[track_caller]
    pub fn http_error(&self, status: StatusCode) -> Response<String> {
        let body = ErrorBody::new(status);
        self.log_line(LogLevel::Error, &[&body.error]);

        let json = match serde_json::to_string_pretty(&body) {
            Ok(mut json) => {
                json.push('\n');
                json
            }
            Err(e) => {
                self.log_line(LogLevel::Error, &[&e]);
                String::new()
            }
        };

        let mut response = Response::new(json);
        *response.status_mut() = status;
        response
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        response
            .headers_mut()
            .insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
        response
    }
}
