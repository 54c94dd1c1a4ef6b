//! Line rendering
//!
//! Layout of a rendered line:
//!
//! ```text
//! <color><YYYY/MM/DD HH:MM:SS> [<prefix>] <file:line ><message><reset><newline>
//! ```
//!
//! Color and reset are only present for colored output; the newline only in
//! line mode. Overlong lines are cut on the uncolored text; color and reset
//! wrap the result, so the terminal color is always restored.

use super::log_event::LogEvent;
use super::log_level::COLOR_RESET;
use chrono::{DateTime, Utc};

/// Timestamp layout used in every rendered line (always UTC).
pub const TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Marker appended to truncated lines.
pub const ELLIPSIS: &str = "...";

pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format(TIME_FORMAT).to_string()
}

/// Renders events into text lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineFormatter {
    use_colors: bool,
    always_show_caller: bool,
}

impl LineFormatter {
    pub const fn new() -> Self {
        Self {
            use_colors: true,
            always_show_caller: false,
        }
    }

    pub const fn plain() -> Self {
        Self {
            use_colors: false,
            always_show_caller: false,
        }
    }

    #[must_use]
    pub const fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Show `file:line` even when the event was produced with debug mode off.
    #[must_use]
    pub const fn with_caller_always(mut self, always: bool) -> Self {
        self.always_show_caller = always;
        self
    }

    /// Render the full line, including reset and line break.
    ///
    /// The line size limit applies to the text without color codes, so a
    /// cut never lands inside an escape sequence.
    pub fn render(&self, event: &LogEvent) -> String {
        let mut body = self.render_body(event);
        truncate_line(&mut body, event.max_line_size);

        let mut line = String::with_capacity(body.len() + 16);
        if self.use_colors {
            line.push_str(&event.level.color_code());
            line.push_str(&body);
            line.push_str(COLOR_RESET);
        } else {
            line.push_str(&body);
        }
        line.push_str(event.mode.line_break());
        line
    }

    fn render_body(&self, event: &LogEvent) -> String {
        let mut line = String::with_capacity(event.message.len() + 48);
        line.push_str(&format_timestamp(&event.timestamp));
        line.push_str(" [");
        line.push_str(event.level.prefix());
        line.push_str("] ");

        let caller = if self.always_show_caller {
            Some(event.call_site())
        } else {
            event.caller
        };
        if let Some(caller) = caller {
            line.push_str(&caller.to_string());
            line.push(' ');
        }

        line.push_str(&event.message);
        line
    }
}

impl Default for LineFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Cut `line` so that, with the ellipsis appended, it is at most
/// `max_chars` characters long. Lines already within the limit are untouched.
pub fn truncate_line(line: &mut String, max_chars: usize) {
    if line.chars().count() <= max_chars {
        return;
    }

    // Limits shorter than the ellipsis get a bare cut
    let with_ellipsis = max_chars >= ELLIPSIS.len();
    let keep = if with_ellipsis {
        max_chars - ELLIPSIS.len()
    } else {
        max_chars
    };
    let cut = line
        .char_indices()
        .nth(keep)
        .map(|(idx, _)| idx)
        .unwrap_or(line.len());
    line.truncate(cut);
    if with_ellipsis {
        line.push_str(ELLIPSIS);
    }
}

/// Convenience used by sinks that only need the default layout.
pub fn render_line(event: &LogEvent, use_colors: bool) -> String {
    LineFormatter::new().with_colors(use_colors).render(event)
}
