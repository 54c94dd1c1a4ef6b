//! Call-site resolution for debug annotations
//!
//! Every public logging entry point is `#[track_caller]`, so the location
//! handed down here is always the user's call site no matter how many
//! internal frames sit between the entry point and the dispatcher.

use std::fmt;
use std::panic::Location;
use std::path::Path;

/// Source location of a log call: file basename and line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerInfo {
    pub file: &'static str,
    pub line: u32,
}

impl CallerInfo {
    pub fn from_location(location: &'static Location<'static>) -> Self {
        let path: &'static str = location.file();
        let file = Path::new(path)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(path);

        Self {
            file,
            line: location.line(),
        }
    }

    /// Resolve the caller of the function this is invoked from.
    #[track_caller]
    #[inline]
    pub fn resolve() -> Self {
        Self::from_location(Location::caller())
    }
}

impl fmt::Display for CallerInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}
