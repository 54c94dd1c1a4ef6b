//! Named, ordered collection of sinks

use super::sink::LogSink;
use parking_lot::{ReentrantMutex, RwLock};
use std::cell::RefCell;
use std::sync::Arc;

pub struct SinkEntry {
    name: String,
    sink: ReentrantMutex<RefCell<Box<dyn LogSink>>>,
}

impl SinkEntry {
    fn new(name: String, sink: Box<dyn LogSink>) -> Self {
        Self {
            name,
            sink: ReentrantMutex::new(RefCell::new(sink)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run `f` with exclusive access to the sink.
    ///
    /// Returns `None` without running `f` when the calling thread is already
    /// inside this sink, e.g. a sink that logs through its own logger.
    pub fn with_sink<R>(&self, f: impl FnOnce(&mut dyn LogSink) -> R) -> Option<R> {
        let guard = self.sink.lock();
        let mut sink = guard.try_borrow_mut().ok()?;
        Some(f(&mut **sink))
    }
}

/// Registry of sinks keyed by name.
///
/// Registration order is dispatch order. Registering an existing name
/// replaces that entry in place, so its position in the fan-out is kept.
/// Entries are never removed.
///
/// Iteration works on a snapshot of the entries, so sinks may register
/// other sinks while handling an event; the new entry takes part from the
/// next event on.
#[derive(Default)]
pub struct SinkRegistry {
    entries: RwLock<Vec<Arc<SinkEntry>>>,
}

impl SinkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the sink registered under `name`.
    ///
    /// Returns `true` if an existing entry was replaced.
    pub fn register(&self, name: impl Into<String>, sink: Box<dyn LogSink>) -> bool {
        let name = name.into();
        let mut entries = self.entries.write();

        if let Some(entry) = entries.iter_mut().find(|entry| entry.name == name) {
            *entry = Arc::new(SinkEntry::new(name, sink));
            return true;
        }

        entries.push(Arc::new(SinkEntry::new(name, sink)));
        false
    }

    /// Visit every entry in registration order.
    pub fn for_each(&self, mut f: impl FnMut(&SinkEntry)) {
        let snapshot: Vec<Arc<SinkEntry>> = self.entries.read().clone();
        for entry in &snapshot {
            f(entry);
        }
    }

    pub fn names(&self) -> Vec<String> {
        self.entries
            .read()
            .iter()
            .map(|entry| entry.name.clone())
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.read().iter().any(|entry| entry.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogEvent, LogLevel, OutputMode, Result};

    struct Named(&'static str);

    impl LogSink for Named {
        fn handle(&mut self, _event: &LogEvent) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn test_register_preserves_order() {
        let registry = SinkRegistry::new();
        assert!(registry.is_empty());

        assert!(!registry.register("a", Box::new(Named("first"))));
        assert!(!registry.register("b", Box::new(Named("second"))));
        assert!(!registry.register("c", Box::new(Named("third"))));

        assert_eq!(registry.names(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_register_replaces_in_place() {
        let registry = SinkRegistry::new();
        registry.register("a", Box::new(Named("first")));
        registry.register("b", Box::new(Named("second")));

        assert!(registry.register("a", Box::new(Named("replacement"))));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names(), vec!["a", "b"]);

        let mut seen = Vec::new();
        registry.for_each(|entry| {
            seen.push(entry.with_sink(|sink| sink.name().to_string()).unwrap());
        });
        assert_eq!(seen, vec!["replacement", "second"]);
    }

    #[test]
    fn test_contains() {
        let registry = SinkRegistry::new();
        registry.register("file", Box::new(Named("file")));
        assert!(registry.contains("file"));
        assert!(!registry.contains("stdout"));
    }

    struct Registering {
        registry: Arc<SinkRegistry>,
    }

    impl LogSink for Registering {
        fn handle(&mut self, _event: &LogEvent) -> Result<()> {
            self.registry.register("late", Box::new(Named("late")));
            Ok(())
        }

        fn name(&self) -> &str {
            "registering"
        }
    }

    #[test]
    fn test_register_during_iteration() {
        let registry = Arc::new(SinkRegistry::new());
        registry.register(
            "registering",
            Box::new(Registering {
                registry: Arc::clone(&registry),
            }),
        );

        let event = LogEvent::new(LogLevel::Message, OutputMode::Line, "x");
        let mut visited = 0;
        registry.for_each(|entry| {
            entry.with_sink(|sink| sink.handle(&event)).unwrap().unwrap();
            visited += 1;
        });

        assert_eq!(visited, 1);
        assert_eq!(registry.names(), vec!["registering", "late"]);
    }

    #[test]
    fn test_nested_access_is_refused() {
        let registry = SinkRegistry::new();
        registry.register("a", Box::new(Named("a")));

        registry.for_each(|entry| {
            let nested = entry.with_sink(|_| entry.with_sink(|sink| sink.name().to_string()));
            assert_eq!(nested, Some(None));
        });
    }
}
