//! Async delivery integration tests
//!
//! These tests verify:
//! - `wait` returns only after every queued event reached every sink
//! - FIFO order is kept from a single producer
//! - Bounded queues block instead of dropping
//! - Shutdown drains the queue and later events are reported as dropped

mod common;

use common::{fixed_clock, plain_terminal, Recorder, FIXED_PREFIX};
use rust_adapter_logger::prelude::*;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[test]
fn test_wait_loses_nothing() {
    let (sink, buffer) = plain_terminal();
    let logger = Logger::builder()
        .clock(fixed_clock())
        .async_mode(64)
        .sink(sink)
        .build()
        .unwrap();

    for i in 0..500 {
        logger.println(&[&"event ", &i]);
    }
    logger.wait();

    let lines = buffer.lines();
    assert_eq!(lines.len(), 500);
    assert_eq!(lines[0], format!("{} [msg] event 0", FIXED_PREFIX));
    assert_eq!(lines[499], format!("{} [msg] event 499", FIXED_PREFIX));
    assert_eq!(logger.pending(), 0);
}

#[test]
fn test_fifo_order_single_producer() {
    let recorder = Recorder::default();
    let logger = Logger::builder()
        .async_unbounded()
        .sink(recorder.clone())
        .build()
        .unwrap();

    for i in 0..1000 {
        logger.println(&[&i]);
    }
    logger.wait();

    let expected: Vec<String> = (0..1000).map(|i| i.to_string()).collect();
    assert_eq!(recorder.messages(), expected);
}

#[test]
fn test_concurrent_producers() {
    let recorder = Recorder::default();
    let logger = Arc::new(
        Logger::builder()
            .async_mode(16)
            .sink(recorder.clone())
            .build()
            .unwrap(),
    );

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..250 {
                    logger.println(&[&t, &":", &i]);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    logger.wait();

    let messages = recorder.messages();
    assert_eq!(messages.len(), 2000);

    // Per-producer order survives the shared queue
    for t in 0..8 {
        let own: Vec<&String> = messages
            .iter()
            .filter(|m| m.starts_with(&format!("{}:", t)))
            .collect();
        let expected: Vec<String> = (0..250).map(|i| format!("{}:{}", t, i)).collect();
        assert_eq!(own.len(), 250);
        assert!(own.iter().zip(expected.iter()).all(|(a, b)| *a == b));
    }
}

struct Slow(Recorder);

impl LogSink for Slow {
    fn handle(&mut self, event: &LogEvent) -> Result<()> {
        thread::sleep(Duration::from_millis(2));
        self.0.handle(event)
    }

    fn name(&self) -> &str {
        "slow"
    }
}

#[test]
fn test_bounded_queue_applies_backpressure() {
    let recorder = Recorder::default();
    let logger = Logger::builder()
        .async_mode(2)
        .sink(Slow(recorder.clone()))
        .build()
        .unwrap();

    for i in 0..50 {
        logger.println(&[&i]);
    }
    logger.wait();

    assert_eq!(recorder.len(), 50);
    assert!(logger.metrics().queue_full_events() > 0);
    assert_eq!(
        logger.metrics().queue_full_events(),
        logger.metrics().block_events()
    );
    assert_eq!(logger.failed_count(), 0);
}

#[test]
fn test_wait_timeout_on_slow_sink() {
    let recorder = Recorder::default();
    let logger = Logger::builder()
        .async_unbounded()
        .sink(Slow(recorder.clone()))
        .build()
        .unwrap();

    for i in 0..200 {
        logger.println(&[&i]);
    }

    assert!(!logger.wait_timeout(Duration::from_millis(1)));
    assert!(logger.wait_timeout(Duration::from_secs(30)));
    assert_eq!(recorder.len(), 200);
}

#[test]
fn test_wait_is_noop_in_sync_mode() {
    let recorder = Recorder::default();
    let logger = Logger::builder().sink(recorder.clone()).build().unwrap();

    logger.println(&[&"direct"]);
    logger.wait();
    assert!(logger.wait_timeout(Duration::ZERO));
    assert_eq!(recorder.len(), 1);
}

#[test]
fn test_enqueue_after_shutdown_is_reported() {
    let recorder = Recorder::default();
    let mut logger = Logger::builder()
        .async_mode(8)
        .sink(recorder.clone())
        .build()
        .unwrap();

    logger.println(&[&"before"]);
    assert!(logger.shutdown(Duration::from_secs(5)));

    logger.println(&[&"after"]);
    logger.wait();

    assert_eq!(recorder.messages(), vec!["before"]);
    assert_eq!(logger.failed_count(), 1);
}

#[test]
fn test_drop_drains_queue() {
    let recorder = Recorder::default();
    {
        let logger = Logger::builder()
            .async_mode(4)
            .sink(recorder.clone())
            .build()
            .unwrap();
        for i in 0..100 {
            logger.println(&[&i]);
        }
    }
    assert_eq!(recorder.len(), 100);
}
