//! Ordered asynchronous delivery
//!
//! Producers enqueue events on a single channel; one worker thread drains it
//! in FIFO order and runs the synchronous dispatcher for each event. A
//! pending counter tracks events that were enqueued but not yet delivered,
//! which is what [`AsyncChannel::wait`] blocks on.

use super::{
    dispatcher::Dispatcher,
    error::{LoggerError, Result},
    log_event::LogEvent,
    metrics::LoggerMetrics,
};
use crossbeam_channel::{bounded, unbounded, Sender, TrySendError};
use parking_lot::{Condvar, Mutex};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Count of enqueued-but-undelivered events with a drain barrier.
#[derive(Debug, Default)]
pub struct PendingCounter {
    count: Mutex<usize>,
    drained: Condvar,
}

impl PendingCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&self) {
        *self.count.lock() += 1;
    }

    pub fn decrement(&self) {
        let mut count = self.count.lock();
        *count = count.saturating_sub(1);
        if *count == 0 {
            self.drained.notify_all();
        }
    }

    pub fn get(&self) -> usize {
        *self.count.lock()
    }

    /// Block until the count reaches zero.
    pub fn wait(&self) {
        let mut count = self.count.lock();
        while *count > 0 {
            self.drained.wait(&mut count);
        }
    }

    /// Block until the count reaches zero or `timeout` elapses.
    ///
    /// Returns `true` if the count reached zero.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut count = self.count.lock();
        while *count > 0 {
            if self.drained.wait_until(&mut count, deadline).timed_out() {
                return *count == 0;
            }
        }
        true
    }
}

/// Bounded or unbounded queue with a single consumer thread.
pub struct AsyncChannel {
    sender: Option<Sender<LogEvent>>,
    handle: Option<thread::JoinHandle<()>>,
    pending: Arc<PendingCounter>,
    metrics: Arc<LoggerMetrics>,
}

impl AsyncChannel {
    /// Start the consumer thread. `capacity` of `None` means unbounded.
    pub fn start(
        dispatcher: Arc<Dispatcher>,
        metrics: Arc<LoggerMetrics>,
        capacity: Option<usize>,
    ) -> Result<Self> {
        let (sender, receiver) = match capacity {
            Some(size) => bounded(size),
            None => unbounded(),
        };
        let pending = Arc::new(PendingCounter::new());
        let pending_clone = Arc::clone(&pending);

        let handle = thread::Builder::new()
            .name("log-dispatch".to_string())
            .spawn(move || {
                // recv() fails once every sender is gone and the queue is empty
                for event in receiver.iter() {
                    dispatcher.dispatch(&event);
                    pending_clone.decrement();
                }

                if let Err(e) = dispatcher.flush() {
                    eprintln!("[LOGGER ERROR] Failed to flush after draining queue: {}", e);
                }
            })
            .map_err(|e| {
                LoggerError::io_operation("spawning log worker", "cannot start thread", e)
            })?;

        Ok(Self {
            sender: Some(sender),
            handle: Some(handle),
            pending,
            metrics,
        })
    }

    /// Events enqueued but not yet delivered
    pub fn pending(&self) -> usize {
        self.pending.get()
    }

    /// Queue `event`, blocking only while a bounded queue is full.
    pub fn enqueue(&self, event: LogEvent) -> Result<()> {
        let sender = self.sender.as_ref().ok_or(LoggerError::LoggerStopped)?;

        self.pending.increment();
        let sent = match sender.try_send(event) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(event)) => {
                self.metrics.record_queue_full();
                self.metrics.record_block();
                sender.send(event).map_err(|_| LoggerError::LoggerStopped)
            }
            Err(TrySendError::Disconnected(_)) => Err(LoggerError::LoggerStopped),
        };

        if sent.is_err() {
            self.pending.decrement();
        }
        sent
    }

    /// Block until every event enqueued so far has been delivered.
    pub fn wait(&self) {
        self.pending.wait();
    }

    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        self.pending.wait_timeout(timeout)
    }

    pub fn is_running(&self) -> bool {
        self.sender.is_some()
    }

    /// Close the queue, let the worker drain it and join the worker.
    ///
    /// Returns `true` if the worker finished within `timeout`.
    pub fn shutdown(&mut self, timeout: Duration) -> bool {
        // Closing the channel signals the worker to exit once drained
        drop(self.sender.take());

        let Some(handle) = self.handle.take() else {
            return true;
        };

        let start = Instant::now();
        loop {
            if handle.is_finished() {
                if let Err(e) = handle.join() {
                    eprintln!(
                        "[LOGGER ERROR] Async worker thread panicked during shutdown: {:?}",
                        e
                    );
                    return false;
                }
                return true;
            }

            if start.elapsed() >= timeout {
                eprintln!(
                    "[LOGGER WARNING] Async worker thread did not finish within {:?} timeout. \
                     {} logs may be lost.",
                    timeout,
                    self.pending.get()
                );
                return false;
            }

            // Small sleep to avoid busy-waiting
            thread::sleep(Duration::from_millis(10));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_counter_wait() {
        let pending = Arc::new(PendingCounter::new());
        pending.increment();
        pending.increment();
        assert_eq!(pending.get(), 2);

        let worker = {
            let pending = Arc::clone(&pending);
            thread::spawn(move || {
                thread::sleep(Duration::from_millis(20));
                pending.decrement();
                pending.decrement();
            })
        };

        pending.wait();
        assert_eq!(pending.get(), 0);
        worker.join().unwrap();
    }

    #[test]
    fn test_pending_counter_timeout() {
        let pending = PendingCounter::new();
        assert!(pending.wait_timeout(Duration::from_millis(1)));

        pending.increment();
        assert!(!pending.wait_timeout(Duration::from_millis(20)));
    }

    #[test]
    fn test_decrement_saturates() {
        let pending = PendingCounter::new();
        pending.decrement();
        assert_eq!(pending.get(), 0);
    }
}
