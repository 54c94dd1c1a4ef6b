//! Async logging example
//!
//! Demonstrates async delivery with multiple producer threads and `wait`
//! as a barrier before the program inspects the output.
//!
//! Run with: cargo run --example async_logging

use rust_adapter_logger::prelude::*;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() -> Result<()> {
    println!("=== Rust Adapter Logger - Async Logging Example ===\n");

    let logger = Arc::new(
        Logger::builder()
            .async_mode(1000)
            .sink(TerminalSink::new())
            .build()?,
    );

    println!("1. High-throughput async logging:");

    for i in 0..100 {
        logger.println(&[&"Message #", &i]);
    }
    logger.wait();

    println!("   Logged 100 messages asynchronously");

    println!("\n2. Multi-threaded logging:");

    let mut handles = vec![];
    for thread_id in 0..5 {
        let logger = Arc::clone(&logger);
        let handle = thread::spawn(move || {
            for i in 0..20 {
                logger.printf(format_args!("Thread {} - Message {}\n", thread_id, i));
                thread::sleep(Duration::from_millis(10));
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        let _ = handle.join();
    }
    logger.wait();

    println!("   5 threads logged 20 messages each");

    let metrics = logger.metrics();
    println!(
        "\n3. Metrics: {} delivered, {} failed, {} times the queue was full",
        metrics.total_logged(),
        metrics.failed_count(),
        metrics.queue_full_events()
    );

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
