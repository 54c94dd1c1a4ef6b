//! Basic logger usage example
//!
//! Demonstrates synchronous logging to the terminal at every level, in both
//! call modes, with and without debug mode.
//!
//! Run with: cargo run --example basic_usage

use rust_adapter_logger::prelude::*;
use rust_adapter_logger::{errorf, msgln, warningln};

fn main() -> Result<()> {
    println!("=== Rust Adapter Logger - Basic Usage Example ===\n");

    let logger = Logger::builder().sink(TerminalSink::new()).build()?;

    println!("1. Logging at different levels:");
    logger.println(&[&"This is a message"]);
    logger.log_line(LogLevel::Message2, &[&"This is a secondary message"]);
    logger.warningln(&[&"This is a warning"]);
    logger.errorln(&[&"This is an error"]);
    logger.debugln(&[&"This debug line is hidden"]);

    println!("\n2. Line and formatted modes:");
    let port = 8080;
    msgln!(logger, "listening on port ", port);
    errorf!(logger, "request {} failed: {}\n", 42, "timeout");

    println!("\n3. Debug mode shows the caller:");
    logger.set_debug_mode(true);
    logger.debugln(&[&"This debug line is visible"]);
    warningln!(logger, "Warnings carry the caller too");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
