//! File logging example
//!
//! Demonstrates the file sink: every line is appended to a log file without
//! colors and echoed to the terminal with colors.
//!
//! Run with: cargo run --example file_logging

use rust_adapter_logger::prelude::*;
use rust_adapter_logger::sinks::FileErrorPolicy;

fn main() -> Result<()> {
    println!("=== Rust Adapter Logger - File Logging Example ===\n");

    let logger = Logger::builder()
        .sink(FileSink::with_path("application.log").with_error_policy(FileErrorPolicy::Propagate))
        .build()?;

    println!("1. Logging to both terminal and file:");

    logger.println(&[&"Application started"]);
    logger.debugln(&[&"Loading configuration..."]);
    logger.println(&[&"Configuration loaded successfully"]);
    logger.warningln(&[&"Using default settings for some options"]);
    logger.errorln(&[&"Failed to load optional plugin"]);

    println!("\n2. Performing some operations:");

    for i in 1..=5 {
        logger.printf(format_args!("Processing item {}/5\n", i));
        if i == 3 {
            logger.warningln(&[&"Item 3 took longer than expected"]);
        }
    }

    logger.println(&[&"All operations completed"]);
    logger.flush()?;

    if logger.failed_count() > 0 {
        eprintln!("{} events could not be written", logger.failed_count());
    }

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' for the full log output");

    Ok(())
}
