//! Process-wide default logger
//!
//! Kept in a single test because the default logger is shared by every
//! test in this binary.

mod common;

use common::Recorder;
use rust_adapter_logger::global;
use rust_adapter_logger::LogLevel;

#[test]
fn test_global_entry_points() {
    let recorder = Recorder::named("memory");
    assert!(!global::register_sink("memory", recorder.clone()));
    assert!(global::logger().registry().contains("stdout"));

    global::println(&[&"hello ", &"world"]);
    global::errorf(format_args!("code {}", 500));
    global::warningln(&[&"careful"]);
    global::debugln(&[&"hidden"]);

    global::set_debug_mode(true);
    assert!(global::debug_mode());
    global::debugf(format_args!("{}", "visible"));
    let expected_line = line!() - 1;
    global::set_debug_mode(false);
    global::wait();

    assert_eq!(
        recorder.messages(),
        vec!["hello world", "code 500", "careful", "visible"]
    );

    let events = recorder.events.lock();
    assert_eq!(events[3].level, LogLevel::Debug);
    let caller = events[3].caller.expect("caller in debug mode");
    assert_eq!(caller.file, "global_tests.rs");
    assert_eq!(caller.line, expected_line);
}
