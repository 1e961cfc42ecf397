//! Tests for the default-logger surface: free functions and macros.
//!
//! These share the process-wide default sink, so they run as one sequential
//! test.

mod common;

use common::{tokenize, CaptureSink};
use kvlog::{default_logger, LogContext};

#[test]
fn macros_route_through_the_default_logger() {
    let sink = CaptureSink::new();
    default_logger().set_sink(Box::new(sink.clone()));

    let ctx = LogContext::with_request_id("req-9");

    kvlog::log_write!(&ctx, "user", "alice", "count", 3);
    kvlog::log_message!(&ctx, "loaded {} rows", 42);
    kvlog::log_error!(&ctx, "boom");
    kvlog::log_error!(&ctx, "boom", "loading {}", "cfg");
    kvlog::log_write!(&ctx, "dangling");

    let lines = sink.lines();
    assert_eq!(lines.len(), 5);

    let write = tokenize(&lines[0]);
    assert_eq!(write[0], ("reqid".to_string(), "req-9".to_string()));
    assert!(
        write[1].1.starts_with("default_logger.rs:"),
        "got {}",
        write[1].1
    );
    assert_eq!(write[3], ("user".to_string(), "alice".to_string()));
    assert_eq!(write[4], ("count".to_string(), "3".to_string()));

    let message = tokenize(&lines[1]);
    assert!(
        message[1].1.starts_with("default_logger.rs:"),
        "got {}",
        message[1].1
    );
    assert_eq!(
        message[3],
        ("message".to_string(), "loaded 42 rows".to_string())
    );

    let error = tokenize(&lines[2]);
    assert_eq!(error[3], ("error".to_string(), "boom".to_string()));

    let prefixed = tokenize(&lines[3]);
    assert_eq!(
        prefixed[3],
        ("error".to_string(), "loading cfg: boom".to_string())
    );

    let odd = tokenize(&lines[4]);
    assert_eq!(odd[3], ("dangling".to_string(), String::new()));
    assert_eq!(
        odd[4],
        (
            "log-error".to_string(),
            "odd number of log params".to_string()
        )
    );
}
