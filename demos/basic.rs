//! Minimal tour of the kvlog surface.
//!
//! Set `KVLOG_OUTPUT=stderr` or `KVLOG_OUTPUT=/tmp/demo.log` to redirect.

use kvlog::prelude::*;

fn main() {
    if let Err(e) = kvlog::config::init_from_env() {
        eprintln!("log setup failed: {}", e);
        std::process::exit(1);
    }

    let ctx = LogContext::fresh();

    // The sink receives exactly the line text, so separators are ours.
    kvlog::log_write!(&ctx, "service", "demo", "port", 8080);
    println!();

    kvlog::log_message!(&ctx, "started in {}ms", 12);
    println!();

    let result: Result<(), String> = Err("connection refused".to_string());
    if let Err(e) = result {
        kvlog::log_error!(&ctx, e, "dialing {}", "db:5432");
        println!();
    }

    kvlog::log_write!(&ctx, "payload", Value::json(&serde_json::json!({"rows": 3})));
    println!();
}
