//! Routes `tracing` instrumentation through the kvlog line format.

fn main() {
    kvlog_tracing::init();

    let span = tracing::info_span!("request", reqid = "req-1001");
    let _guard = span.enter();

    tracing::info!(user = "alice", "login ok");
    println!();

    tracing::warn!(attempts = 3u64, "rate limited");
    println!();
}
