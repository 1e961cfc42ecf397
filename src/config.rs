//! Environment-driven configuration of the default sink.

use std::fs::OpenOptions;
use std::io;

use envconfig::Envconfig;

use crate::logger::default_logger;

/// Where the default logger writes.
#[derive(Envconfig, Debug)]
pub struct LogConfig {
    /// `stdout`, `stderr`, or a file path (opened append, created if
    /// absent).
    #[envconfig(from = "KVLOG_OUTPUT", default = "stdout")]
    pub output: String,
}

/// Point the default logger at the sink named by `KVLOG_OUTPUT`.
///
/// Call once at application startup. Only setup can fail here; the logging
/// path itself never does.
pub fn init_from_env() -> Result<(), String> {
    let config = LogConfig::init_from_env().map_err(|e| e.to_string())?;
    apply(&config)
}

/// Apply a configuration to the default logger.
pub fn apply(config: &LogConfig) -> Result<(), String> {
    match config.output.as_str() {
        "stdout" => default_logger().set_sink(Box::new(io::stdout())),
        "stderr" => default_logger().set_sink(Box::new(io::stderr())),
        path => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| format!("failed to open log file {}: {}", path, e))?;
            default_logger().set_sink(Box::new(file));
        }
    }
    Ok(())
}
