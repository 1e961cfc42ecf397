//! Structured logging as Splunk-style K=V lines.
//!
//! A log entry is an ordered list of key/value pairs rendered as a single
//! machine-parseable line:
//!
//! ```text
//! reqid=<id> at=<file:line> t=<timestamp> k1=v1 k2=v2 ...
//! ```
//!
//! Keys are rewritten so they never need quoting; values are quoted only when
//! they contain a pair delimiter, so extraction round-trips. Each call writes
//! its whole line under the sink lock, so concurrent entries never interleave,
//! and a log call can never fail from the caller's perspective.
//!
//! # Usage
//!
//! ```ignore
//! use kvlog::prelude::*;
//!
//! let ctx = LogContext::with_request_id("req-7");
//! kvlog::log_write!(&ctx, "user", "alice", "count", 3);
//! kvlog::log_message!(&ctx, "loaded {} rows", 42);
//! ```
//!
//! The free functions and macros go through a process-wide default logger;
//! construct a [`Logger`] directly to inject a sink (e.g. for test capture).

pub mod callsite;
pub mod config;
pub mod context;
pub mod entry;
pub mod format;
pub mod logger;
mod macros;
pub mod prelude;
pub mod util;
pub mod value;

pub use context::LogContext;
pub use entry::{KEY_CALLER, KEY_ERROR, KEY_MESSAGE, KEY_REQID, KEY_TIME};
pub use logger::{default_logger, error, error_with, message, write, Logger};
pub use value::Value;
