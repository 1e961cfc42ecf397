//! The shared-sink logger and its convenience wrappers.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use once_cell::sync::Lazy;

use crate::callsite;
use crate::context::LogContext;
use crate::entry::{self, KEY_CALLER, KEY_ERROR, KEY_MESSAGE};
use crate::value::Value;

/// Writes structured log entries as single lines to an owned sink.
///
/// All formatting happens outside the sink lock; the lock guards exactly one
/// whole-line write per call, so concurrent entries never interleave.
pub struct Logger {
    sink: Mutex<Box<dyn Write + Send>>,
}

impl Logger {
    /// A logger writing to the given sink.
    pub fn new(sink: Box<dyn Write + Send>) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }

    /// A logger writing to process standard output.
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    /// A logger writing to process standard error.
    pub fn stderr() -> Self {
        Self::new(Box::new(io::stderr()))
    }

    /// Replace the sink. The swap happens under the same lock as writes, so
    /// a concurrent entry lands entirely in the old sink or the new one.
    pub fn set_sink(&self, sink: Box<dyn Write + Send>) {
        *self.lock_sink() = sink;
    }

    /// Write a structured log entry. Fields are specified as a flat
    /// alternating sequence of keys and values; duplicate keys are
    /// preserved.
    ///
    /// A request ID taken from the context, the caller's `file:line`, and a
    /// UTC timestamp are prepended automatically. As a special case, passing
    /// [`KEY_CALLER`] as the first key overrides the auto-generated caller;
    /// the override should be reserved for custom logging functions that
    /// wrap `write`.
    ///
    /// This call cannot fail: an odd pair count is reported in-line and sink
    /// write errors are ignored.
    #[track_caller]
    pub fn write(&self, ctx: &LogContext, keyvals: &[Value]) {
        let line = entry::render(ctx, &callsite::caller(), keyvals);

        let mut sink = self.lock_sink();
        let _ = sink.write_all(line.as_bytes()); // ignore errors
    }

    /// Write an entry containing a message under the `message` key.
    ///
    /// The recorded location is this function's caller; arguments are
    /// handled as in `format!` (see [`log_message!`](crate::log_message)).
    #[track_caller]
    pub fn message(&self, ctx: &LogContext, args: fmt::Arguments<'_>) {
        let at = callsite::caller();
        self.write(
            ctx,
            &[
                Value::from(KEY_CALLER),
                Value::Str(at),
                Value::from(KEY_MESSAGE),
                Value::Str(args.to_string()),
            ],
        );
    }

    /// Write an entry containing an error message under the `error` key.
    #[track_caller]
    pub fn error(&self, ctx: &LogContext, err: impl fmt::Display) {
        let at = callsite::caller();
        self.write_error(ctx, at, err.to_string());
    }

    /// Like [`Logger::error`], with a message prefix: `<prefix>: <error>`.
    #[track_caller]
    pub fn error_with(&self, ctx: &LogContext, err: impl fmt::Display, prefix: fmt::Arguments<'_>) {
        let at = callsite::caller();
        self.write_error(ctx, at, format!("{}: {}", prefix, err));
    }

    fn write_error(&self, ctx: &LogContext, at: String, msg: String) {
        self.write(
            ctx,
            &[
                Value::from(KEY_CALLER),
                Value::Str(at),
                Value::from(KEY_ERROR),
                Value::Str(msg),
            ],
        );
    }

    fn lock_sink(&self) -> MutexGuard<'_, Box<dyn Write + Send>> {
        self.sink.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

static DEFAULT_LOGGER: Lazy<Logger> = Lazy::new(Logger::stdout);

/// The process-wide default logger used by the free functions and macros.
///
/// Its sink starts as standard output and can be replaced with
/// [`Logger::set_sink`] or [`config::init_from_env`](crate::config::init_from_env).
pub fn default_logger() -> &'static Logger {
    &DEFAULT_LOGGER
}

/// Write a structured entry to the default logger. See [`Logger::write`].
#[track_caller]
pub fn write(ctx: &LogContext, keyvals: &[Value]) {
    DEFAULT_LOGGER.write(ctx, keyvals)
}

/// Write a `message` entry to the default logger. See [`Logger::message`].
#[track_caller]
pub fn message(ctx: &LogContext, args: fmt::Arguments<'_>) {
    DEFAULT_LOGGER.message(ctx, args)
}

/// Write an `error` entry to the default logger. See [`Logger::error`].
#[track_caller]
pub fn error(ctx: &LogContext, err: impl fmt::Display) {
    DEFAULT_LOGGER.error(ctx, err)
}

/// Write a prefixed `error` entry to the default logger. See
/// [`Logger::error_with`].
#[track_caller]
pub fn error_with(ctx: &LogContext, err: impl fmt::Display, prefix: fmt::Arguments<'_>) {
    DEFAULT_LOGGER.error_with(ctx, err, prefix)
}
