//! Variadic sugar over the flat key/value slice API.

/// Write a structured entry to the default logger.
///
/// Fields are alternating keys and values, each anything convertible to
/// [`Value`](crate::Value):
///
/// ```ignore
/// kvlog::log_write!(&ctx, "user", name, "count", 3);
/// ```
#[macro_export]
macro_rules! log_write {
    ($ctx:expr $(, $kv:expr)* $(,)?) => {
        $crate::write($ctx, &[$($crate::Value::from($kv)),*])
    };
}

/// Write a `message=<text>` entry to the default logger; arguments are
/// handled as in `format!`.
#[macro_export]
macro_rules! log_message {
    ($ctx:expr, $($arg:tt)*) => {
        $crate::message($ctx, ::core::format_args!($($arg)*))
    };
}

/// Write an `error=<text>` entry to the default logger, optionally with a
/// message prefix:
///
/// ```ignore
/// kvlog::log_error!(&ctx, err);
/// kvlog::log_error!(&ctx, err, "opening {}", path);
/// ```
#[macro_export]
macro_rules! log_error {
    ($ctx:expr, $err:expr $(,)?) => {
        $crate::error($ctx, $err)
    };
    ($ctx:expr, $err:expr, $($arg:tt)*) => {
        $crate::error_with($ctx, $err, ::core::format_args!($($arg)*))
    };
}
