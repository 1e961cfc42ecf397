//! Log entry assembly.
//!
//! An entry is rendered lock-free into its final line form; only the byte
//! write of the finished line happens under the sink lock.

use std::borrow::Cow;

use chrono::{SecondsFormat, Utc};

use crate::context::LogContext;
use crate::format::{format_key, format_value};
use crate::value::Value;

/// Conventional key names for log entries.
pub const KEY_CALLER: &str = "at";
pub const KEY_TIME: &str = "t";
pub const KEY_REQID: &str = "reqid";

/// Produced by the message wrapper.
pub const KEY_MESSAGE: &str = "message";
/// Produced by the error wrappers.
pub const KEY_ERROR: &str = "error";

/// For anomalies produced by the logging machinery itself.
pub(crate) const KEY_LOG_ERROR: &str = "log-error";

pub(crate) const ODD_PARAMS_MSG: &str = "odd number of log params";

/// Render the complete line for one log call.
///
/// `default_at` is used unless the first pair overrides the caller location
/// with [`KEY_CALLER`]; the override pair is consumed, not re-emitted.
pub(crate) fn render(ctx: &LogContext, default_at: &str, keyvals: &[Value]) -> String {
    let mut keyvals: Cow<'_, [Value]> = Cow::Borrowed(keyvals);

    // Invariant: the pair list is always even.
    if keyvals.len() % 2 != 0 {
        let kvs = keyvals.to_mut();
        kvs.push(Value::Str(String::new()));
        kvs.push(Value::Str(KEY_LOG_ERROR.to_string()));
        kvs.push(Value::Str(ODD_PARAMS_MSG.to_string()));
    }

    let (at, rest) = match keyvals.first() {
        Some(Value::Str(k)) if keyvals.len() >= 2 && k.as_str() == KEY_CALLER => {
            (keyvals[1].clone(), &keyvals[2..])
        }
        _ => (Value::Str(default_at.to_string()), &keyvals[..]),
    };

    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

    let mut out = format!(
        "{}={} {}={} {}={}",
        KEY_REQID,
        format_value(&resolve_id(ctx)),
        KEY_CALLER,
        format_value(&at),
        KEY_TIME,
        format_value(&Value::Str(timestamp)),
    );

    for pair in rest.chunks(2) {
        out.push(' ');
        out.push_str(&format_key(&pair[0]));
        out.push('=');
        out.push_str(&format_value(&pair[1]));
    }

    out
}

/// Resolve the correlation ID for a context; a missing ID renders empty.
fn resolve_id(ctx: &LogContext) -> Value {
    Value::Str(ctx.request_id().unwrap_or_default().to_string())
}
