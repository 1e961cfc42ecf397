//! Request-scoped correlation handles.
//!
//! Correlation is explicit parameter passing: a [`LogContext`] carries at
//! most one request ID and is threaded through log calls by the caller, so
//! the entry builder has no hidden dependencies.

use crate::util;

/// Handle that ties log entries to a specific request.
#[derive(Debug, Clone, Default)]
pub struct LogContext {
    request_id: Option<String>,
}

impl LogContext {
    /// A context with no correlation ID. Entries logged against it render an
    /// empty `reqid` field.
    pub fn new() -> Self {
        Self::default()
    }

    /// A context carrying the given request ID.
    pub fn with_request_id(id: impl Into<String>) -> Self {
        Self {
            request_id: Some(id.into()),
        }
    }

    /// A context carrying a fresh process-unique request ID.
    pub fn fresh() -> Self {
        Self::with_request_id(format!("req-{}", util::next_request_id()))
    }

    /// The correlation ID, if one is set.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}
