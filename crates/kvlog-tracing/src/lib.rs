//! `tracing` bridge for kvlog.
//!
//! Routes `tracing` events through the kvlog formatter so that macro-based
//! instrumentation and direct kvlog calls land in the same sink with the
//! same K=V line format. Correlation works the way spans do: a `reqid`
//! field recorded on any enclosing span becomes the entry's request ID.
//!
//! # Usage
//!
//! ```ignore
//! kvlog_tracing::init();
//!
//! let span = tracing::info_span!("request", reqid = "req-42");
//! let _guard = span.enter();
//! tracing::info!(user = "alice", "login ok");
//! // -> reqid=req-42 at=handler.rs:17 t=... level=INFO target=app message="login ok" user=alice
//! ```

use std::fmt;
use std::sync::Arc;

use tracing::{
    field::{Field, Visit},
    span, Event, Subscriber,
};
use tracing_subscriber::{
    layer::{Context, SubscriberExt},
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

use kvlog::{callsite, LogContext, Logger, Value, KEY_CALLER, KEY_MESSAGE};

/// Span field that carries the correlation ID.
const REQID_FIELD: &str = "reqid";

/// Tracing layer that renders events as kvlog lines.
///
/// The layer intercepts every event, resolves the correlation ID from the
/// current span hierarchy, captures the event's fields in order, and emits
/// one line through the shared [`Logger`].
pub struct KvLayer {
    logger: Arc<Logger>,
}

impl KvLayer {
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }
}

/// Correlation ID extracted from a span's fields.
#[derive(Clone, Default)]
struct ReqId(Option<String>);

/// Visitor that pulls the `reqid` field out of span attributes.
struct SpanVisitor {
    reqid: ReqId,
}

impl Visit for SpanVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == REQID_FIELD {
            self.reqid.0 = Some(value.to_string());
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        if field.name() == REQID_FIELD {
            self.reqid.0 = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == REQID_FIELD {
            self.reqid.0 = Some(format!("{:?}", value));
        }
    }
}

/// Visitor that captures the message and remaining event fields in order.
struct EventVisitor {
    message: Option<String>,
    fields: Vec<Value>,
}

impl EventVisitor {
    fn new() -> Self {
        Self {
            message: None,
            fields: Vec::new(),
        }
    }

    fn push(&mut self, field: &Field, value: Value) {
        self.fields.push(Value::from(field.name()));
        self.fields.push(value);
    }
}

impl Visit for EventVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == KEY_MESSAGE {
            self.message = Some(value.to_string());
        } else {
            self.push(field, Value::from(value));
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.push(field, Value::Int(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.push(field, Value::Uint(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.push(field, Value::Float(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.push(field, Value::Bool(value));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == KEY_MESSAGE {
            self.message = Some(format!("{:?}", value));
        } else {
            self.push(field, Value::debug(value));
        }
    }
}

impl<S> Layer<S> for KvLayer
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn on_new_span(&self, attrs: &span::Attributes<'_>, id: &span::Id, ctx: Context<'_, S>) {
        let mut visitor = SpanVisitor {
            reqid: ReqId::default(),
        };
        attrs.record(&mut visitor);

        if let Some(span) = ctx.span(id) {
            span.extensions_mut().insert(visitor.reqid);
        }
    }

    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        // The innermost span carrying a reqid wins.
        let mut reqid = None;
        if let Some(scope) = ctx.event_scope(event) {
            for span in scope {
                if reqid.is_none() {
                    if let Some(stored) = span.extensions().get::<ReqId>() {
                        reqid = stored.0.clone();
                    }
                }
            }
        }

        let meta = event.metadata();
        let at = callsite::location(meta.file(), meta.line());

        let mut visitor = EventVisitor::new();
        event.record(&mut visitor);

        let log_ctx = match reqid {
            Some(id) => LogContext::with_request_id(id),
            None => LogContext::new(),
        };

        let mut keyvals = vec![
            Value::from(KEY_CALLER),
            Value::Str(at),
            Value::from("level"),
            Value::from(meta.level().to_string()),
            Value::from("target"),
            Value::from(meta.target()),
            Value::from(KEY_MESSAGE),
            Value::Str(visitor.message.unwrap_or_default()),
        ];
        keyvals.extend(visitor.fields);

        self.logger.write(&log_ctx, &keyvals);
    }
}

/// Initialize a global subscriber rendering events through a fresh stdout
/// logger, filtered by `RUST_LOG` (default `info`).
///
/// Call this once at application startup.
pub fn init() {
    init_with_logger(Arc::new(Logger::stdout()));
}

/// Initialize the global subscriber with a custom logger.
pub fn init_with_logger(logger: Arc<Logger>) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(KvLayer::new(logger))
        .init();
}
