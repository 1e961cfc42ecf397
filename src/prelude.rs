//! Prelude module for convenient imports.
//!
//! Re-exports the types and macros most call sites need. Use it with:
//!
//! ```ignore
//! use kvlog::prelude::*;
//! ```

pub use crate::context::LogContext;
pub use crate::logger::{default_logger, Logger};
pub use crate::value::Value;

// Reserved field keys
pub use crate::entry::{KEY_CALLER, KEY_ERROR, KEY_MESSAGE, KEY_REQID, KEY_TIME};

// Macros
pub use crate::{log_error, log_message, log_write};
