//! Runtime values accepted as log keys and values.

use std::fmt;

/// A log key or value of arbitrary runtime type.
///
/// `From` conversions cover the common primitives; anything else can be
/// captured through [`Value::display`], [`Value::debug`], or [`Value::json`].
/// Formatting renders every variant to its default text representation.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Json(serde_json::Value),
}

impl Value {
    /// Capture any `Display` type by its rendered text.
    pub fn display<T: fmt::Display>(v: T) -> Value {
        Value::Str(v.to_string())
    }

    /// Capture any `Debug` type by its debug rendering.
    pub fn debug<T: fmt::Debug>(v: T) -> Value {
        Value::Str(format!("{:?}", v))
    }

    /// Capture a serializable type as compact JSON text.
    pub fn json<T: serde::Serialize>(v: &T) -> Value {
        match serde_json::to_value(v) {
            Ok(j) => Value::Json(j),
            Err(e) => Value::Str(format!("<unserializable: {}>", e)),
        }
    }

    /// Default text representation used by the token formatter.
    pub(crate) fn render(&self) -> String {
        match self {
            Value::Str(s) => s.clone(),
            Value::Int(v) => v.to_string(),
            Value::Uint(v) => v.to_string(),
            Value::Float(v) => v.to_string(),
            Value::Bool(v) => v.to_string(),
            Value::Json(v) => v.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Value {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Value {
        Value::Str(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Value {
        Value::Str(v.clone())
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Value {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Value {
        Value::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Value {
        Value::Uint(v as u64)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Value {
        Value::Uint(v)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Value {
        Value::Uint(v as u64)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Value {
        Value::Float(v as f64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Value {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Value {
        Value::Bool(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Value {
        Value::Json(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn primitives_render_to_default_text() {
        assert_eq!(Value::from("a").to_string(), "a");
        assert_eq!(Value::from(3).to_string(), "3");
        assert_eq!(Value::from(-7i64).to_string(), "-7");
        assert_eq!(Value::from(8u64).to_string(), "8");
        assert_eq!(Value::from(1.5).to_string(), "1.5");
        assert_eq!(Value::from(true).to_string(), "true");
    }

    #[test]
    fn json_renders_compact() {
        assert_eq!(Value::json(&json!({"a": 1})).to_string(), r#"{"a":1}"#);
    }

    #[test]
    fn display_and_debug_capture() {
        assert_eq!(Value::display(std::net::Ipv4Addr::LOCALHOST).to_string(), "127.0.0.1");
        assert_eq!(Value::debug(Some(1)).to_string(), "Some(1)");
    }
}
