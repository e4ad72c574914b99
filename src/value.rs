//! Typed literal values embedded in predicates.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::escape::escape;

/// A typed scalar literal.
///
/// `Display` produces the literal token: `null`, `true`/`false`, a bare
/// decimal number, `$`-prefixed escaped text, or an RFC 3339 date-time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Absent or unknown value.
    Null,
    /// Boolean.
    Bool(bool),
    /// Double-precision number.
    Number(f64),
    /// Text, escaped on rendering.
    Text(String),
    /// UTC timestamp, rendered with millisecond precision.
    Date(DateTime<Utc>),
}

impl Value {
    /// Text literal from anything string-like.
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "${}", escape(s)),
            Value::Date(d) => write!(f, "{}", d.to_rfc3339_opts(SecondsFormat::Millis, true)),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(d: DateTime<Utc>) -> Self {
        Value::Date(d)
    }
}

/// `None` maps to the null token, matching the literal constructors where
/// every typed input may also be null.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_null_token() {
        assert_eq!(Value::Null.to_string(), "null");
    }

    #[test]
    fn test_booleans() {
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Bool(false).to_string(), "false");
    }

    #[test]
    fn test_whole_number_drops_fraction() {
        assert_eq!(Value::Number(10.0).to_string(), "10");
    }

    #[test]
    fn test_fractional_number() {
        assert_eq!(Value::Number(4.5).to_string(), "4.5");
    }

    #[test]
    fn test_negative_number() {
        assert_eq!(Value::Number(-45e6).to_string(), "-45000000");
    }

    #[test]
    fn test_text_sigil_and_escaping() {
        assert_eq!(Value::text("belgian chocolate").to_string(), "$belgian%20chocolate");
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(Value::text("").to_string(), "$");
    }

    #[test]
    fn test_date_millisecond_precision() {
        let d = Utc.with_ymd_and_hms(2014, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(Value::Date(d).to_string(), "2014-05-01T12:00:00.000Z");
    }

    #[test]
    fn test_null_propagation() {
        // Every typed constructor maps a missing input to the null token.
        assert_eq!(Value::from(None::<bool>).to_string(), "null");
        assert_eq!(Value::from(None::<f64>).to_string(), "null");
        assert_eq!(Value::from(None::<&str>).to_string(), "null");
        assert_eq!(Value::from(None::<DateTime<Utc>>).to_string(), "null");
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(4.5), Value::Number(4.5));
        assert_eq!(Value::from(18), Value::Number(18.0));
        assert_eq!(Value::from("ok"), Value::Text("ok".to_string()));
        assert_eq!(Value::from(Some(4.5)), Value::Number(4.5));
    }
}
