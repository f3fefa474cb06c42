use serde::Deserialize;
use serde_json::{Map, Value};

/// The `{success, data, error, timestamp}` object the error check service
/// answers with. Every field is optional on the wire.
#[derive(Debug, Clone)]
pub struct Envelope<'a> {
    pub success: bool,
    pub data: Option<&'a Value>,
    pub error: Option<ApiError>,
    pub timestamp: Option<i64>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub details: Option<Map<String, Value>>,
}

impl<'a> Envelope<'a> {
    /// Borrow the envelope fields out of a parsed body. Returns `None` when the
    /// body is not a JSON object.
    pub fn view(body: &'a Value) -> Option<Self> {
        let object = body.as_object()?;
        Some(Self {
            success: object.get("success").is_some_and(truthy),
            data: object.get("data").filter(|v| truthy(v)),
            error: object
                .get("error")
                .and_then(|v| ApiError::deserialize(v).ok()),
            timestamp: object.get("timestamp").and_then(Value::as_i64),
        })
    }
}

/// How a JSON value's type reads in an error message.
pub const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Loose truthiness: `null`, `false`, zero and empty strings or containers are
/// all falsy.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
