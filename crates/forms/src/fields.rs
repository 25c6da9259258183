use serde_json::{Map, Value};

/// Raw key/value payload of a submitted form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields(Map<String, Value>);

impl Fields {
    /// Parses a request body.
    ///
    /// Anything that is not a JSON object (empty body, malformed JSON, an
    /// array, a bare string) yields an empty payload so that every required
    /// field is later reported as missing.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(map)) => Self(map),
            _ => Self::default(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// String form of a field, `None` when absent or `null`.
    pub fn text(&self, name: &str) -> Option<String> {
        match self.0.get(name)? {
            Value::Null => None,
            Value::String(value) => Some(value.to_owned()),
            other => Some(other.to_string()),
        }
    }

    /// Trimmed string form of a field, empty when absent.
    pub fn sanitized(&self, name: &str) -> String {
        sanitize(self.text(name).as_deref())
    }
}

impl From<Map<String, Value>> for Fields {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Required fields that were absent or blank, in the order they were checked.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Missing required fields: {}", .0.join(", "))]
pub struct MissingFields(pub Vec<String>);

impl MissingFields {
    pub fn names(&self) -> &[String] {
        &self.0
    }
}

/// Checks that every name in `required` carries a non-blank value.
///
/// All missing names are collected, not only the first one.
pub fn validate_required_fields(fields: &Fields, required: &[&str]) -> Result<(), MissingFields> {
    let missing: Vec<String> = required
        .iter()
        .filter(|name| fields.get(name).is_none_or(is_blank))
        .map(|name| name.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(MissingFields(missing))
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(value) => !value,
        Value::Number(value) => value.as_f64() == Some(0.0),
        Value::String(value) => value.trim().is_empty(),
        Value::Array(values) => values.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Trims surrounding whitespace.
///
/// Markup is left untouched: whatever the visitor typed ends up in the
/// outgoing HTML mail as is.
pub fn sanitize(text: Option<&str>) -> String {
    text.map(|text| text.trim().to_owned()).unwrap_or_default()
}
