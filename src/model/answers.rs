use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// Bag of question id -> answer value.
///
/// Decoding is permissive: anything that is not a usable number becomes 0,
/// so the scorer never has to deal with a malformed value. Completeness and
/// range checks belong to intake, not here.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct AnswerSet {
    values: BTreeMap<String, f64>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for a question, 0 when absent
    pub fn get(&self, id: &str) -> f64 {
        self.values.get(id).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl From<Value> for AnswerSet {
    /// Non-object payloads yield an empty set
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => map
                .into_iter()
                .map(|(k, v)| (k, coerce_number(&v)))
                .collect(),
            _ => AnswerSet::default(),
        }
    }
}

impl Serialize for AnswerSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (id, value) in &self.values {
            // Keep the usual 0..=3 answers as JSON integers
            if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
                map.serialize_entry(id, &(*value as i64))?;
            } else {
                map.serialize_entry(id, value)?;
            }
        }
        map.end()
    }
}

/// Numeric reading of a loosely typed JSON value; unusable values become 0
pub fn coerce_number(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(0.0)
            }
        }
        Value::Bool(true) => 1.0,
        Value::Bool(false) | Value::Null => 0.0,
        Value::Array(_) | Value::Object(_) => 0.0,
    };
    if n.is_finite() { n } else { 0.0 }
}
