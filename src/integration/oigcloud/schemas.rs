//! OIG Cloud API Schemas
//! The `json.php` endpoint returns one object per box, keyed by box id. Each box
//! object maps a subsystem name (`ac_in`, `batt`, `box_prms`, ...) to its fields.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Telemetry snapshot for all boxes of the account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stats(Map<String, Value>);

/// Telemetry of a single box: subsystem name -> field name -> raw value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxData<'a>(&'a Map<String, Value>);

impl Stats {
    /// Builds a snapshot from a parsed JSON value. Returns `None` unless the value is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Stats(map)),
            _ => None,
        }
    }

    /// Returns `true` if the snapshot contains no box.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Box ids in response order.
    pub fn box_ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// The first box of the snapshot with its id.
    pub fn first_box(&self) -> Option<(&str, BoxData<'_>)> {
        self.0
            .iter()
            .find_map(|(id, value)| value.as_object().map(|data| (id.as_str(), BoxData(data))))
    }
}

impl<'a> BoxData<'a> {
    /// Raw value of `node_key` in subsystem `node_id`.
    pub fn value(&self, node_id: &str, node_key: &str) -> Option<&'a Value> {
        self.0.get(node_id).and_then(|node| node.get(node_key))
    }

    /// Returns `true` if the box reports itself as the Queen model.
    pub fn is_queen(&self) -> bool {
        self.0.get("queen").is_some_and(is_truthy)
    }
}

/// Truthiness of a raw telemetry value: zero, empty and null are false.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
