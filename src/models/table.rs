use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// One table as reported by the reservation service. The API mixes numeric
// and string ids/numbers, so values are passed through untouched; a field
// the API omits becomes null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDescriptor {
    pub id: Value,
    pub number: Value,
    pub capacity: Value,
}

impl TableDescriptor {
    pub fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            id: obj.get("id").cloned().unwrap_or(Value::Null),
            number: obj.get("number").cloned().unwrap_or(Value::Null),
            capacity: obj.get("capacity").cloned().unwrap_or(Value::Null),
        }
    }
}
