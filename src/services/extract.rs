use serde_json::Value;

use crate::models::TableDescriptor;

// Full extraction chain: the two documented response shapes first, then the
// whole-document search. Pure, so re-running on the same value yields the
// same list.
pub fn extract_tables(response: &Value) -> Vec<TableDescriptor> {
    match known_shapes(response) {
        Some(tables) => tables,
        None => deep_search(response),
    }
}

// Tries `tables` at the top level, then `data.tables`. None when neither key
// holds an object; the caller falls back to deep_search.
pub fn known_shapes(response: &Value) -> Option<Vec<TableDescriptor>> {
    response
        .get("tables")
        .and_then(Value::as_object)
        .or_else(|| {
            response
                .get("data")
                .and_then(|data| data.get("tables"))
                .and_then(Value::as_object)
        })
        .map(|map| map.values().map(descriptor_of).collect())
}

// Depth-first walk collecting every object that carries `id`, `number` and
// `capacity` at once. A matching object is taken as a table and its children
// are not searched further.
pub fn deep_search(response: &Value) -> Vec<TableDescriptor> {
    let mut found = Vec::new();
    walk(response, &mut found);
    found
}

fn walk(value: &Value, found: &mut Vec<TableDescriptor>) {
    match value {
        Value::Object(obj) => {
            if obj.contains_key("id") && obj.contains_key("number") && obj.contains_key("capacity")
            {
                found.push(TableDescriptor::from_object(obj));
            } else {
                for child in obj.values() {
                    walk(child, found);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                walk(item, found);
            }
        }
        _ => {}
    }
}

fn descriptor_of(entry: &Value) -> TableDescriptor {
    match entry.as_object() {
        Some(obj) => TableDescriptor::from_object(obj),
        None => TableDescriptor {
            id: Value::Null,
            number: Value::Null,
            capacity: Value::Null,
        },
    }
}
