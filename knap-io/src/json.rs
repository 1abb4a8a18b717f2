use serde::{Deserialize, Serialize};
use serde_json::{to_string, to_string_pretty, to_value, Map, Value};

pub fn dejsonify<'a, T>(json_str: &'a str) -> serde_json::Result<T>
where
    T: Deserialize<'a>,
{
    serde_json::from_str::<T>(json_str)
}

/// Serializes with object keys in sorted order, so equal values always print the same.
pub fn jsonify<T>(obj: &T) -> serde_json::Result<String>
where
    T: Serialize,
{
    to_string(&sort_keys(&to_value(obj)?))
}

pub fn jsonify_pretty<T>(obj: &T) -> serde_json::Result<String>
where
    T: Serialize,
{
    to_string_pretty(&sort_keys(&to_value(obj)?))
}

fn sort_keys(json_value: &Value) -> Value {
    match json_value {
        Value::Object(obj) => {
            let mut sorted_map = Map::new();
            let mut keys: Vec<&String> = obj.keys().collect();
            keys.sort();
            for key in keys {
                if let Some(value) = obj.get(key) {
                    sorted_map.insert(key.clone(), sort_keys(value));
                }
            }
            Value::Object(sorted_map)
        }
        Value::Array(arr) => Value::Array(arr.iter().map(sort_keys).collect()),
        _ => json_value.clone(),
    }
}
