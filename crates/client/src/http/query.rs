//! Query-string serialization for request parameters.

use serde_json::Value;

use super::runtime::Params;

/// Serialize a parameter object into a query string: scalars as
/// `key=value`, sequences as `key[i]=value`, nested objects as
/// `key[sub]=value`. Keys and values are percent-encoded.
pub fn stringify(params: &Params) -> String {
    let mut pairs = Vec::new();
    for (key, value) in params {
        append_pairs(key, value, &mut pairs);
    }
    pairs.join("&")
}

fn append_pairs(key: &str, value: &Value, pairs: &mut Vec<String>) {
    match value {
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                append_pairs(&format!("{key}[{index}]"), item, pairs);
            }
        }
        Value::Object(map) => {
            for (sub_key, item) in map {
                append_pairs(&format!("{key}[{sub_key}]"), item, pairs);
            }
        }
        Value::Null => pairs.push(format!("{}=", urlencoding::encode(key))),
        Value::String(text) => {
            pairs.push(format!("{}={}", urlencoding::encode(key), urlencoding::encode(text)));
        }
        scalar => pairs.push(format!("{}={}", urlencoding::encode(key), scalar)),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn params(value: Value) -> Params {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn serializes_scalar_params() {
        let query = stringify(&params(json!({"app": 1, "query": "limit 10"})));
        assert_eq!(query, "app=1&query=limit%2010");
    }

    #[test]
    fn serializes_sequences_with_indices() {
        let query = stringify(&params(json!({"fields": ["$id", "title"]})));
        assert_eq!(query, "fields%5B0%5D=%24id&fields%5B1%5D=title");
    }

    #[test]
    fn serializes_nested_objects_with_bracket_paths() {
        let query = stringify(&params(json!({"record": {"title": {"value": "x"}}})));
        assert_eq!(query, "record%5Btitle%5D%5Bvalue%5D=x");
    }

    #[test]
    fn null_serializes_as_empty_value() {
        let query = stringify(&params(json!({"offset": null, "app": 1})));
        assert_eq!(query, "app=1&offset=");
    }

    #[test]
    fn empty_params_serialize_to_empty_string() {
        assert_eq!(stringify(&Params::new()), "");
    }

    #[test]
    fn equal_maps_yield_equal_strings() {
        let first = params(json!({"b": 2, "a": 1}));
        let second = params(json!({"a": 1, "b": 2}));
        assert_eq!(stringify(&first), stringify(&second));
    }
}
