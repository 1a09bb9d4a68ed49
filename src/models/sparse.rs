//! Helpers for building sparse JSON objects
//!
//! The Pushcut API expects absent fields to be left out rather than sent as
//! `null`. Each helper inserts a key only when the value is truthy: a
//! non-empty string, a non-empty collection or `true`.

use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub type JsonMap = Map<String, Value>;

pub(crate) fn put_str(map: &mut JsonMap, key: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        map.insert(key.to_string(), Value::String(value.to_string()));
    }
}

pub(crate) fn put_flag(map: &mut JsonMap, key: &str, value: Option<bool>) {
    if value == Some(true) {
        map.insert(key.to_string(), Value::Bool(true));
    }
}

pub(crate) fn put_strings(map: &mut JsonMap, key: &str, values: &[String]) {
    if !values.is_empty() {
        let items = values.iter().cloned().map(Value::String).collect();
        map.insert(key.to_string(), Value::Array(items));
    }
}

pub(crate) fn put_string_map(map: &mut JsonMap, key: &str, values: &BTreeMap<String, String>) {
    if !values.is_empty() {
        let object = values
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        map.insert(key.to_string(), Value::Object(object));
    }
}

pub(crate) fn put_object(map: &mut JsonMap, key: &str, value: JsonMap) {
    if !value.is_empty() {
        map.insert(key.to_string(), Value::Object(value));
    }
}
