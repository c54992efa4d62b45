use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::AppResult;

/// String-keyed bag of heterogeneous settings values.
///
/// Reads never fail: a missing key, or a value stored under a different
/// type, yields the caller's default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsData {
    entries: BTreeMap<String, Value>,
}

impl SettingsData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn delete_key(&mut self, key: &str) {
        self.entries.remove(key);
    }

    pub fn delete_all(&mut self) {
        self.entries.clear();
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn raw(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn get_string(&self, key: &str, default: &str) -> String {
        self.entries
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or(default)
            .to_string()
    }

    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.entries
            .get(key)
            .and_then(Value::as_i64)
            .unwrap_or(default)
    }

    pub fn get_float(&self, key: &str, default: f64) -> f64 {
        self.entries
            .get(key)
            .and_then(Value::as_f64)
            .unwrap_or(default)
    }

    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.entries
            .get(key)
            .and_then(Value::as_bool)
            .unwrap_or(default)
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let Some(value) = self.entries.get(key) else {
            return default;
        };

        match serde_json::from_value(value.clone()) {
            Ok(parsed) => parsed,
            Err(err) => {
                debug!(key, error = %err, "stored value has a different shape, using default");
                default
            }
        }
    }

    pub fn set_string(&mut self, key: &str, value: &str) {
        self.entries
            .insert(key.to_string(), Value::String(value.to_string()));
    }

    pub fn set_int(&mut self, key: &str, value: i64) {
        self.entries.insert(key.to_string(), Value::from(value));
    }

    /// Non-finite floats have no JSON form and are stored as `null`.
    pub fn set_float(&mut self, key: &str, value: f64) {
        self.entries.insert(key.to_string(), Value::from(value));
    }

    pub fn set_bool(&mut self, key: &str, value: bool) {
        self.entries.insert(key.to_string(), Value::Bool(value));
    }

    pub fn set<T: Serialize>(&mut self, key: &str, value: T) -> AppResult<()> {
        let value = serde_json::to_value(value)?;
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    pub(crate) fn to_document(&self) -> AppResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub(crate) fn from_document(document: Value) -> AppResult<Self> {
        Ok(serde_json::from_value(document)?)
    }
}
