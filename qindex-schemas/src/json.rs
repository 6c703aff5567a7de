//! JSON Records
//!
//! [`JsonRecord`] stores a record as a `serde_json::Value` tree. Unlike
//! Avro records, JSON records grow on write: missing objects along a path
//! are created, so a derived quality can be exported into an empty record.

use serde_json::{Map, Value};

use qindex_core::{QualityError, QualityRecord, QualityResult};

use crate::SchemaError;

/// JSON document with quality record access
#[derive(Debug, Clone, PartialEq)]
pub struct JsonRecord(Value);

impl JsonRecord {
    /// Empty object
    pub fn new() -> Self {
        Self(Value::Object(Map::new()))
    }

    /// Parse a JSON document
    pub fn parse(text: &str) -> Result<Self, SchemaError> {
        serde_json::from_str(text)
            .map(Self)
            .map_err(|e| SchemaError::ParseError(e.to_string()))
    }

    /// Serialize as compact JSON
    pub fn to_json(&self) -> Result<String, SchemaError> {
        serde_json::to_string(&self.0).map_err(|e| SchemaError::Encoding(e.to_string()))
    }

    /// Underlying JSON value
    pub fn value(&self) -> &Value {
        &self.0
    }

    /// Unwrap the JSON value
    pub fn into_inner(self) -> Value {
        self.0
    }

    fn node(&self, path: &[&str]) -> Option<&Value> {
        path.iter().try_fold(&self.0, |node, segment| node.as_object()?.get(*segment))
    }
}

impl Default for JsonRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Value> for JsonRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl QualityRecord for JsonRecord {
    fn contains(&self, path: &[&str]) -> bool {
        self.node(path).map(|node| !node.is_null()).unwrap_or(false)
    }

    fn read_unscaled(&self, path: &[&str]) -> Option<i64> {
        self.node(path)?.as_i64()
    }

    fn write_unscaled(&mut self, path: &[&str], value: i64) -> QualityResult<()> {
        let (leaf, items) = path
            .split_last()
            .ok_or(QualityError::RecordRejected { reason: "empty path" })?;

        let mut node = &mut self.0;
        for segment in items {
            let object = node
                .as_object_mut()
                .ok_or(QualityError::RecordRejected { reason: "JSON path crosses a non-object" })?;
            node = object
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if node.is_null() {
                *node = Value::Object(Map::new());
            }
        }

        let object = node
            .as_object_mut()
            .ok_or(QualityError::RecordRejected { reason: "JSON path crosses a non-object" })?;
        if matches!(object.get(*leaf), Some(Value::Object(_))) {
            return Err(QualityError::RecordRejected { reason: "JSON leaf is an object" });
        }
        object.insert(leaf.to_string(), Value::from(value));
        Ok(())
    }
}
