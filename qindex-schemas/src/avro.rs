//! Avro Records
//!
//! [`AvroRecord`] wraps an `apache_avro::types::Value` and exposes its
//! integer leaves to the quality codec. Navigation follows record fields
//! by name and looks through unions, so optional sub-records work the same
//! as required ones once present.
//!
//! Avro records have a fixed shape: writing creates nothing, it only
//! replaces existing `long` or `int` leaves.

use apache_avro::types::Value;
use apache_avro::Schema;

use qindex_core::constants::wire::{
    INDEX_LEAF, PROCEDURE_LEAF, QUALITY_ITEM_ASCII, STATE_NOT_COMPUTABLE, VALUE_LEAF,
};
use qindex_core::{QualityError, QualityRecord, QualityResult, WireLayout};

use crate::schemas::TRAFFIC_ATTRIBUTES;
use crate::SchemaError;

/// Layout of the quality sub-record in Avro data
pub const AVRO_LAYOUT: WireLayout = WireLayout::ASCII;

/// Avro datum with quality record access
#[derive(Debug, Clone, PartialEq)]
pub struct AvroRecord(Value);

impl AvroRecord {
    /// Wrap an Avro value
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Measurement record `{ Wert, Guete { Index, Verfahren } }`
    pub fn measurement(wert: i64, index: i64, procedure: i32) -> Value {
        Value::Record(vec![
            (VALUE_LEAF.to_string(), Value::Long(wert)),
            (
                QUALITY_ITEM_ASCII.to_string(),
                Value::Record(vec![
                    (INDEX_LEAF.to_string(), Value::Long(index)),
                    (PROCEDURE_LEAF.to_string(), Value::Int(procedure)),
                ]),
            ),
        ])
    }

    /// Short-term traffic record with every measurement not computable
    pub fn short_term_traffic(detector_id: &str, timestamp_ms: i64) -> Self {
        let mut fields = vec![
            ("detector_id".to_string(), Value::String(detector_id.to_string())),
            ("timestamp".to_string(), Value::Long(timestamp_ms)),
        ];
        fields.extend(TRAFFIC_ATTRIBUTES.iter().map(|attribute| {
            (
                (*attribute).to_string(),
                Self::measurement(STATE_NOT_COMPUTABLE, STATE_NOT_COMPUTABLE, 0),
            )
        }));
        Self(Value::Record(fields))
    }

    /// Overwrite value, index and procedure of one measurement
    pub fn set_measurement(
        &mut self,
        attribute: &str,
        wert: i64,
        index: i64,
        procedure: i32,
    ) -> QualityResult<()> {
        self.write_unscaled(&[attribute, VALUE_LEAF], wert)?;
        self.write_unscaled(&[attribute, QUALITY_ITEM_ASCII, INDEX_LEAF], index)?;
        self.write_unscaled(
            &[attribute, QUALITY_ITEM_ASCII, PROCEDURE_LEAF],
            i64::from(procedure),
        )
    }

    /// Underlying Avro value
    pub fn value(&self) -> &Value {
        &self.0
    }

    /// Unwrap the Avro value
    pub fn into_inner(self) -> Value {
        self.0
    }

    /// Encode as a single Avro datum
    pub fn encode(&self, schema: &Schema) -> Result<Vec<u8>, SchemaError> {
        if !self.0.validate(schema) {
            return Err(SchemaError::ValidationError(format!(
                "record does not match schema {:?}",
                schema.name()
            )));
        }
        apache_avro::to_avro_datum(schema, self.0.clone())
            .map_err(|e| SchemaError::Encoding(e.to_string()))
    }

    /// Decode a single Avro datum
    pub fn decode(schema: &Schema, mut bytes: &[u8]) -> Result<Self, SchemaError> {
        apache_avro::from_avro_datum(schema, &mut bytes, None)
            .map(Self)
            .map_err(|e| SchemaError::Encoding(e.to_string()))
    }

    fn node(&self, path: &[&str]) -> Option<&Value> {
        path.iter().try_fold(&self.0, |node, segment| field(node, segment))
    }

    fn node_mut(&mut self, path: &[&str]) -> Option<&mut Value> {
        path.iter().try_fold(&mut self.0, |node, segment| field_mut(node, segment))
    }
}

impl From<Value> for AvroRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

fn unwrap_union(value: &Value) -> &Value {
    match value {
        Value::Union(_, inner) => unwrap_union(inner),
        other => other,
    }
}

fn unwrap_union_mut(value: &mut Value) -> &mut Value {
    match value {
        Value::Union(_, inner) => unwrap_union_mut(inner),
        other => other,
    }
}

fn field<'v>(node: &'v Value, name: &str) -> Option<&'v Value> {
    match unwrap_union(node) {
        Value::Record(fields) => fields.iter().find(|(n, _)| n == name).map(|(_, v)| v),
        _ => None,
    }
}

fn field_mut<'v>(node: &'v mut Value, name: &str) -> Option<&'v mut Value> {
    match unwrap_union_mut(node) {
        Value::Record(fields) => fields.iter_mut().find(|(n, _)| n == name).map(|(_, v)| v),
        _ => None,
    }
}

impl QualityRecord for AvroRecord {
    fn contains(&self, path: &[&str]) -> bool {
        self.node(path)
            .map(|node| !matches!(unwrap_union(node), Value::Null))
            .unwrap_or(false)
    }

    fn read_unscaled(&self, path: &[&str]) -> Option<i64> {
        match unwrap_union(self.node(path)?) {
            Value::Long(v) => Some(*v),
            Value::Int(v) => Some(i64::from(*v)),
            _ => None,
        }
    }

    fn write_unscaled(&mut self, path: &[&str], value: i64) -> QualityResult<()> {
        let node = self
            .node_mut(path)
            .ok_or(QualityError::RecordRejected { reason: "no such field in Avro record" })?;

        match unwrap_union_mut(node) {
            Value::Long(slot) => *slot = value,
            Value::Int(slot) => {
                *slot = i32::try_from(value)
                    .map_err(|_| QualityError::RecordRejected { reason: "value exceeds Avro int" })?;
            }
            _ => {
                return Err(QualityError::RecordRejected {
                    reason: "Avro field is not an integer",
                })
            }
        }
        Ok(())
    }
}
