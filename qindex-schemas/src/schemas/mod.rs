//! qindex Avro schemas
//!
//! The measurement and quality sub-records are shared by every traffic
//! record. Field names follow the record format used by data suppliers.

use apache_avro::Schema;
use serde_json::{json, Value};

use crate::SchemaError;

/// Measurement attributes of a short-term traffic record, in field order
///
/// Counts `q*` (vehicles per hour) and speeds `v*` (km/h) for all vehicles
/// (`Kfz`), lorries (`Lkw`) and cars (`Pkw`).
pub const TRAFFIC_ATTRIBUTES: &[&str] = &["qKfz", "qLkw", "qPkw", "vKfz", "vLkw", "vPkw"];

fn quality_json() -> Value {
    json!({
        "type": "record",
        "name": "Guete",
        "doc": "Quality index with the procedure it was computed under",
        "fields": [
            {
                "name": "Index",
                "type": "long",
                "doc": "Scaled index in [0, 10000]; -1 not computable, -2 faulty, -3 faulty or not computable"
            },
            {
                "name": "Verfahren",
                "type": "int",
                "doc": "Quality procedure code, 0 = Standard"
            }
        ]
    })
}

fn measurement_json() -> Value {
    json!({
        "type": "record",
        "name": "Measurement",
        "doc": "Measurement value with its quality",
        "fields": [
            {
                "name": "Wert",
                "type": "long",
                "doc": "Unscaled measurement value; -1 when not computable"
            },
            {
                "name": "Guete",
                "type": quality_json()
            }
        ]
    })
}

fn parse(schema_json: Value) -> Result<Schema, SchemaError> {
    Schema::parse(&schema_json).map_err(|e| SchemaError::ParseError(e.to_string()))
}

/// Quality sub-record schema v1
pub fn quality_v1() -> Result<Schema, SchemaError> {
    let mut schema_json = quality_json();
    schema_json["namespace"] = json!("io.qindex.quality.v1");
    parse(schema_json)
}

/// Measurement schema v1
pub fn measurement_v1() -> Result<Schema, SchemaError> {
    let mut schema_json = measurement_json();
    schema_json["namespace"] = json!("io.qindex.quality.v1");
    parse(schema_json)
}

/// Short-term traffic record schema v1
///
/// One record per detector and interval. The first measurement field
/// defines the `Measurement` type, later fields refer to it by name.
pub fn short_term_traffic_v1() -> Result<Schema, SchemaError> {
    let mut fields = vec![
        json!({
            "name": "detector_id",
            "type": "string",
            "doc": "Measuring site identifier"
        }),
        json!({
            "name": "timestamp",
            "type": "long",
            "doc": "Interval start in milliseconds since epoch"
        }),
    ];

    for (position, attribute) in TRAFFIC_ATTRIBUTES.iter().enumerate() {
        let field_type = if position == 0 {
            measurement_json()
        } else {
            json!("Measurement")
        };
        fields.push(json!({ "name": attribute, "type": field_type }));
    }

    parse(json!({
        "namespace": "io.qindex.traffic.v1",
        "type": "record",
        "name": "ShortTermTraffic",
        "doc": "Short-term traffic data of one detector",
        "fields": fields
    }))
}
