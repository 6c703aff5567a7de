//! Record Formats for Quality Indices
//!
//! ## Overview
//!
//! `qindex-core` reads and writes quality indices through the
//! [`QualityRecord`](qindex_core::QualityRecord) trait and leaves the
//! concrete record format open. This crate provides two formats:
//!
//! - **Avro**: [`AvroRecord`] over `apache_avro::types::Value`, with the
//!   schemas in [`schemas`] and datum encoding for transport
//! - **JSON**: [`JsonRecord`] over `serde_json::Value`, for tooling and
//!   tests
//!
//! ## Why Avro?
//!
//! 1. **Compact Binary Format**: short-term traffic data arrives every
//!    minute from every detector
//! 2. **Schema Evolution**: detector sites gain attributes over time
//! 3. **Self-Describing**: the schema travels with archived data
//!
//! ## Field Names
//!
//! Avro names are ASCII-only, so Avro records store the quality sub-record
//! under `Guete` instead of `Güte`. Decode Avro records with
//! [`WireLayout::ASCII`](qindex_core::WireLayout::ASCII):
//!
//! ```json
//! {
//!   "type": "record",
//!   "name": "Measurement",
//!   "fields": [
//!     {"name": "Wert", "type": "long"},
//!     {"name": "Guete", "type": {
//!       "type": "record",
//!       "name": "Guete",
//!       "fields": [
//!         {"name": "Index", "type": "long"},
//!         {"name": "Verfahren", "type": "int"}
//!       ]
//!     }}
//!   ]
//! }
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use qindex_core::{combine, ProcedureRegistry};
//! use qindex_schemas::{AvroRecord, GLOBAL_REGISTRY};
//!
//! let schema = GLOBAL_REGISTRY.get("short_term_traffic_v1")?;
//!
//! let mut record = AvroRecord::short_term_traffic("MQ-A7-0815", 1_700_000_000_000);
//! record.set_measurement("qLkw", 12, 9000, 0)?;
//! record.set_measurement("qPkw", 140, 7000, 0)?;
//!
//! let procedures = ProcedureRegistry::new();
//! let codec = GLOBAL_REGISTRY.codec("short_term_traffic_v1", &procedures)?;
//! let q_kfz = combine::sum(&[
//!     codec.decode(&record, "qLkw")?,
//!     codec.decode(&record, "qPkw")?,
//! ])?;
//! codec.export(&q_kfz, &mut record, "qKfz")?;
//!
//! let bytes = record.encode(&schema)?;
//! let decoded = AvroRecord::decode(&schema, &bytes)?;
//! assert_eq!(codec.decode_flagged(&decoded, "qKfz", false)?.scaled(), 8000);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use qindex_core::QualityError;

pub mod avro;
pub mod json;
pub mod registry;
pub mod schemas;

pub use avro::AvroRecord;
pub use json::JsonRecord;
pub use registry::{SchemaRegistry, GLOBAL_REGISTRY};

/// Schema-related errors
#[derive(Debug, thiserror_no_std::Error)]
pub enum SchemaError {
    #[error("Failed to parse schema: {0}")]
    ParseError(String),

    #[error("Schema not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Encoding failed: {0}")]
    Encoding(String),

    #[error("Quality error: {0}")]
    Quality(#[from] QualityError),
}
