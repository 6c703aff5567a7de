//! Record Format Registry
//!
//! Maps a format name such as `short_term_traffic_v1` to its Avro schema
//! and the [`WireLayout`] its quality sub-records use. Callers that only
//! know the format name of incoming data get both the schema to decode
//! it and a codec that reads it.

use apache_avro::Schema;
use std::collections::BTreeMap;
use std::sync::RwLock;

use qindex_core::{ProcedureRegistry, QualityCodec, WireLayout};

use crate::avro::AVRO_LAYOUT;
use crate::schemas;
use crate::SchemaError;

#[derive(Debug, Clone)]
struct Format {
    schema: Schema,
    layout: WireLayout,
}

/// Thread-safe name → (schema, layout) lookup
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    formats: RwLock<BTreeMap<String, Format>>,
}

fn poisoned<T>(_: T) -> SchemaError {
    SchemaError::ParseError("Lock poisoned".to_string())
}

impl SchemaRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in formats
    pub fn with_defaults() -> Result<Self, SchemaError> {
        let registry = Self::new();
        registry.register("quality_v1", schemas::quality_v1()?, AVRO_LAYOUT)?;
        registry.register("measurement_v1", schemas::measurement_v1()?, AVRO_LAYOUT)?;
        registry.register(
            "short_term_traffic_v1",
            schemas::short_term_traffic_v1()?,
            AVRO_LAYOUT,
        )?;
        Ok(registry)
    }

    /// Add a record format
    ///
    /// Names are unique and only record schemas are accepted.
    pub fn register(&self, name: &str, schema: Schema, layout: WireLayout) -> Result<(), SchemaError> {
        if !matches!(schema, Schema::Record(_)) {
            return Err(SchemaError::ValidationError(format!("{} is not a record schema", name)));
        }

        let mut formats = self.formats.write().map_err(poisoned)?;
        if formats.contains_key(name) {
            return Err(SchemaError::ValidationError(format!("{} already registered", name)));
        }
        formats.insert(name.to_string(), Format { schema, layout });

        log::debug!("registered record format {}", name);
        Ok(())
    }

    fn format(&self, name: &str) -> Result<Format, SchemaError> {
        let formats = self.formats.read().map_err(poisoned)?;
        formats
            .get(name)
            .cloned()
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))
    }

    /// Avro schema of format `name`
    pub fn get(&self, name: &str) -> Result<Schema, SchemaError> {
        self.format(name).map(|format| format.schema)
    }

    /// Wire layout of records in format `name`
    pub fn layout(&self, name: &str) -> Result<WireLayout, SchemaError> {
        self.format(name).map(|format| format.layout)
    }

    /// Codec reading and writing records in format `name`
    pub fn codec<'a>(
        &self,
        name: &str,
        procedures: &'a ProcedureRegistry,
    ) -> Result<QualityCodec<'a>, SchemaError> {
        Ok(QualityCodec::new(procedures).with_layout(self.layout(name)?))
    }

    /// Registered format names in order
    pub fn names(&self) -> Result<Vec<String>, SchemaError> {
        let formats = self.formats.read().map_err(poisoned)?;
        Ok(formats.keys().cloned().collect())
    }
}

lazy_static::lazy_static! {
    /// Process-wide registry with the built-in formats
    pub static ref GLOBAL_REGISTRY: SchemaRegistry = SchemaRegistry::with_defaults()
        .unwrap_or_else(|e| {
            log::error!("built-in record formats failed to load: {}", e);
            SchemaRegistry::new()
        });
}
