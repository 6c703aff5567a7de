//! Wire Codec
//!
//! ## Record Layout
//!
//! ```text
//! <attribute>            e.g. qKfz
//! ├── Wert               measurement value (-1: measurement not computable)
//! └── Güte
//!     ├── Index          scaled index in [0, 10000] or state code -1/-2/-3
//!     └── Verfahren      procedure code
//! ```
//!
//! ## Scaling
//!
//! ```text
//! decode:  index = wire / SCALE_MAX
//! encode:  wire  = clamp(round(index · SCALE_MAX), 0, SCALE_MAX)
//! ```
//!
//! Every wire integer in `[0, SCALE_MAX]` survives decode followed by
//! encode unchanged.
//!
//! ## Example
//!
//! ```rust
//! use qindex_core::codec::{scale, unscale};
//!
//! assert_eq!(unscale(2500), 0.25);
//! assert_eq!(scale(0.25), Some(2500));
//! assert_eq!(scale(0.123456), Some(1235));
//! assert_eq!(scale(1.5), None);
//! ```

use crate::constants::wire::{
    INDEX_LEAF, PROCEDURE_LEAF, QUALITY_ITEM, QUALITY_ITEM_ASCII, SCALE_MAX, SCALE_MAX_F64,
    SCALE_MIN, STATE_NOT_COMPUTABLE, VALUE_LEAF,
};
use crate::constants::quality::{INDEX_MAX, INDEX_MIN};
use crate::errors::{FieldRole, QualityError, QualityResult};
use crate::registry::ProcedureRegistry;
use crate::traits::QualityRecord;
use crate::value::{IndexState, QualityState, QualityValue};

/// Names of the items and leaves a quality is stored under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WireLayout {
    /// Item below the attribute holding the quality sub-record
    pub quality_item: &'static str,
    /// Leaf with the scaled index
    pub index_leaf: &'static str,
    /// Leaf with the procedure code
    pub procedure_leaf: &'static str,
    /// Leaf with the measurement value
    pub value_leaf: &'static str,
}

impl WireLayout {
    /// Layout with the `Güte` quality item
    pub const DEFAULT: WireLayout = WireLayout {
        quality_item: QUALITY_ITEM,
        index_leaf: INDEX_LEAF,
        procedure_leaf: PROCEDURE_LEAF,
        value_leaf: VALUE_LEAF,
    };

    /// Layout for formats with ASCII-only names (`Guete`)
    pub const ASCII: WireLayout = WireLayout {
        quality_item: QUALITY_ITEM_ASCII,
        ..WireLayout::DEFAULT
    };

    /// Same as [`WireLayout::ASCII`]
    pub const fn ascii() -> Self {
        Self::ASCII
    }

    fn index_path<'p>(&'p self, attribute: &'p str) -> [&'p str; 3] {
        [attribute, self.quality_item, self.index_leaf]
    }

    fn procedure_path<'p>(&'p self, attribute: &'p str) -> [&'p str; 3] {
        [attribute, self.quality_item, self.procedure_leaf]
    }
}

impl Default for WireLayout {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Scaled index and procedure code as stored in a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WirePair {
    /// Scaled index or state code
    pub index: i64,
    /// Procedure code
    pub procedure: i32,
}

/// Scale an index in `[0, 1]` to the wire range
///
/// `None` for NaN and for indices outside `[0, 1]`.
pub fn scale(index: f64) -> Option<i64> {
    if !(INDEX_MIN..=INDEX_MAX).contains(&index) {
        return None;
    }
    let raw = libm::round(index * SCALE_MAX_F64) as i64;
    Some(raw.clamp(SCALE_MIN, SCALE_MAX))
}

/// Index for a wire integer in `[0, SCALE_MAX]`
#[inline]
pub fn unscale(raw: i64) -> f64 {
    raw as f64 / SCALE_MAX_F64
}

/// Interpret a raw wire index
///
/// State codes become sentinels. Integers in `[0, SCALE_MAX]` become a
/// concrete index, or 0.0 when the owning measurement is flagged as not
/// computable. Anything else is rejected.
pub fn index_state_from_wire(raw: i64, measurement_not_computable: bool) -> QualityResult<IndexState> {
    if let Some(state) = QualityState::from_code(raw) {
        return Ok(IndexState::Sentinel(state));
    }
    if !(SCALE_MIN..=SCALE_MAX).contains(&raw) {
        return Err(QualityError::InvalidWireIndex { raw });
    }
    if measurement_not_computable {
        Ok(IndexState::Concrete(INDEX_MIN))
    } else {
        Ok(IndexState::Concrete(unscale(raw)))
    }
}

pub(crate) fn write_quality<R: QualityRecord + ?Sized>(
    record: &mut R,
    layout: &WireLayout,
    attribute: &str,
    value: &QualityValue,
) -> QualityResult<()> {
    let wire = value.to_wire();
    record.write_unscaled(&layout.index_path(attribute), wire.index)?;
    record.write_unscaled(&layout.procedure_path(attribute), i64::from(wire.procedure))?;
    log_trace!("exported {} = {}/{}", attribute, wire.index, wire.procedure);
    Ok(())
}

/// Reads and writes quality values in records
///
/// Procedure codes are resolved through the registry the codec was built
/// with.
#[derive(Debug, Clone, Copy)]
pub struct QualityCodec<'a> {
    registry: &'a ProcedureRegistry,
    layout: WireLayout,
}

impl<'a> QualityCodec<'a> {
    /// Codec with the default layout
    pub fn new(registry: &'a ProcedureRegistry) -> Self {
        Self { registry, layout: WireLayout::DEFAULT }
    }

    /// Replace the layout
    pub fn with_layout(mut self, layout: WireLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Layout in use
    pub fn layout(&self) -> &WireLayout {
        &self.layout
    }

    /// Registry in use
    pub fn registry(&self) -> &'a ProcedureRegistry {
        self.registry
    }

    /// Decode the quality of `attribute`
    ///
    /// The measurement value leaf decides whether the measurement itself is
    /// flagged as not computable.
    pub fn decode<R: QualityRecord + ?Sized>(
        &self,
        record: &R,
        attribute: &str,
    ) -> QualityResult<QualityValue> {
        if !record.contains(&[attribute]) {
            return Err(QualityError::MissingField { field: FieldRole::Attribute });
        }
        let measurement = record
            .read_unscaled(&[attribute, self.layout.value_leaf])
            .ok_or(QualityError::MissingField { field: FieldRole::Value })?;

        self.decode_flagged(record, attribute, measurement == STATE_NOT_COMPUTABLE)
    }

    /// Decode the quality of `attribute` with an explicit measurement flag
    pub fn decode_flagged<R: QualityRecord + ?Sized>(
        &self,
        record: &R,
        attribute: &str,
        measurement_not_computable: bool,
    ) -> QualityResult<QualityValue> {
        if !record.contains(&[attribute]) {
            return Err(QualityError::MissingField { field: FieldRole::Attribute });
        }
        if !record.contains(&[attribute, self.layout.quality_item]) {
            return Err(QualityError::MissingField { field: FieldRole::QualityItem });
        }

        let raw = record
            .read_unscaled(&self.layout.index_path(attribute))
            .ok_or(QualityError::MissingField { field: FieldRole::Index })?;
        let code = record
            .read_unscaled(&self.layout.procedure_path(attribute))
            .ok_or(QualityError::MissingField { field: FieldRole::Procedure })?;

        let procedure = self.registry.resolve(code)?;
        let value = QualityValue::from_scaled(raw, procedure, measurement_not_computable)?;

        log_trace!("decoded {} = {}/{}", attribute, raw, code);
        Ok(value)
    }

    /// Write `value` below `attribute`
    pub fn export<R: QualityRecord + ?Sized>(
        &self,
        value: &QualityValue,
        record: &mut R,
        attribute: &str,
    ) -> QualityResult<()> {
        write_quality(record, &self.layout, attribute, value)
    }
}

#[cfg(feature = "std")]
impl QualityCodec<'static> {
    /// Codec over the process-wide registry
    pub fn global() -> Self {
        Self::new(crate::registry::global())
    }
}
