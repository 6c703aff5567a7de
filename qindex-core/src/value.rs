//! Quality Values
//!
//! ## Overview
//!
//! A [`QualityValue`] is the quality index of one measurement together with
//! the procedure it was computed under. Values come from two places:
//!
//! 1. **Decoded**: read from a record. The wire form is an integer in
//!    `[0, SCALE_MAX]` or one of the named state codes.
//! 2. **Derived**: the result of a combination, or built directly with
//!    [`QualityValue::derived`] and [`QualityValueBuilder`].
//!
//! ## Index State
//!
//! ```text
//! wire      state                              index()
//! --------  ---------------------------------  -------------
//! 0..=10000 Concrete(wire / 10000)             wire / 10000
//! -1        Sentinel(NotComputable)            NaN
//! -2        Sentinel(Faulty)                   NaN
//! -3        Sentinel(FaultyOrNotComputable)    NaN
//! ```
//!
//! A value is computable exactly when its state is concrete. Combining
//! anything with a sentinel yields the canonical not-computable value.
//!
//! ## Equality
//!
//! Two values are equal when index and procedure are equal. Weight and
//! origin do not take part. A sentinel index is NaN, so sentinel values
//! never compare equal, not even to themselves.
//!
//! ## Example
//!
//! ```rust
//! use qindex_core::{Procedure, QualityState, QualityValue};
//!
//! let decoded = QualityValue::from_scaled(8500, Procedure::STANDARD, false)?;
//! assert_eq!(decoded.index(), 0.85);
//! assert!(!decoded.is_intermediate());
//!
//! let faulty = QualityValue::from_scaled(-2, Procedure::STANDARD, false)?;
//! assert!(!faulty.is_computable());
//! assert_eq!(faulty.sentinel(), Some(QualityState::Faulty));
//! assert_eq!(faulty.scaled(), -2);
//! # Ok::<(), qindex_core::QualityError>(())
//! ```

use core::fmt;
use core::hash::{Hash, Hasher};

use crate::codec::{self, WireLayout, WirePair};
use crate::constants::quality::{INDEX_MAX, INDEX_MIN, NEUTRAL_WEIGHT};
use crate::constants::wire::{STATE_FAULTY, STATE_FAULTY_OR_NOT_COMPUTABLE, STATE_NOT_COMPUTABLE};
use crate::errors::{QualityError, QualityResult};
use crate::procedure::Procedure;
use crate::traits::QualityRecord;

/// Named states a quality index can be in instead of a number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QualityState {
    /// The index could not be determined
    NotComputable,
    /// The index was determined but is wrong
    Faulty,
    /// Faulty or not computable, without telling which
    FaultyOrNotComputable,
}

impl QualityState {
    /// Wire code of this state
    pub const fn code(&self) -> i64 {
        match self {
            QualityState::NotComputable => STATE_NOT_COMPUTABLE,
            QualityState::Faulty => STATE_FAULTY,
            QualityState::FaultyOrNotComputable => STATE_FAULTY_OR_NOT_COMPUTABLE,
        }
    }

    /// State for a wire code, `None` if the code names no state
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            STATE_NOT_COMPUTABLE => Some(QualityState::NotComputable),
            STATE_FAULTY => Some(QualityState::Faulty),
            STATE_FAULTY_OR_NOT_COMPUTABLE => Some(QualityState::FaultyOrNotComputable),
            _ => None,
        }
    }
}

/// Either a concrete index or a named state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IndexState {
    /// Index in `[0, 1]`
    Concrete(f64),
    /// No number, only a state
    Sentinel(QualityState),
}

/// Where a quality value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Read from a record
    Decoded,
    /// Result of a combination or built by the caller
    Derived,
}

/// Quality index of one measurement
#[derive(Debug, Clone, Copy)]
pub struct QualityValue {
    state: IndexState,
    procedure: Procedure,
    weight: f64,
    origin: Origin,
}

impl QualityValue {
    /// Start building a derived value
    pub fn builder() -> QualityValueBuilder {
        QualityValueBuilder::new()
    }

    /// Derived value with a concrete index
    ///
    /// Fails with [`QualityError::IndexOutOfRange`] unless `index` lies in
    /// `[0, 1]`.
    pub fn derived(index: f64, procedure: Procedure) -> QualityResult<Self> {
        if !(INDEX_MIN..=INDEX_MAX).contains(&index) {
            return Err(QualityError::IndexOutOfRange { index });
        }
        Ok(Self::new(IndexState::Concrete(index), procedure, Origin::Derived))
    }

    /// Best possible quality (index 1.0)
    pub const fn max(procedure: Procedure) -> Self {
        Self::new(IndexState::Concrete(INDEX_MAX), procedure, Origin::Derived)
    }

    /// Worst possible quality (index 0.0)
    pub const fn min(procedure: Procedure) -> Self {
        Self::new(IndexState::Concrete(INDEX_MIN), procedure, Origin::Derived)
    }

    /// Canonical not-computable value
    pub const fn not_computable(procedure: Procedure) -> Self {
        Self::new(
            IndexState::Sentinel(QualityState::FaultyOrNotComputable),
            procedure,
            Origin::Derived,
        )
    }

    /// Decode a raw wire integer
    ///
    /// `measurement_not_computable` marks the owning measurement as not
    /// computable; a non-sentinel index then decodes as 0.0.
    pub fn from_scaled(
        raw: i64,
        procedure: Procedure,
        measurement_not_computable: bool,
    ) -> QualityResult<Self> {
        let state = codec::index_state_from_wire(raw, measurement_not_computable)?;
        Ok(Self::new(state, procedure, Origin::Decoded))
    }

    const fn new(state: IndexState, procedure: Procedure, origin: Origin) -> Self {
        Self { state, procedure, weight: NEUTRAL_WEIGHT, origin }
    }

    /// Copy of this value carrying `weight`
    pub(crate) fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Index in `[0, 1]`, NaN for a sentinel
    #[inline]
    pub fn index(&self) -> f64 {
        match self.state {
            IndexState::Concrete(index) => index,
            IndexState::Sentinel(_) => f64::NAN,
        }
    }

    /// Index or state
    #[inline]
    pub fn state(&self) -> IndexState {
        self.state
    }

    /// The named state, if there is no concrete index
    #[inline]
    pub fn sentinel(&self) -> Option<QualityState> {
        match self.state {
            IndexState::Concrete(_) => None,
            IndexState::Sentinel(state) => Some(state),
        }
    }

    /// Whether the index can take part in a combination
    #[inline]
    pub fn is_computable(&self) -> bool {
        matches!(self.state, IndexState::Concrete(_))
    }

    /// Procedure the index was computed under
    #[inline]
    pub fn procedure(&self) -> Procedure {
        self.procedure
    }

    /// Weight for weighted sums and differences, 1.0 unless weighted
    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Whether this value was derived rather than decoded
    #[inline]
    pub fn is_intermediate(&self) -> bool {
        self.origin == Origin::Derived
    }

    /// Where this value came from
    #[inline]
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Wire integer of the index
    ///
    /// A sentinel emits its own code. A concrete index outside `[0, 1]`
    /// emits the generic faulty-or-not-computable code.
    pub fn scaled(&self) -> i64 {
        self.scaled_by(NEUTRAL_WEIGHT)
    }

    /// Wire integer of `index · weight`, with the same fallbacks as
    /// [`scaled`](Self::scaled)
    pub fn scaled_weighted(&self) -> i64 {
        self.scaled_by(self.weight)
    }

    fn scaled_by(&self, factor: f64) -> i64 {
        match self.state {
            IndexState::Concrete(index) => {
                codec::scale(index * factor).unwrap_or(STATE_FAULTY_OR_NOT_COMPUTABLE)
            }
            IndexState::Sentinel(state) => state.code(),
        }
    }

    /// Wire pair of scaled index and procedure code
    pub fn to_wire(&self) -> WirePair {
        WirePair {
            index: self.scaled(),
            procedure: self.procedure.code(),
        }
    }

    /// Write index and procedure below `attribute` with the default layout
    pub fn export_into<R: QualityRecord + ?Sized>(
        &self,
        record: &mut R,
        attribute: &str,
    ) -> QualityResult<()> {
        codec::write_quality(record, &WireLayout::DEFAULT, attribute, self)
    }
}

impl PartialEq for QualityValue {
    fn eq(&self, other: &Self) -> bool {
        self.index() == other.index() && self.procedure == other.procedure
    }
}

impl Hash for QualityValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let index = self.index();
        let bits = if index.is_nan() {
            f64::NAN.to_bits()
        } else if index == 0.0 {
            0.0f64.to_bits()
        } else {
            index.to_bits()
        };
        bits.hash(state);
        self.procedure.hash(state);
    }
}

impl fmt::Display for QualityValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state {
            IndexState::Concrete(index) => write!(f, "index {} ({})", index, self.procedure)?,
            IndexState::Sentinel(state) => write!(f, "{:?} ({})", state, self.procedure)?,
        }
        if self.weight != NEUTRAL_WEIGHT {
            write!(f, " weight {}", self.weight)?;
        }
        Ok(())
    }
}

/// Builder for derived quality values
///
/// The index defaults to 1.0; the procedure has no default and must be set.
///
/// ```rust
/// use qindex_core::{Procedure, QualityError, QualityValue};
///
/// let value = QualityValue::builder()
///     .index(0.4)
///     .procedure(Procedure::STANDARD)
///     .build()?;
/// assert_eq!(value.index(), 0.4);
///
/// let missing = QualityValue::builder().index(0.4).build();
/// assert_eq!(missing, Err(QualityError::MissingProcedure));
/// # Ok::<(), QualityError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct QualityValueBuilder {
    index: Option<f64>,
    procedure: Option<Procedure>,
}

impl QualityValueBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the index
    pub fn index(mut self, index: f64) -> Self {
        self.index = Some(index);
        self
    }

    /// Set the procedure
    pub fn procedure(mut self, procedure: Procedure) -> Self {
        self.procedure = Some(procedure);
        self
    }

    /// Build the value
    pub fn build(self) -> QualityResult<QualityValue> {
        let procedure = self.procedure.ok_or(QualityError::MissingProcedure)?;
        QualityValue::derived(self.index.unwrap_or(INDEX_MAX), procedure)
    }
}
