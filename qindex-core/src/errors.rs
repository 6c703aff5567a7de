//! Error Types for Quality Index Decoding and Combination
//!
//! ## Design Philosophy
//!
//! The error system follows the same constraints as the rest of the core:
//!
//! 1. **Small Size**: variants carry only numbers and `&'static str`, so the
//!    enum stays `Copy` and can be returned from hot combination paths.
//!
//! 2. **No Heap Allocation**: no `String` payloads. Which record field failed is
//!    reported as a [`FieldRole`] instead of the caller's attribute name.
//!
//! 3. **Typed Failure**: every error reaches the immediate caller. The core
//!    never logs an error and carries on, and never retries; all operations
//!    are deterministic.
//!
//! ## Error Categories
//!
//! ### Decode
//! - `MissingField`: the record lacks the attribute, its quality item or a leaf
//! - `UnknownProcedure`: the procedure code has no registered procedure
//! - `InvalidWireIndex`: the raw index is neither in `[0, SCALE_MAX]` nor a state code
//! - `RecordRejected`: the record implementation refused a read or write
//!
//! ### Consistency
//! - `InconsistentProcedures`: a combination mixes two procedures
//!
//! ### Configuration
//! - `MissingProcedure`: a derived value was built without a procedure
//! - `IndexOutOfRange`: a derived index lies outside `[0, 1]`
//! - `CapacityExceeded`: more inputs than a value set can hold
//! - `DuplicateProcedure`, `RegistryFull`, `RegistryInstalled`: registry misuse
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use qindex_core::{combine, ErrorKind, Procedure, QualityValue};
//!
//! let a = QualityValue::derived(0.9, Procedure::STANDARD)?;
//! let b = QualityValue::derived(0.8, Procedure::STANDARD)?;
//!
//! match combine::sum(&[a, b]) {
//!     Ok(quality) => assert!((quality.index() - 0.85).abs() < 1e-12),
//!     Err(e) if e.kind() == ErrorKind::Consistency => {
//!         // inputs were produced under different procedures
//!     }
//!     Err(_) => {
//!         // configuration problem in the caller
//!     }
//! }
//! # Ok::<(), qindex_core::QualityError>(())
//! ```

use thiserror_no_std::Error;

/// Result type for quality operations
pub type QualityResult<T> = Result<T, QualityError>;

/// Coarse error category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// Malformed or incomplete wire data
    Decode,
    /// Inputs of one combination disagree on the procedure
    Consistency,
    /// The caller configured a value, set or registry incorrectly
    Configuration,
}

/// Which part of a record a decode step was looking at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldRole {
    /// The measurement attribute itself (e.g. `qKfz`)
    Attribute,
    /// The quality item below the attribute
    QualityItem,
    /// The scaled quality index leaf
    Index,
    /// The procedure code leaf
    Procedure,
    /// The measurement value leaf
    Value,
}

impl FieldRole {
    /// Short name used in messages
    pub const fn name(&self) -> &'static str {
        match self {
            FieldRole::Attribute => "attribute",
            FieldRole::QualityItem => "quality item",
            FieldRole::Index => "index",
            FieldRole::Procedure => "procedure",
            FieldRole::Value => "value",
        }
    }
}

impl core::fmt::Display for FieldRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Quality errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum QualityError {
    /// Required record structure is absent
    #[error("Record is missing the {field}")]
    MissingField {
        /// The part of the record that could not be found
        field: FieldRole,
    },

    /// Procedure code does not resolve through the registry
    #[error("Unknown quality procedure code {code}")]
    UnknownProcedure {
        /// Code read from the record
        code: i64,
    },

    /// Raw index neither scaled nor a known state
    #[error("Wire index {raw} is neither within [0, 10000] nor a state code")]
    InvalidWireIndex {
        /// Raw integer read from the record
        raw: i64,
    },

    /// The record implementation refused the access
    #[error("Record rejected access: {reason}")]
    RecordRejected {
        /// Why the record refused
        reason: &'static str,
    },

    /// Combination inputs use different procedures
    #[error("Combined values require different quality procedures ({first} and {second})")]
    InconsistentProcedures {
        /// Code of the procedure seen first
        first: i32,
        /// Code of the conflicting procedure
        second: i32,
    },

    /// Derived value built without a procedure
    #[error("No procedure given for the quality calculation")]
    MissingProcedure,

    /// Derived index outside the unit interval
    #[error("Quality index {index} outside [0, 1]")]
    IndexOutOfRange {
        /// The rejected index
        index: f64,
    },

    /// Too many computable values for a fixed-capacity value set
    #[error("Value set holds {capacity} values, {requested} requested")]
    CapacityExceeded {
        /// Maximum number of values
        capacity: usize,
        /// Number of values passed in
        requested: usize,
    },

    /// A procedure with this code is already registered
    #[error("Quality procedure code {code} already registered")]
    DuplicateProcedure {
        /// Code already taken
        code: i32,
    },

    /// The registry cannot take more procedures
    #[error("Procedure registry full ({capacity} entries)")]
    RegistryFull {
        /// Maximum number of procedures
        capacity: usize,
    },

    /// The process-wide registry was already initialised
    #[error("Process-wide procedure registry already installed")]
    RegistryInstalled,
}

impl QualityError {
    /// Category of this error
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingField { .. }
            | Self::UnknownProcedure { .. }
            | Self::InvalidWireIndex { .. }
            | Self::RecordRejected { .. } => ErrorKind::Decode,
            Self::InconsistentProcedures { .. } => ErrorKind::Consistency,
            Self::MissingProcedure
            | Self::IndexOutOfRange { .. }
            | Self::CapacityExceeded { .. }
            | Self::DuplicateProcedure { .. }
            | Self::RegistryFull { .. }
            | Self::RegistryInstalled => ErrorKind::Configuration,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for QualityError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::MissingField { field } =>
                defmt::write!(fmt, "Missing {}", field.name()),
            Self::UnknownProcedure { code } =>
                defmt::write!(fmt, "Unknown procedure {}", code),
            Self::InvalidWireIndex { raw } =>
                defmt::write!(fmt, "Invalid wire index {}", raw),
            Self::RecordRejected { reason } =>
                defmt::write!(fmt, "Record rejected: {}", reason),
            Self::InconsistentProcedures { first, second } =>
                defmt::write!(fmt, "Procedures {} and {} differ", first, second),
            Self::MissingProcedure =>
                defmt::write!(fmt, "Missing procedure"),
            Self::IndexOutOfRange { index } =>
                defmt::write!(fmt, "Index {} outside [0, 1]", index),
            Self::CapacityExceeded { capacity, requested } =>
                defmt::write!(fmt, "Need {} slots, have {}", requested, capacity),
            Self::DuplicateProcedure { code } =>
                defmt::write!(fmt, "Duplicate procedure {}", code),
            Self::RegistryFull { capacity } =>
                defmt::write!(fmt, "Registry full ({})", capacity),
            Self::RegistryInstalled =>
                defmt::write!(fmt, "Registry already installed"),
        }
    }
}
