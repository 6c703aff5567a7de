//! Quality index combination for derived traffic measurements
//!
//! Every measurement in a traffic data record carries a quality index in
//! `[0, 1]`. When measurements are combined into derived values (summed,
//! multiplied, divided, subtracted, raised to a power, weighted), the
//! quality of the result has to be combined the same way. This crate does
//! that.
//!
//! Key constraints:
//! - No heap allocation without `std`
//! - `no_std` capable
//! - Procedures are selected at runtime by their record code
//!
//! ```rust
//! use qindex_core::{combine, Procedure, QualityValue};
//!
//! let a = QualityValue::from_scaled(9000, Procedure::STANDARD, false)?;
//! let b = QualityValue::from_scaled(6000, Procedure::STANDARD, false)?;
//!
//! let q = combine::product(&[a, b])?;
//! assert_eq!(q.scaled(), 5400);
//! # Ok::<(), qindex_core::QualityError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod codec;
pub mod combine;
pub mod constants;
pub mod errors;
pub mod procedure;
pub mod registry;
pub mod traits;
pub mod value;
pub mod value_set;

// Public API
pub use codec::{QualityCodec, WireLayout, WirePair};
pub use errors::{ErrorKind, FieldRole, QualityError, QualityResult};
pub use procedure::{Procedure, Standard};
pub use registry::ProcedureRegistry;
pub use traits::{CombinationRule, QualityRecord, WeightedIndex};
pub use value::{IndexState, Origin, QualityState, QualityValue, QualityValueBuilder};
pub use value_set::ValueSet;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
