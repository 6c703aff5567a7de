//! Core Traits and Abstractions for qindex
//!
//! The two extension points of the crate live here.
//!
//! ## Module Organization
//!
//! - [`rule`] - Combination rules, the numeric side of a quality procedure
//! - [`record`] - Record access, the boundary to external data formats
//!
//! ## Design Philosophy
//!
//! Quality procedures are selected at runtime from a code stored in the
//! record, so rules are used through `&'static dyn CombinationRule`. Records
//! are a compile-time choice of the caller and are taken generically.
//!
//! ## Usage Example
//!
//! ```rust
//! use qindex_core::traits::{CombinationRule, WeightedIndex};
//! use qindex_core::procedure::Standard;
//!
//! let rule: &dyn CombinationRule = &Standard;
//!
//! assert_eq!(rule.product(&[1.0, 0.5]), 0.5);
//! assert_eq!(rule.sum(&[1.0, 0.5]), 0.75);
//!
//! let pairs = [WeightedIndex::new(1.0, 1.0), WeightedIndex::new(0.5, 4.0)];
//! assert!((rule.weighted_sum(&pairs) - 0.6).abs() < 1e-12);
//! ```

pub mod rule;
pub mod record;

pub use rule::{CombinationRule, WeightedIndex};
pub use record::QualityRecord;
