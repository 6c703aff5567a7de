//! Record Access
//!
//! Measurements arrive in hierarchical records: an attribute such as `qKfz`
//! contains a measurement value and a quality sub-record with two integer
//! leaves. The codec only needs to test for, read and write integer leaves
//! by path, which is all this trait asks of a record format.

use crate::errors::QualityResult;

/// Integer-leaf access to a hierarchical record
///
/// Paths are given segment by segment, e.g. `["qKfz", "Güte", "Index"]`.
///
/// ## Implementation Requirements
///
/// - `contains` must be true for inner items as well as for leaves
/// - `read_unscaled` returns `None` for absent paths and for paths that do
///   not end in an integer
/// - `write_unscaled` may refuse with [`QualityError::RecordRejected`]
///
/// [`QualityError::RecordRejected`]: crate::errors::QualityError::RecordRejected
pub trait QualityRecord {
    /// Whether an item exists at `path`
    fn contains(&self, path: &[&str]) -> bool;

    /// Read the raw integer stored at `path`
    fn read_unscaled(&self, path: &[&str]) -> Option<i64>;

    /// Store a raw integer at `path`
    fn write_unscaled(&mut self, path: &[&str], value: i64) -> QualityResult<()>;
}
