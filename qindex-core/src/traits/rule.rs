//! Combination Rules
//!
//! A combination rule answers one question: given the quality indices of the
//! operands, what is the quality index of the arithmetic result? One function
//! exists per arithmetic operation the measurements can go through.
//!
//! ## Contract
//!
//! - All inputs are concrete indices in `[0, 1]`; sentinel handling happens
//!   before a rule is called.
//! - Slices may be empty. Combining nothing must return the best quality.
//! - Rules are pure. The same inputs always give the same output.

/// One operand of a weighted combination
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedIndex {
    /// Quality index of the operand
    pub index: f64,
    /// Weight of the operand; only its magnitude is used
    pub weight: f64,
}

impl WeightedIndex {
    /// Pair an index with its weight
    pub const fn new(index: f64, weight: f64) -> Self {
        Self { index, weight }
    }
}

/// Numeric rules of a quality procedure
///
/// `quotient`, `difference` and `weighted_difference` are separate entry
/// points even when a rule treats them like their counterparts, so a rule
/// can punish subtraction or division harder than addition or
/// multiplication.
///
/// ## Example Implementation
///
/// ```rust
/// use qindex_core::traits::{CombinationRule, WeightedIndex};
///
/// /// Always keeps the worst operand.
/// struct Pessimistic;
///
/// impl Pessimistic {
///     fn worst(xs: impl Iterator<Item = f64>) -> f64 {
///         xs.fold(1.0, f64::min)
///     }
/// }
///
/// impl CombinationRule for Pessimistic {
///     fn product(&self, xs: &[f64]) -> f64 { Self::worst(xs.iter().copied()) }
///     fn quotient(&self, xs: &[f64]) -> f64 { Self::worst(xs.iter().copied()) }
///     fn sum(&self, xs: &[f64]) -> f64 { Self::worst(xs.iter().copied()) }
///     fn difference(&self, xs: &[f64]) -> f64 { Self::worst(xs.iter().copied()) }
///     fn weighted_sum(&self, xs: &[WeightedIndex]) -> f64 {
///         Self::worst(xs.iter().map(|p| p.index))
///     }
///     fn weighted_difference(&self, xs: &[WeightedIndex]) -> f64 {
///         Self::worst(xs.iter().map(|p| p.index))
///     }
///     fn power(&self, x: f64, _exponent: f64) -> f64 { x }
/// }
///
/// assert_eq!(Pessimistic.sum(&[0.9, 0.4, 0.7]), 0.4);
/// ```
pub trait CombinationRule: Send + Sync {
    /// Quality of a product of measurements
    fn product(&self, indices: &[f64]) -> f64;

    /// Quality of a quotient of measurements
    fn quotient(&self, indices: &[f64]) -> f64;

    /// Quality of a sum of measurements
    fn sum(&self, indices: &[f64]) -> f64;

    /// Quality of a difference of measurements
    fn difference(&self, indices: &[f64]) -> f64;

    /// Quality of a sum where operands carry weights
    fn weighted_sum(&self, pairs: &[WeightedIndex]) -> f64;

    /// Quality of a difference where operands carry weights
    fn weighted_difference(&self, pairs: &[WeightedIndex]) -> f64;

    /// Quality of a measurement raised to `exponent`
    fn power(&self, index: f64, exponent: f64) -> f64;
}
