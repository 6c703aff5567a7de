//! Standard Quality Procedure
//!
//! ## Rules
//!
//! ```text
//! product / quotient      p(x₁..xₙ) = x₁ · x₂ · … · xₙ
//! sum / difference        s(x₁..xₙ) = (x₁ + … + xₙ) / n
//! weighted variants       sw(x, w)  = Σ |wᵢ|·xᵢ / Σ |wᵢ|
//! power                   e(x, k)   = xᵏ
//! ```
//!
//! Every rule returns `1.0` for an empty input; `sw` also returns `1.0`
//! when all weights are zero.
//!
//! Multiplying measurements multiplies their uncertainty, so the product
//! rule is harsh: one operand with index 0 zeroes the result. Summing
//! averages it out, so the sum rule is the mean.

use crate::constants::quality::INDEX_MAX;
use crate::traits::{CombinationRule, WeightedIndex};

/// The standard combination rules
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Standard;

impl Standard {
    fn mean(indices: &[f64]) -> f64 {
        if indices.is_empty() {
            return INDEX_MAX;
        }
        indices.iter().sum::<f64>() / indices.len() as f64
    }

    fn weighted_mean(pairs: &[WeightedIndex]) -> f64 {
        // weights relative to the largest, so their total stays finite
        let largest = pairs
            .iter()
            .map(|pair| libm::fabs(pair.weight))
            .fold(0.0, libm::fmax);
        if largest == 0.0 {
            return INDEX_MAX;
        }

        let mut sum = 0.0;
        let mut total_weight = 0.0;
        for pair in pairs {
            let weight = libm::fabs(pair.weight) / largest;
            sum += weight * pair.index;
            total_weight += weight;
        }
        sum / total_weight
    }
}

impl CombinationRule for Standard {
    #[inline]
    fn product(&self, indices: &[f64]) -> f64 {
        indices.iter().fold(INDEX_MAX, |acc, x| acc * x)
    }

    #[inline]
    fn quotient(&self, indices: &[f64]) -> f64 {
        self.product(indices)
    }

    #[inline]
    fn sum(&self, indices: &[f64]) -> f64 {
        Self::mean(indices)
    }

    #[inline]
    fn difference(&self, indices: &[f64]) -> f64 {
        Self::mean(indices)
    }

    #[inline]
    fn weighted_sum(&self, pairs: &[WeightedIndex]) -> f64 {
        Self::weighted_mean(pairs)
    }

    #[inline]
    fn weighted_difference(&self, pairs: &[WeightedIndex]) -> f64 {
        Self::weighted_mean(pairs)
    }

    #[inline]
    fn power(&self, index: f64, exponent: f64) -> f64 {
        libm::pow(index, exponent)
    }
}
