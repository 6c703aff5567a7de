//! Combination Facade
//!
//! Entry points for computing the quality of a derived measurement. Each
//! function mirrors the arithmetic applied to the measurements:
//!
//! ```text
//! measurement            quality
//! ---------------------  ------------------------------
//! a · b · c              product(&[qa, qb, qc])
//! a / b                  quotient(&[qa, qb])
//! a + b + c              sum(&[qa, qb, qc])
//! a - b                  difference(&[qa, qb])
//! aᵏ                     exponentiate(&qa, k)
//! w · a  (in a sum)      sum(&[weight(&qa, w), ...])
//! ```
//!
//! ## Rules Applied in Order
//!
//! 1. No operands: best quality under the standard procedure
//! 2. Any operand not computable: the canonical not-computable value
//! 3. Otherwise the shared procedure's rule, wrapped as a derived value
//!
//! Operands of one call must share a procedure.
//!
//! ## Example
//!
//! ```rust
//! use qindex_core::{combine, Procedure, QualityValue};
//!
//! let q_lkw = QualityValue::derived(0.9, Procedure::STANDARD)?;
//! let q_pkw = QualityValue::derived(0.7, Procedure::STANDARD)?;
//!
//! // qKfz = qLkw + qPkw
//! let q_kfz = combine::sum(&[q_lkw, q_pkw])?;
//! assert!((q_kfz.index() - 0.8).abs() < 1e-12);
//!
//! // Lorries count 4 times in a car-equivalent sum
//! let q_equiv = combine::sum(&[combine::weight(&q_lkw, 4.0), q_pkw])?;
//! assert!((q_equiv.index() - 0.86).abs() < 1e-12);
//! # Ok::<(), qindex_core::QualityError>(())
//! ```

use core::fmt;

use crate::errors::QualityResult;
use crate::procedure::Procedure;
use crate::value::QualityValue;
use crate::value_set::ValueSet;

/// Arithmetic operation a combination stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Multiplication
    Product,
    /// Division
    Quotient,
    /// Addition
    Sum,
    /// Subtraction
    Difference,
}

impl Operator {
    /// Lowercase name
    pub const fn name(&self) -> &'static str {
        match self {
            Operator::Product => "product",
            Operator::Quotient => "quotient",
            Operator::Sum => "sum",
            Operator::Difference => "difference",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Quality of a product of measurements
pub fn product(values: &[QualityValue]) -> QualityResult<QualityValue> {
    combine(Operator::Product, values)
}

/// Quality of a quotient of measurements
pub fn quotient(values: &[QualityValue]) -> QualityResult<QualityValue> {
    combine(Operator::Quotient, values)
}

/// Quality of a sum of measurements
///
/// Uses the weighted rule as soon as one operand carries a weight.
pub fn sum(values: &[QualityValue]) -> QualityResult<QualityValue> {
    combine(Operator::Sum, values)
}

/// Quality of a difference of measurements
///
/// Uses the weighted rule as soon as one operand carries a weight.
pub fn difference(values: &[QualityValue]) -> QualityResult<QualityValue> {
    combine(Operator::Difference, values)
}

/// Quality of a measurement raised to `exponent`
pub fn exponentiate(value: &QualityValue, exponent: f64) -> QualityResult<QualityValue> {
    if !value.is_computable() {
        log_debug!("power of a non-computable quality ({})", value.procedure());
        return Ok(QualityValue::not_computable(value.procedure()));
    }

    let index = value.procedure().rule().power(value.index(), exponent);
    log_trace!("power {}^{} -> {}", value.index(), exponent, index);
    QualityValue::derived(index, value.procedure())
}

/// Copy of `value` carrying `factor` as its weight
///
/// Index, state and procedure are kept. The weight only matters when the
/// copy takes part in a sum or difference.
pub fn weight(value: &QualityValue, factor: f64) -> QualityValue {
    value.with_weight(factor)
}

fn combine(operator: Operator, values: &[QualityValue]) -> QualityResult<QualityValue> {
    if values.is_empty() {
        return Ok(QualityValue::max(Procedure::STANDARD));
    }

    let set = ValueSet::collect(values)?;
    let procedure = set.procedure();
    if !set.is_computable() {
        log_debug!("{} over a non-computable quality ({})", operator, procedure);
        return Ok(QualityValue::not_computable(procedure));
    }

    let rule = procedure.rule();
    let index = match operator {
        Operator::Product => rule.product(set.indices()),
        Operator::Quotient => rule.quotient(set.indices()),
        Operator::Sum if set.is_weighted() => rule.weighted_sum(set.weighted_indices()),
        Operator::Sum => rule.sum(set.indices()),
        Operator::Difference if set.is_weighted() => {
            rule.weighted_difference(set.weighted_indices())
        }
        Operator::Difference => rule.difference(set.indices()),
    };

    log_trace!("{} of {} qualities -> {}", operator, set.len(), index);
    QualityValue::derived(index, procedure)
}
