//! Value Sets
//!
//! A value set is what a combination actually works on: the operands'
//! indices, their weights and the one procedure they share. It is built
//! per call and never outlives it.
//!
//! ## Scanning
//!
//! ```text
//! for each value, in order:
//!     not computable          → computable = false, stop
//!     new procedure differs   → InconsistentProcedures
//!     otherwise               → push index, push (index, weight)
//!                               weighted |= weight ≠ 1.0
//! ```
//!
//! Once a non-computable value is seen, nothing after it is inspected, so
//! a procedure clash behind it goes unreported. Whatever was collected
//! before the stop is not meaningful and must not be combined.
//!
//! ## Storage
//!
//! With `std` the set grows with its input. Without it, indices live in
//! `heapless` buffers of [`MAX_COMBINATION_INPUTS`] slots; a computable set
//! that does not fit is `CapacityExceeded`. A non-computable set never is.

use crate::constants::buffers::MAX_COMBINATION_INPUTS;
use crate::constants::quality::NEUTRAL_WEIGHT;
use crate::errors::{QualityError, QualityResult};
use crate::procedure::Procedure;
use crate::traits::WeightedIndex;
use crate::value::{IndexState, QualityValue};

#[cfg(feature = "std")]
type Slots<T> = std::vec::Vec<T>;

#[cfg(not(feature = "std"))]
type Slots<T> = heapless::Vec<T, MAX_COMBINATION_INPUTS>;

/// Push into `slots`, false when full
#[cfg(feature = "std")]
#[inline]
fn push<T>(slots: &mut Slots<T>, item: T) -> bool {
    slots.push(item);
    true
}

/// Push into `slots`, false when full
#[cfg(not(feature = "std"))]
#[inline]
fn push<T>(slots: &mut Slots<T>, item: T) -> bool {
    slots.push(item).is_ok()
}

/// Indices, weights and shared procedure of a combination's operands
#[derive(Debug, Clone)]
pub struct ValueSet {
    procedure: Option<Procedure>,
    indices: Slots<f64>,
    weighted: Slots<WeightedIndex>,
    computable: bool,
    is_weighted: bool,
}

impl ValueSet {
    /// Scan `values` into a set
    pub fn collect(values: &[QualityValue]) -> QualityResult<Self> {
        let mut set = Self {
            procedure: None,
            indices: Slots::new(),
            weighted: Slots::new(),
            computable: true,
            is_weighted: false,
        };
        let mut overflowed = false;

        for value in values {
            let index = match value.state() {
                IndexState::Concrete(index) => index,
                IndexState::Sentinel(_) => {
                    set.computable = false;
                    break;
                }
            };

            match set.procedure {
                None => set.procedure = Some(value.procedure()),
                Some(shared) if shared != value.procedure() => {
                    return Err(QualityError::InconsistentProcedures {
                        first: shared.code(),
                        second: value.procedure().code(),
                    });
                }
                Some(_) => {}
            }

            if value.weight() != NEUTRAL_WEIGHT {
                set.is_weighted = true;
            }

            // keep scanning: a later non-computable value still decides the result
            if overflowed
                || !push(&mut set.indices, index)
                || !push(&mut set.weighted, WeightedIndex::new(index, value.weight()))
            {
                overflowed = true;
            }
        }

        if overflowed && set.computable {
            return Err(QualityError::CapacityExceeded {
                capacity: MAX_COMBINATION_INPUTS,
                requested: values.len(),
            });
        }

        Ok(set)
    }

    /// Shared procedure, Standard if no value contributed one
    pub fn procedure(&self) -> Procedure {
        self.procedure.unwrap_or(Procedure::STANDARD)
    }

    /// Indices in input order
    pub fn indices(&self) -> &[f64] {
        &self.indices
    }

    /// Index and weight pairs in input order
    pub fn weighted_indices(&self) -> &[WeightedIndex] {
        &self.weighted
    }

    /// Whether every value was computable
    pub fn is_computable(&self) -> bool {
        self.computable
    }

    /// Whether any scanned value carries a weight other than 1.0
    pub fn is_weighted(&self) -> bool {
        self.is_weighted
    }

    /// Number of collected indices
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether no index was collected
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::procedure::Standard;

    const OTHER: Procedure = Procedure::new(9, "Other", &Standard);

    fn value(index: f64) -> QualityValue {
        QualityValue::derived(index, Procedure::STANDARD).unwrap()
    }

    #[test]
    fn empty_set_is_standard() {
        let set = ValueSet::collect(&[]).unwrap();
        assert_eq!(set.procedure(), Procedure::STANDARD);
        assert!(set.is_computable());
        assert!(!set.is_weighted());
        assert!(set.is_empty());
    }

    #[test]
    fn collects_in_order() {
        let set = ValueSet::collect(&[value(0.2), value(0.7), value(0.4)]).unwrap();
        assert_eq!(set.indices(), &[0.2, 0.7, 0.4]);
        assert_eq!(set.weighted_indices()[1], WeightedIndex::new(0.7, 1.0));
        assert_eq!(set.len(), 3);
        assert!(!set.is_weighted());
    }

    #[test]
    fn procedure_comes_from_the_values() {
        let set = ValueSet::collect(&[QualityValue::max(OTHER)]).unwrap();
        assert_eq!(set.procedure(), OTHER);
    }

    #[test]
    fn mixed_procedures_fail() {
        let result = ValueSet::collect(&[value(0.5), QualityValue::max(OTHER)]);
        assert_eq!(
            result.unwrap_err(),
            QualityError::InconsistentProcedures { first: 0, second: 9 }
        );
    }

    #[test]
    fn scanning_stops_at_first_non_computable() {
        let values = [
            value(0.5),
            QualityValue::not_computable(Procedure::STANDARD),
            QualityValue::max(OTHER),
        ];
        let set = ValueSet::collect(&values).unwrap();
        assert!(!set.is_computable());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn leading_non_computable_keeps_standard() {
        let set = ValueSet::collect(&[QualityValue::not_computable(OTHER)]).unwrap();
        assert!(!set.is_computable());
        assert_eq!(set.procedure(), Procedure::STANDARD);
    }

    #[test]
    fn any_non_neutral_weight_marks_weighted() {
        let set = ValueSet::collect(&[value(0.5), value(0.5).with_weight(0.0)]).unwrap();
        assert!(set.is_weighted());
        assert_eq!(set.weighted_indices()[1].weight, 0.0);
    }

    #[test]
    fn zero_weight_does_not_hide_non_computable() {
        let hidden = QualityValue::not_computable(Procedure::STANDARD).with_weight(0.0);
        let set = ValueSet::collect(&[value(0.5), hidden]).unwrap();
        assert!(!set.is_computable());
    }

    #[test]
    fn non_computable_wins_over_capacity() {
        let mut values = [value(0.5); MAX_COMBINATION_INPUTS + 2];
        values[MAX_COMBINATION_INPUTS + 1] = QualityValue::not_computable(Procedure::STANDARD);
        let set = ValueSet::collect(&values).unwrap();
        assert!(!set.is_computable());

        values[0] = QualityValue::not_computable(Procedure::STANDARD);
        assert!(!ValueSet::collect(&values).unwrap().is_computable());
    }

    #[test]
    fn clash_past_capacity_is_still_reported() {
        let mut values = [value(0.5); MAX_COMBINATION_INPUTS + 2];
        values[MAX_COMBINATION_INPUTS + 1] = QualityValue::max(OTHER);
        assert_eq!(
            ValueSet::collect(&values).unwrap_err(),
            QualityError::InconsistentProcedures { first: 0, second: 9 }
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn grows_past_fixed_capacity_with_std() {
        let values = [value(0.25); MAX_COMBINATION_INPUTS * 2];
        let set = ValueSet::collect(&values).unwrap();
        assert_eq!(set.len(), MAX_COMBINATION_INPUTS * 2);
        assert!(set.is_computable());
    }

    #[cfg(not(feature = "std"))]
    #[test]
    fn capacity_is_bounded_without_std() {
        let values = [value(1.0); MAX_COMBINATION_INPUTS + 1];
        assert_eq!(
            ValueSet::collect(&values).unwrap_err(),
            QualityError::CapacityExceeded {
                capacity: MAX_COMBINATION_INPUTS,
                requested: MAX_COMBINATION_INPUTS + 1,
            }
        );
        assert!(ValueSet::collect(&values[..MAX_COMBINATION_INPUTS]).is_ok());
    }
}
