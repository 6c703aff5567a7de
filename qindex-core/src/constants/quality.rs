//! Quality Index Domain
//!
//! Boundary and neutral values of the `[0, 1]` quality index.

/// Best possible quality.
///
/// Also the neutral result of every combination over an empty input:
/// combining nothing loses nothing.
pub const INDEX_MAX: f64 = 1.0;

/// Worst possible quality.
pub const INDEX_MIN: f64 = 0.0;

/// Weight carried by every value until the facade weights it.
///
/// A value set counts as weighted as soon as one member's weight differs
/// from this.
pub const NEUTRAL_WEIGHT: f64 = 1.0;
