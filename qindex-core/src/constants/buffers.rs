//! Fixed Capacities
//!
//! The procedure registry always uses fixed-capacity storage sized here.
//! Value sets do too when built without `std`.

/// Maximum number of quality values combined in one facade call without `std`.
///
/// Derived traffic values combine a handful of inputs (e.g. vehicle counts
/// per lane, per class). 64 covers wide multi-lane cross sections with room
/// to spare:
/// - 64 × 8 bytes indices + 64 × 16 bytes weighted pairs ≈ 1.5 KB stack
///
/// Exceeding it with computable values is a configuration error, not a
/// silent truncation. With `std` value sets grow as needed.
pub const MAX_COMBINATION_INPUTS: usize = 64;

/// Maximum number of procedures a registry can hold.
///
/// One standard procedure is predefined; the rest is headroom for
/// deployment-specific procedures.
pub const MAX_REGISTERED_PROCEDURES: usize = 8;
