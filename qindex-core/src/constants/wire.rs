//! Wire Format Constants
//!
//! The external record format stores a quality index as a bounded integer
//! next to an integer procedure code. Negative integers are reserved for
//! named states instead of numbers.

// ===== SCALING =====

/// Upper bound of the scaled integer index.
///
/// A wire value of `SCALE_MAX` means index `1.0`; the resolution is
/// therefore `1 / SCALE_MAX = 0.0001`.
pub const SCALE_MAX: i64 = 10_000;

/// Lower bound of the scaled integer index (index `0.0`).
pub const SCALE_MIN: i64 = 0;

/// Floating-point form of [`SCALE_MAX`] used by the codec.
pub const SCALE_MAX_F64: f64 = SCALE_MAX as f64;

// ===== STATE CODES =====

/// The value could not be determined.
///
/// Also used in a measurement's own `Wert` leaf to flag the measurement
/// itself as not computable.
pub const STATE_NOT_COMPUTABLE: i64 = -1;

/// The value was determined but is known to be wrong.
pub const STATE_FAULTY: i64 = -2;

/// Generic state: faulty or not computable.
///
/// Emitted on export whenever no concrete index and no more specific
/// state is available.
pub const STATE_FAULTY_OR_NOT_COMPUTABLE: i64 = -3;

// ===== PROCEDURES =====

/// Procedure code reserved for the standard procedure.
pub const STANDARD_PROCEDURE_CODE: i32 = 0;

/// Display name of the standard procedure.
pub const STANDARD_PROCEDURE_NAME: &str = "Standard";

// ===== FIELD NAMES =====

/// Item below a measurement attribute that holds the quality sub-record.
pub const QUALITY_ITEM: &str = "Güte";

/// ASCII spelling of [`QUALITY_ITEM`] for formats restricted to ASCII names.
pub const QUALITY_ITEM_ASCII: &str = "Guete";

/// Leaf holding the scaled index.
pub const INDEX_LEAF: &str = "Index";

/// Leaf holding the procedure code.
pub const PROCEDURE_LEAF: &str = "Verfahren";

/// Leaf holding the measurement value itself.
pub const VALUE_LEAF: &str = "Wert";
