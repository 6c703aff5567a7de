//! Quality Procedures
//!
//! A procedure names a set of combination rules. Records store only its
//! integer code; the [`ProcedureRegistry`](crate::registry::ProcedureRegistry)
//! resolves the code back to a `Procedure` when a value is decoded.
//!
//! Two quality values can only be combined when they were produced under the
//! same procedure. Identity is the code alone: two procedures with equal
//! codes are the same procedure.
//!
//! ## Adding a Procedure
//!
//! ```rust
//! use qindex_core::procedure::{Procedure, Standard};
//! use qindex_core::registry::ProcedureRegistry;
//!
//! // Reuse the standard rules under a second code
//! const AUDITED: Procedure = Procedure::new(7, "Audited", &Standard);
//!
//! let mut registry = ProcedureRegistry::new();
//! registry.register(AUDITED)?;
//! assert_eq!(registry.lookup(7), Some(AUDITED));
//! # Ok::<(), qindex_core::QualityError>(())
//! ```

mod standard;

pub use standard::Standard;

use core::fmt;
use core::hash::{Hash, Hasher};

use crate::constants::wire::{STANDARD_PROCEDURE_CODE, STANDARD_PROCEDURE_NAME};
use crate::traits::CombinationRule;

/// A quality procedure: wire code, name and bound combination rules
#[derive(Clone, Copy)]
pub struct Procedure {
    code: i32,
    name: &'static str,
    rule: &'static dyn CombinationRule,
}

impl Procedure {
    /// The standard procedure (code 0)
    pub const STANDARD: Procedure =
        Procedure::new(STANDARD_PROCEDURE_CODE, STANDARD_PROCEDURE_NAME, &Standard);

    /// Bind a code and a name to a rule
    pub const fn new(code: i32, name: &'static str, rule: &'static dyn CombinationRule) -> Self {
        Self { code, name, rule }
    }

    /// Code stored in the `Verfahren` leaf
    #[inline]
    pub const fn code(&self) -> i32 {
        self.code
    }

    /// Human-readable name
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Combination rules of this procedure
    #[inline]
    pub fn rule(&self) -> &'static dyn CombinationRule {
        self.rule
    }

    /// Whether this is the standard procedure
    #[inline]
    pub const fn is_standard(&self) -> bool {
        self.code == STANDARD_PROCEDURE_CODE
    }
}

impl Default for Procedure {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl PartialEq for Procedure {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Procedure {}

impl Hash for Procedure {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Debug for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Procedure")
            .field("code", &self.code)
            .field("name", &self.name)
            .finish()
    }
}

impl fmt::Display for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Procedure {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{} ({})", self.name, self.code)
    }
}
