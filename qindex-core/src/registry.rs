//! Procedure Registry
//!
//! Maps the procedure codes found in records to [`Procedure`]s. Every
//! registry knows the standard procedure; further procedures are added
//! explicitly with [`ProcedureRegistry::register`].
//!
//! ## Process-Wide Instance
//!
//! With the `std` feature, one registry can be installed for the whole
//! process. Installation happens once, before first use:
//!
//! ```rust
//! use qindex_core::procedure::{Procedure, Standard};
//! use qindex_core::registry::{self, ProcedureRegistry};
//!
//! const AUDITED: Procedure = Procedure::new(7, "Audited", &Standard);
//!
//! let mut procedures = ProcedureRegistry::new();
//! procedures.register(AUDITED)?;
//! let installed = registry::install(procedures)?;
//!
//! assert_eq!(installed.lookup(7), Some(AUDITED));
//! assert_eq!(registry::global().lookup(7), Some(AUDITED));
//! # Ok::<(), qindex_core::QualityError>(())
//! ```
//!
//! Without an installation, [`global`] returns a registry holding only the
//! standard procedure, and a later `install` fails.

use heapless::Vec;

use crate::constants::buffers::MAX_REGISTERED_PROCEDURES;
use crate::errors::{QualityError, QualityResult};
use crate::procedure::Procedure;

/// Procedures known by code
#[derive(Debug, Clone)]
pub struct ProcedureRegistry {
    procedures: Vec<Procedure, MAX_REGISTERED_PROCEDURES>,
}

impl ProcedureRegistry {
    /// Registry holding only the standard procedure
    pub fn new() -> Self {
        let mut procedures = Vec::new();
        // Capacity is at least one
        let _ = procedures.push(Procedure::STANDARD);
        Self { procedures }
    }

    /// Add a procedure
    ///
    /// Codes are unique; the standard code is always taken.
    pub fn register(&mut self, procedure: Procedure) -> QualityResult<()> {
        if self.lookup(procedure.code()).is_some() {
            return Err(QualityError::DuplicateProcedure { code: procedure.code() });
        }
        self.procedures
            .push(procedure)
            .map_err(|_| QualityError::RegistryFull { capacity: MAX_REGISTERED_PROCEDURES })?;

        log_debug!("registered quality procedure {}", procedure);
        Ok(())
    }

    /// Procedure with `code`, if registered
    pub fn lookup(&self, code: i32) -> Option<Procedure> {
        self.procedures.iter().find(|p| p.code() == code).copied()
    }

    /// Procedure for a code read from a record
    pub fn resolve(&self, code: i64) -> QualityResult<Procedure> {
        i32::try_from(code)
            .ok()
            .and_then(|code| self.lookup(code))
            .ok_or(QualityError::UnknownProcedure { code })
    }

    /// Registered procedures in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Procedure> {
        self.procedures.iter()
    }

    /// Number of registered procedures, Standard included
    pub fn len(&self) -> usize {
        self.procedures.len()
    }

    /// Always false; Standard is always registered
    pub fn is_empty(&self) -> bool {
        self.procedures.is_empty()
    }
}

impl Default for ProcedureRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
static GLOBAL: std::sync::OnceLock<ProcedureRegistry> = std::sync::OnceLock::new();

/// Install the process-wide registry
///
/// Fails with [`QualityError::RegistryInstalled`] once a registry is in
/// place, including the fallback created by an earlier [`global`] call.
#[cfg(feature = "std")]
pub fn install(registry: ProcedureRegistry) -> QualityResult<&'static ProcedureRegistry> {
    GLOBAL
        .set(registry)
        .map_err(|_| QualityError::RegistryInstalled)?;
    let installed = global();
    log_info!("installed procedure registry with {} procedures", installed.len());
    Ok(installed)
}

/// The process-wide registry
#[cfg(feature = "std")]
pub fn global() -> &'static ProcedureRegistry {
    GLOBAL.get_or_init(ProcedureRegistry::new)
}
