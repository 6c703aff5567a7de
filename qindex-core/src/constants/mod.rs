//! Constants for qindex Core
//!
//! Centralised, documented constants used throughout the crate. Every number
//! the codec or the combination facade relies on is defined here.
//!
//! ## Organization
//!
//! - **Wire**: scaling range and state codes of the external record format
//! - **Quality**: neutral and boundary values in the `[0, 1]` domain
//! - **Buffers**: fixed capacities for allocation-free operation
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Wire constants must match the record format agreed with data suppliers
//! 3. Capacities are upper bounds, not preallocation hints

/// Scaling range, state codes and default field names of the record format.
pub mod wire;

/// Neutral and boundary values of the quality index domain.
pub mod quality;

/// Fixed capacities for value sets and the procedure registry.
pub mod buffers;

pub use wire::{
    SCALE_MAX, SCALE_MIN, STATE_NOT_COMPUTABLE, STATE_FAULTY,
    STATE_FAULTY_OR_NOT_COMPUTABLE, STANDARD_PROCEDURE_CODE,
};

pub use quality::{INDEX_MAX, INDEX_MIN, NEUTRAL_WEIGHT};

pub use buffers::{MAX_COMBINATION_INPUTS, MAX_REGISTERED_PROCEDURES};
