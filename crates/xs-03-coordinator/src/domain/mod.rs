//! # Domain Module
//!
//! Orders, escrow observations and coordinator errors.

pub mod entities;
pub mod errors;
pub mod invariants;

pub use entities::*;
pub use errors::*;
pub use invariants::*;
