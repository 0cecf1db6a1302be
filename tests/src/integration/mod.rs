//! # Integration Tests
//!
//! Cross-subsystem flows: commitment engine, timelock classifier and the
//! coordinator wired to a manual clock and an in-memory relayer.

pub mod flows;
pub mod wire_format;
