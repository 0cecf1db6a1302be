//! # XSwap Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── exploits/         # Adversarial scenarios against reveal and withdrawal
//! │   ├── forged_reveals.rs
//! │   └── timelock_races.rs
//! │
//! └── integration/      # Maker / resolver flows across all three subsystems
//!     ├── flows.rs
//!     └── wire_format.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p xs-tests
//!
//! # By category
//! cargo test -p xs-tests integration::
//! cargo test -p xs-tests exploits::
//!
//! # Benchmarks
//! cargo bench -p xs-tests
//! ```

pub mod fixtures;
pub mod integration;
