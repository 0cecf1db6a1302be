//! # Algorithms Module
//!
//! Stateless classification of elapsed time into escrow stages.

pub mod classifier;

pub use classifier::{check_action, classify, elapsed, is_action_permitted, next_transition};
