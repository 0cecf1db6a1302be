//! # Domain Module
//!
//! Core value types for the Commitment Engine.

pub mod errors;
pub mod secure_secret;
pub mod value_objects;

pub use errors::*;
pub use secure_secret::SecureSecret;
pub use value_objects::*;
