//! Service Layer
//!
//! Application service that orchestrates the commitment engine and the
//! timelock classifier and talks to the outside through ports.

pub mod coordinator;

pub use coordinator::SwapCoordinator;
