//! # Adapters Module
//!
//! Implementations of the outbound ports.

pub mod clock;
pub mod http_relayer;
pub mod relayer;

pub use clock::{ManualClock, SystemClock};
pub use http_relayer::HttpRelayerClient;
pub use relayer::InMemoryRelayer;
