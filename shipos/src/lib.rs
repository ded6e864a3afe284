#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![cfg_attr(test, deny(warnings))]

/// Console operations of the demonstration.
pub mod console;

// Re-export the core for convenience
pub use shipos_core::{ShipComputer, ShipRegistry, Subroutine};

/// Number of handle-fetches compared when confirming the singleton identity.
pub const IDENTITY_PROBES: usize = 4;

/// Number of dispatch requests issued by the demonstration binary.
pub const DISPATCH_REQUESTS: usize = 15;
