#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![cfg_attr(test, deny(warnings))]

/// Subroutine record.
mod subroutine;
pub use self::subroutine::Subroutine;

/// Ship computer with its fixed subroutine roster.
mod computer;
pub use self::computer::ShipComputer;

/// Global registry holding the single ship computer.
mod registry;
pub use self::registry::ShipRegistry;
