use crate::ShipComputer;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;
use tracing::info;

// Global singleton instance of the ship computer
static COMPUTER: OnceLock<ShipComputer> = OnceLock::new();

// Counts ship computer constructions within this process
static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

/// Facade representing the global (singleton) [`ShipComputer`].
///
/// The computer is brought online on the first call to
/// [`ShipRegistry::computer`] and lives for the remainder of the process.
/// Every call, from any thread, returns a reference to that same instance:
/// even when multiple threads race on first access, exactly one computer is
/// constructed and all callers converge on it.
///
/// ## Example
///
/// ```rust
/// use shipos_core::ShipRegistry;
///
/// let console_a = ShipRegistry::computer();
/// let console_b = ShipRegistry::computer();
///
/// // Both consoles are wired to the same computer
/// assert!(std::ptr::eq(console_a, console_b));
/// ```
pub struct ShipRegistry;

impl ShipRegistry {
    /// Exposes the global singleton [`ShipComputer`], constructing it on
    /// first access.
    ///
    /// Idempotent: repeated calls within one process return references that
    /// compare equal by pointer identity. Cannot fail: the fixed roster is
    /// compile-time data.
    pub fn computer() -> &'static ShipComputer {
        COMPUTER.get_or_init(Self::construct)
    }

    /// Internal chokepoint for constructing the global singleton [`COMPUTER`].
    fn construct() -> ShipComputer {
        CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);

        info!("Bringing the ship computer online");

        ShipComputer::new()
    }

    /// Reports how many ship computers have been constructed within this
    /// process so far: `0` before first access, `1` ever after.
    ///
    /// This is a diagnostic surface for verifying the singleton contract; it
    /// carries no operational meaning.
    pub fn construction_count() -> usize {
        CONSTRUCTIONS.load(Ordering::SeqCst)
    }
}
