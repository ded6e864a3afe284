use crate::Subroutine;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

// Fixed reference roster of this ship, in insertion order
const ROSTER: [Subroutine; 5] = [
    Subroutine::new("Warp Drive Diagnostics", "Engineering"),
    Subroutine::new("SIF Generator Calibriation", "Engineering"),
    Subroutine::new("Shield Modulators", "Bridge"),
    Subroutine::new("Terraformer", "Holodeck Server"),
    Subroutine::new("Heartrate Analyzer", "Medical"),
];

/// The one computer of this ship: holds the fixed, ordered roster of
/// [`Subroutine`]s and hands out a pseudo-randomly chosen one per
/// [dispatch request](ShipComputer::next_subroutine).
///
/// A [`ShipComputer`] cannot be constructed directly: the single shared
/// instance is reached through [`ShipRegistry::computer`], which guarantees
/// that at most one instance exists per process.
///
/// The roster is immutable after construction. The only mutable state is the
/// internal pseudo-random source, which is lock-guarded and safe to advance
/// from concurrent callers.
///
/// [`ShipRegistry::computer`]: crate::ShipRegistry::computer
pub struct ShipComputer {
    roster: Vec<Subroutine>,
    rng: Mutex<StdRng>,
}

impl ShipComputer {
    /// Internal constructor: only the [`ShipRegistry`](crate::ShipRegistry)
    /// brings a ship computer online.
    pub(crate) fn new() -> Self {
        Self::with_roster(ROSTER.to_vec())
    }

    fn with_roster(roster: Vec<Subroutine>) -> Self {
        // An empty roster is a programming defect: fail fast
        assert!(
            !roster.is_empty(),
            "a ship computer requires a non-empty subroutine roster",
        );

        Self {
            roster,
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }
}

impl ShipComputer {
    /// Serves one dispatch request: picks an index uniformly at random over
    /// the roster and returns the [`Subroutine`] at that index.
    ///
    /// Sampling is with replacement: consecutive calls may well return the
    /// same subroutine, and over many calls every roster entry comes up with
    /// equal probability.
    pub fn next_subroutine(&self) -> &Subroutine {
        // Advance the lock-guarded random cursor
        let index = self.rng.lock().random_range(0..self.roster.len());

        // The index is in range by construction
        let subroutine = &self.roster[index];

        debug!(
            name = subroutine.name(),
            location = subroutine.location(),
            "Dispatching subroutine",
        );

        subroutine
    }

    /// Exposes an immutable view of the full subroutine roster, in insertion
    /// order. Every value returned by
    /// [`next_subroutine`](ShipComputer::next_subroutine) is a member of this
    /// slice.
    pub fn subroutines(&self) -> &[Subroutine] {
        &self.roster
    }
}
