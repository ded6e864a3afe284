use std::fmt::{Display, Formatter};

/// A named ship task with an associated on-board location. Pure sample data:
/// two string attributes, value equality, no behavior of its own.
///
/// Subroutines come into existence exactly once, when the [`ShipComputer`]
/// builds its fixed roster, and are never mutated afterwards.
///
/// [`ShipComputer`]: crate::ShipComputer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subroutine {
    name: &'static str,
    location: &'static str,
}

impl Subroutine {
    /// Internal constructor. Only the roster creates subroutines.
    pub(crate) const fn new(name: &'static str, location: &'static str) -> Self {
        Self { name, location }
    }

    /// Exposes the name of this subroutine.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Exposes the on-board location where this subroutine runs.
    pub fn location(&self) -> &str {
        self.location
    }
}

impl Display for Subroutine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.location)
    }
}
