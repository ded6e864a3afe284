use crate::IDENTITY_PROBES;
use shipos_core::ShipRegistry;
use std::io::{self, Write};

/// Fetches [`IDENTITY_PROBES`] handles from the [`ShipRegistry`], compares
/// all pairs by pointer identity, and reports the verdict.
///
/// A confirmation line is written to the given sink only when all handles
/// turn out identical, which, per the registry's contract, is always.
pub fn confirm_shared_computer(out: &mut impl Write) -> io::Result<bool> {
    // Fetch a handle per console
    let handles: Vec<_> = (0..IDENTITY_PROBES)
        .map(|_| ShipRegistry::computer())
        .collect();

    // Compare all pairs by identity
    let identical = handles
        .iter()
        .all(|handle| std::ptr::eq(*handle, handles[0]));

    if identical {
        writeln!(out, "All consoles are wired to the same ship computer")?;
    }

    Ok(identical)
}

/// Issues the given number of dispatch requests against the shared ship
/// computer, writing one line per request to the given sink.
pub fn run_dispatch_loop(requests: usize, out: &mut impl Write) -> io::Result<()> {
    let computer = ShipRegistry::computer();

    for _ in 0..requests {
        let subroutine = computer.next_subroutine();

        writeln!(out, "Dispatch request to: {}", subroutine.name())?;
    }

    Ok(())
}
