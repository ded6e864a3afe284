use std::collections::HashMap;

#[cfg(test)]
mod tests {
    use super::*;
    use assertables::assert_in_delta;
    use shipos_core::{ShipRegistry, Subroutine};

    const REQUESTS: usize = 10_000;

    /// Allowed deviation of 5 percentage points from the expected 20% share.
    const DELTA: usize = REQUESTS / 20;

    #[test]
    fn dispatch_approximates_a_uniform_distribution() {
        // Given
        let computer = ShipRegistry::computer();
        let expected_share = REQUESTS / computer.subroutines().len();

        // When
        let mut tally: HashMap<Subroutine, usize> = HashMap::new();
        for _ in 0..REQUESTS {
            *tally.entry(*computer.next_subroutine()).or_default() += 1;
        }

        // Then: every roster entry came up, each close to its fair share
        for subroutine in computer.subroutines() {
            let count = tally.get(subroutine).copied().unwrap_or_default();

            assert_in_delta!(count, expected_share, DELTA);
        }
    }
}
