#[cfg(test)]
mod tests {
    use shipos_core::ShipRegistry;

    #[test]
    fn every_dispatch_returns_a_roster_member() {
        // Given
        let computer = ShipRegistry::computer();

        // When/Then
        for _ in 0..100 {
            let subroutine = computer.next_subroutine();

            assert!(computer.subroutines().contains(subroutine));
        }
    }
}
