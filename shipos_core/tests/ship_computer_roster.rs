#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use shipos_core::ShipRegistry;

    #[test]
    fn roster_matches_reference_data_in_order() {
        // Given
        let roster = ShipRegistry::computer().subroutines();

        // Then
        assert!(!roster.is_empty());

        let expected = [
            ("Warp Drive Diagnostics", "Engineering"),
            ("SIF Generator Calibriation", "Engineering"),
            ("Shield Modulators", "Bridge"),
            ("Terraformer", "Holodeck Server"),
            ("Heartrate Analyzer", "Medical"),
        ];

        assert_eq!(roster.len(), expected.len());

        for (subroutine, (name, location)) in roster.iter().zip(expected) {
            assert_eq!(subroutine.name(), name);
            assert_eq!(subroutine.location(), location);
        }
    }

    #[test]
    fn index_two_maps_to_shield_modulators() {
        // Given
        let roster = ShipRegistry::computer().subroutines();

        // Then: a selector that draws index 2 lands on the Bridge
        assert_eq!(roster[2].name(), "Shield Modulators");
        assert_eq!(roster[2].location(), "Bridge");
    }
}
