//! Tests for per-run coverage tracking

#[cfg(test)]
mod tests {
    use brickplan::algorithm::coverage::CoverageState;

    #[test]
    fn test_new_state_is_uncovered() {
        let coverage = CoverageState::new(4, 3);

        assert_eq!((coverage.width(), coverage.height()), (4, 3));
        assert_eq!(coverage.covered_count(), 0);
        assert!(!coverage.is_complete());
        assert!(!coverage.is_covered(3, 2));
    }

    #[test]
    fn test_cover_marks_exact_rectangle() {
        let mut coverage = CoverageState::new(4, 3);
        coverage.cover(1, 1, 2, 2);

        assert_eq!(coverage.covered_count(), 4);
        for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
            assert!(coverage.is_covered(x, y));
        }
        for (x, y) in [(0, 1), (3, 1), (1, 0), (0, 0)] {
            assert!(!coverage.is_covered(x, y));
        }
    }

    #[test]
    fn test_any_covered() {
        let mut coverage = CoverageState::new(4, 4);
        coverage.cover(2, 2, 1, 1);

        assert!(coverage.any_covered(0, 0, 3, 3));
        assert!(!coverage.any_covered(0, 0, 2, 4));
        assert!(!coverage.any_covered(0, 0, 4, 2));
    }

    // Cells outside the grid behave as covered so nothing is placed there
    #[test]
    fn test_out_of_range_reports_covered() {
        let coverage = CoverageState::new(3, 3);

        assert!(coverage.is_covered(3, 0));
        assert!(coverage.is_covered(0, 3));
        assert!(coverage.any_covered(2, 0, 2, 1));
        assert!(coverage.any_covered(0, 2, 1, 2));
    }

    #[test]
    fn test_cover_clips_to_grid() {
        let mut coverage = CoverageState::new(2, 2);
        coverage.cover(1, 1, 5, 5);

        assert_eq!(coverage.covered_count(), 1);
        coverage.cover(0, 0, 2, 2);
        assert!(coverage.is_complete());
    }

    #[test]
    fn test_empty_state_is_complete() {
        assert!(CoverageState::new(0, 0).is_complete());
    }
}
