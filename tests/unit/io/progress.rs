//! Tests for progress bar allocation and batch mode switching

#[cfg(test)]
mod tests {
    use brickplan::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
    use brickplan::io::progress::ProgressManager;
    use std::path::Path;

    #[test]
    fn test_small_batch_uses_one_bar_per_file() {
        let mut manager = ProgressManager::new();
        manager.initialize(3);

        assert_eq!(manager.bar_count(), 3);
        assert!(!manager.is_batched());
    }

    #[test]
    fn test_batch_limit_is_inclusive() {
        let mut manager = ProgressManager::new();
        manager.initialize(MAX_INDIVIDUAL_PROGRESS_BARS);

        assert_eq!(manager.bar_count(), MAX_INDIVIDUAL_PROGRESS_BARS);
        assert!(!manager.is_batched());
    }

    // Large batches share one row bar under a file counter
    #[test]
    fn test_large_batch_switches_to_file_counter() {
        let mut manager = ProgressManager::new();
        manager.initialize(MAX_INDIVIDUAL_PROGRESS_BARS + 5);

        assert_eq!(manager.bar_count(), 1);
        assert!(manager.is_batched());
    }

    #[test]
    fn test_file_lifecycle_out_of_order_indices() {
        let mut manager = ProgressManager::default();
        manager.initialize(2);

        manager.start_file(1, Path::new("b.png"), 48);
        manager.update_row(1, 10);
        manager.start_file(0, Path::new("a.png"), 21);
        manager.update_row(0, 20);
        manager.complete_file(0);
        manager.complete_file(1);
        // Unknown index is ignored
        manager.update_row(7, 3);
        manager.finish();

        assert_eq!(manager.bar_count(), 2);
    }

    #[test]
    fn test_batched_lifecycle_reuses_row_bar() {
        let mut manager = ProgressManager::new();
        manager.initialize(MAX_INDIVIDUAL_PROGRESS_BARS + 1);

        for index in 0..=MAX_INDIVIDUAL_PROGRESS_BARS {
            manager.start_file(index, Path::new("code.png"), 42);
            manager.update_row(index, 41);
            manager.complete_file(index);
        }
        manager.finish();

        assert_eq!(manager.bar_count(), 1);
    }
}
