//! Tests for batch progress display

#[cfg(test)]
mod tests {
    use mazetile::io::progress::ProgressManager;

    // Tests the full lifecycle and completion count
    #[test]
    fn test_progress_manager_lifecycle() {
        let mut pm = ProgressManager::new();
        pm.initialize("Mazes", 2);
        pm.complete_item("maze_000");

        let mut reported = false;
        pm.report(|| reported = true);
        assert!(reported);

        pm.complete_item("maze_001");
        assert_eq!(pm.completed(), 2);
        pm.finish();
        pm.finish();
    }

    // Tests re-initializing resets the count
    #[test]
    fn test_progress_manager_reinitialize() {
        let mut pm = ProgressManager::default();
        pm.complete_item("orphan");
        assert_eq!(pm.completed(), 1);

        pm.initialize("Grids", 5);
        assert_eq!(pm.completed(), 0);
        pm.finish();
    }
}
