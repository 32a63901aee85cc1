use polyglot_logging::{initialize, polyglot_debug, polyglot_info, LevelFilter, LogDestination};
use tempfile::TempDir;

// Runs in its own test binary so the global logger is not yet installed.
#[test]
fn file_destination_receives_messages_at_or_above_level() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("pipeline.log");

    initialize(LogDestination::File(path.clone()), LevelFilter::Info);
    polyglot_info!("dispatched job seq={}", 7);
    polyglot_debug!("this stays below the threshold");

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("dispatched job seq=7"));
    assert!(!content.contains("below the threshold"));
}
