use std::time::{Duration, SystemTime};

use polyglot_app::{FileChange, FileSnapshot};
use pretty_assertions::assert_eq;

fn snapshot(text: &str, modified: Option<SystemTime>) -> FileSnapshot {
    FileSnapshot {
        text: text.to_string(),
        modified,
    }
}

#[test]
fn new_text_is_an_edit() {
    let t0 = SystemTime::UNIX_EPOCH + Duration::from_secs(100);
    let t1 = t0 + Duration::from_secs(1);

    assert_eq!(
        snapshot("b", Some(t1)).change_since(&snapshot("a", Some(t0))),
        FileChange::Edited
    );
    assert_eq!(
        snapshot("b", Some(t0)).change_since(&snapshot("a", Some(t0))),
        FileChange::Edited
    );
}

#[test]
fn saving_identical_text_is_a_touch() {
    let t0 = SystemTime::UNIX_EPOCH + Duration::from_secs(100);
    let t1 = t0 + Duration::from_secs(1);

    assert_eq!(
        snapshot("a", Some(t1)).change_since(&snapshot("a", Some(t0))),
        FileChange::Touched
    );
}

#[test]
fn same_text_and_time_is_unchanged() {
    let t0 = SystemTime::UNIX_EPOCH + Duration::from_secs(100);

    assert_eq!(
        snapshot("a", Some(t0)).change_since(&snapshot("a", Some(t0))),
        FileChange::Unchanged
    );
    assert_eq!(
        snapshot("a", None).change_since(&snapshot("a", None)),
        FileChange::Unchanged
    );
}

#[tokio::test]
async fn read_picks_up_text_and_modification_time() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("main.cs");
    std::fs::write(&path, "int x = 1;").unwrap();

    let first = FileSnapshot::read(&path).await.unwrap();
    assert_eq!(first.text, "int x = 1;");

    let second = FileSnapshot::read(&path).await.unwrap();
    assert_eq!(second.change_since(&first), FileChange::Unchanged);

    std::fs::write(&path, "int x = 2;").unwrap();
    let third = FileSnapshot::read(&path).await.unwrap();
    assert_eq!(third.change_since(&second), FileChange::Edited);
}

#[tokio::test]
async fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(FileSnapshot::read(&dir.path().join("absent.rs")).await.is_err());
}
