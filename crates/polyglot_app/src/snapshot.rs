use std::path::Path;
use std::time::SystemTime;

/// The watched file as seen by one poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSnapshot {
    pub text: String,
    pub modified: Option<SystemTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileChange {
    Unchanged,
    /// The text differs from the previous poll.
    Edited,
    /// Same text, newer modification time: the file was saved without edits.
    Touched,
}

impl FileSnapshot {
    pub async fn read(path: &Path) -> std::io::Result<Self> {
        let text = tokio::fs::read_to_string(path).await?;
        let modified = tokio::fs::metadata(path)
            .await
            .ok()
            .and_then(|meta| meta.modified().ok());
        Ok(Self { text, modified })
    }

    pub fn change_since(&self, previous: &FileSnapshot) -> FileChange {
        if self.text != previous.text {
            FileChange::Edited
        } else if self.modified != previous.modified {
            FileChange::Touched
        } else {
            FileChange::Unchanged
        }
    }
}
