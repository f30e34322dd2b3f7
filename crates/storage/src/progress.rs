//! Progress persistence.

use std::path::Path;

use async_trait::async_trait;
use qbank_core::ProgressState;
use tokio::fs;
use tracing::debug;

use crate::error::{Result, StorageError};
use crate::files::DataFiles;

/// Persistence for the done/marked id lists.
///
/// This trait lets the session layer run against an in-memory store in
/// tests.
#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Load both id lists. Missing files yield empty lists.
    async fn load(&self) -> Result<ProgressState>;

    /// Overwrite both files with the given state.
    async fn save(&mut self, state: &ProgressState) -> Result<()>;
}

/// JSON file backed progress store.
pub struct JsonProgressStore {
    files: DataFiles,
}

impl JsonProgressStore {
    /// Create a store over the given file locations.
    pub fn new(files: DataFiles) -> Self {
        Self { files }
    }
}

#[async_trait]
impl ProgressStore for JsonProgressStore {
    async fn load(&self) -> Result<ProgressState> {
        let done = read_id_list(self.files.done_questions()).await?;
        let marked = read_id_list(self.files.marked_questions()).await?;
        Ok(ProgressState::new(done, marked))
    }

    async fn save(&mut self, state: &ProgressState) -> Result<()> {
        write_id_list(self.files.done_questions(), &state.done).await?;
        write_id_list(self.files.marked_questions(), &state.marked).await?;
        debug!(
            done = state.done.len(),
            marked = state.marked.len(),
            "progress written"
        );
        Ok(())
    }
}

async fn read_id_list(path: &Path) -> Result<Vec<String>> {
    match fs::read_to_string(path).await {
        Ok(json) => serde_json::from_str(&json).map_err(|source| StorageError::Parse {
            path: path.to_path_buf(),
            source,
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(source) => Err(StorageError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

async fn write_id_list(path: &Path, ids: &[String]) -> Result<()> {
    let json = serde_json::to_string_pretty(ids)?;
    fs::write(path, json.as_bytes())
        .await
        .map_err(|source| StorageError::Write {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_missing_files_yields_empty_state() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonProgressStore::new(DataFiles::new(dir.path()));

        let state = store.load().await.unwrap();

        assert!(state.done.is_empty());
        assert!(state.marked.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let files = DataFiles::new(dir.path());

        let mut state = ProgressState::default();
        state.record_done("q1");
        state.record_done("q2");
        state.record_done("q1");
        state.record_marked("q3");

        let mut store = JsonProgressStore::new(files.clone());
        store.save(&state).await.unwrap();

        let reloaded = JsonProgressStore::new(files).load().await.unwrap();
        assert_eq!(reloaded.done, vec!["q1", "q2", "q1"]);
        assert_eq!(reloaded.marked, vec!["q3"]);
        assert!(reloaded.is_done("q1"));
        assert!(reloaded.is_marked("q3"));
    }

    #[tokio::test]
    async fn test_malformed_done_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("done_questions.json"), "]]").unwrap();

        let store = JsonProgressStore::new(DataFiles::new(dir.path()));
        let err = store.load().await.unwrap_err();

        assert!(matches!(err, StorageError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let files = DataFiles::new(dir.path());
        let mut store = JsonProgressStore::new(files.clone());

        let mut state = ProgressState::new(vec!["q1".to_string()], vec![]);
        store.save(&state).await.unwrap();

        state = ProgressState::new(vec!["q2".to_string()], vec!["q1".to_string()]);
        store.save(&state).await.unwrap();

        let reloaded = JsonProgressStore::new(files).load().await.unwrap();
        assert_eq!(reloaded.done, vec!["q2"]);
        assert_eq!(reloaded.marked, vec!["q1"]);
    }
}
