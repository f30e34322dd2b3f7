//! Loading of the read-only catalog files.

use qbank_core::{Catalog, Question, RelevanceFilter};
use tokio::fs;
use tracing::warn;

use crate::error::{Result, StorageError};
use crate::files::DataFiles;

/// Load the question catalog together with its relevance filter.
///
/// A missing or malformed question file is an error. The relevance filter is
/// optional and falls back to an empty filter when its file is absent or
/// unreadable.
pub async fn load_catalog(files: &DataFiles) -> Result<Catalog> {
    let questions = load_questions(files).await?;
    let relevance = load_relevance_filter(files).await;
    Ok(Catalog::new(questions, relevance))
}

/// Load the question list from `questions.json`.
pub async fn load_questions(files: &DataFiles) -> Result<Vec<Question>> {
    let path = files.questions();
    let json = fs::read_to_string(path)
        .await
        .map_err(|source| StorageError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    serde_json::from_str(&json).map_err(|source| StorageError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the relevance filter from `relevant_descriptors.json`.
///
/// The file is user-maintained and optional, so any failure to read or parse
/// it yields an empty filter; parse failures are logged rather than raised.
pub async fn load_relevance_filter(files: &DataFiles) -> RelevanceFilter {
    let path = files.relevant_descriptors();
    let json = match fs::read_to_string(path).await {
        Ok(json) => json,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return RelevanceFilter::default();
        }
        Err(e) => {
            warn!("Could not read {}: {}", path.display(), e);
            return RelevanceFilter::default();
        }
    };

    match serde_json::from_str::<Vec<String>>(&json) {
        Ok(descriptors) => RelevanceFilter::new(descriptors),
        Err(e) => {
            warn!("Could not parse {}: {}", path.display(), e);
            RelevanceFilter::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_QUESTIONS: &str = r#"[
        {
            "id": "q1",
            "title": "Define a monoid",
            "descriptors": ["B_T_1", "B_T_2"],
            "beamer_link": "slides/algebra.pdf#12"
        },
        {
            "id": "q2",
            "title": "State the pumping lemma",
            "descriptors": ["B_T_3"],
            "beamer_link": "slides/automata.pdf#4"
        }
    ]"#;

    fn write_file(dir: &std::path::Path, name: &str, contents: &str) {
        std::fs::write(dir.join(name), contents).unwrap();
    }

    #[tokio::test]
    async fn test_load_catalog_with_filter() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "questions.json", SAMPLE_QUESTIONS);
        write_file(dir.path(), "relevant_descriptors.json", r#"["B_T_1"]"#);

        let catalog = load_catalog(&DataFiles::new(dir.path())).await.unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.questions()[0].id, "q1");
        assert_eq!(catalog.questions()[0].link, "slides/algebra.pdf#12");
        assert!(catalog.relevance().contains("B_T_1"));
        assert!(!catalog.relevance().contains("B_T_3"));
    }

    #[tokio::test]
    async fn test_missing_questions_file_is_error() {
        let dir = tempfile::tempdir().unwrap();

        let err = load_catalog(&DataFiles::new(dir.path())).await.unwrap_err();

        assert!(matches!(err, StorageError::Read { .. }));
    }

    #[tokio::test]
    async fn test_malformed_questions_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "questions.json", "not json at all");

        let err = load_catalog(&DataFiles::new(dir.path())).await.unwrap_err();

        assert!(matches!(err, StorageError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_absent_filter_is_empty() {
        let dir = tempfile::tempdir().unwrap();

        let filter = load_relevance_filter(&DataFiles::new(dir.path())).await;

        assert!(filter.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_filter_falls_back_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "relevant_descriptors.json", "{broken");

        let filter = load_relevance_filter(&DataFiles::new(dir.path())).await;

        assert!(filter.is_empty());
    }
}
