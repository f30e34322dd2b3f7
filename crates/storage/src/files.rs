//! Well-known data file locations.

use std::path::{Path, PathBuf};

/// File holding the question catalog.
pub const QUESTIONS_FILE: &str = "questions.json";

/// File holding the relevance filter, if the user created one.
pub const RELEVANT_DESCRIPTORS_FILE: &str = "relevant_descriptors.json";

/// File holding the done-question id list.
pub const DONE_QUESTIONS_FILE: &str = "done_questions.json";

/// File holding the marked-question id list.
pub const MARKED_QUESTIONS_FILE: &str = "marked_questions.json";

/// The four data file paths, resolved against a base directory.
#[derive(Debug, Clone)]
pub struct DataFiles {
    questions: PathBuf,
    relevant_descriptors: PathBuf,
    done_questions: PathBuf,
    marked_questions: PathBuf,
}

impl DataFiles {
    /// Resolve the well-known file names against `base`.
    pub fn new(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        Self {
            questions: base.join(QUESTIONS_FILE),
            relevant_descriptors: base.join(RELEVANT_DESCRIPTORS_FILE),
            done_questions: base.join(DONE_QUESTIONS_FILE),
            marked_questions: base.join(MARKED_QUESTIONS_FILE),
        }
    }

    /// Path of the question catalog.
    pub fn questions(&self) -> &Path {
        &self.questions
    }

    /// Path of the relevance filter.
    pub fn relevant_descriptors(&self) -> &Path {
        &self.relevant_descriptors
    }

    /// Path of the done-question list.
    pub fn done_questions(&self) -> &Path {
        &self.done_questions
    }

    /// Path of the marked-question list.
    pub fn marked_questions(&self) -> &Path {
        &self.marked_questions
    }
}

impl Default for DataFiles {
    /// Files in the current working directory.
    fn default() -> Self {
        Self::new(".")
    }
}
