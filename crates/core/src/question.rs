//! Question and catalog models.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A study question from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier
    pub id: String,

    /// Title shown when the question is handed out
    pub title: String,

    /// Topic descriptors this question is tagged with
    pub descriptors: Vec<String>,

    /// Link to the slide deck covering this question
    #[serde(rename = "beamer_link")]
    pub link: String,
}

impl Question {
    /// Whether this question carries the given descriptor.
    pub fn has_descriptor(&self, descriptor: &str) -> bool {
        self.descriptors.iter().any(|d| d == descriptor)
    }

    /// Descriptors of this question that pass the filter. Every descriptor
    /// passes when the filter is empty.
    pub fn relevant_descriptors<'a>(&'a self, filter: &RelevanceFilter) -> Vec<&'a str> {
        if filter.is_empty() {
            self.descriptors.iter().map(String::as_str).collect()
        } else {
            self.descriptors
                .iter()
                .map(String::as_str)
                .filter(|d| filter.contains(d))
                .collect()
        }
    }

    /// Whether this question participates in completion accounting under the
    /// filter: always when the filter is empty, otherwise only when at least
    /// one of its descriptors is in the filter.
    pub fn is_relevant(&self, filter: &RelevanceFilter) -> bool {
        filter.is_empty() || self.descriptors.iter().any(|d| filter.contains(d))
    }
}

/// The ordered question list loaded at startup, together with the relevance
/// filter applied to it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    questions: Vec<Question>,
    relevance: RelevanceFilter,
}

impl Catalog {
    /// Create a catalog from the loaded question list and filter.
    pub fn new(questions: Vec<Question>, relevance: RelevanceFilter) -> Self {
        Self { questions, relevance }
    }

    /// Questions in their original file order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// The relevance filter in effect for this catalog.
    pub fn relevance(&self) -> &RelevanceFilter {
        &self.relevance
    }

    /// Number of questions in the catalog.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the catalog holds no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Optional allow-set of descriptors the user currently cares about.
///
/// An empty filter disables filtering entirely.
#[derive(Debug, Clone, Default)]
pub struct RelevanceFilter {
    descriptors: HashSet<String>,
}

impl RelevanceFilter {
    /// Build a filter from descriptor names.
    pub fn new(descriptors: impl IntoIterator<Item = String>) -> Self {
        Self {
            descriptors: descriptors.into_iter().collect(),
        }
    }

    /// Whether the filter is empty (filtering disabled).
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Whether the descriptor is in the filter set.
    pub fn contains(&self, descriptor: &str) -> bool {
        self.descriptors.contains(descriptor)
    }
}
