//! Per-descriptor completion accounting.

use std::collections::{HashMap, HashSet};

use qbank_core::{Catalog, ProgressState};

/// Completion counts per descriptor plus overall question totals.
#[derive(Debug, Clone, Default)]
pub struct DescriptorCounts {
    totals: HashMap<String, usize>,
    done: HashMap<String, usize>,
    ratios: HashMap<String, f64>,
    total_questions: usize,
    done_questions: usize,
}

impl DescriptorCounts {
    /// Count questions and descriptors for the catalog under its relevance
    /// filter.
    ///
    /// A question is counted only when it passes the filter. Its counted
    /// descriptors are those present in the filter, or all of them when the
    /// filter is empty. The overall question totals are unique by id;
    /// descriptor totals follow the catalog rows. Duplicate entries in the
    /// done list have no effect beyond the first.
    pub fn tally(catalog: &Catalog, progress: &ProgressState) -> Self {
        let done_ids: HashSet<&str> = progress.done.iter().map(String::as_str).collect();

        let mut totals: HashMap<String, usize> = HashMap::new();
        let mut done: HashMap<String, usize> = HashMap::new();
        let mut seen_ids: HashSet<&str> = HashSet::new();
        let mut total_questions = 0;
        let mut done_questions = 0;

        for question in catalog.questions() {
            if !question.is_relevant(catalog.relevance()) {
                continue;
            }

            let is_done = done_ids.contains(question.id.as_str());
            if seen_ids.insert(question.id.as_str()) {
                total_questions += 1;
                if is_done {
                    done_questions += 1;
                }
            }

            for descriptor in question.relevant_descriptors(catalog.relevance()) {
                *totals.entry(descriptor.to_string()).or_insert(0) += 1;
                if is_done {
                    *done.entry(descriptor.to_string()).or_insert(0) += 1;
                }
            }
        }

        let ratios = totals
            .iter()
            .map(|(descriptor, &total)| {
                let done_count = done.get(descriptor).copied().unwrap_or(0);
                let ratio = if total > 0 {
                    done_count as f64 / total as f64
                } else {
                    0.0
                };
                (descriptor.clone(), ratio)
            })
            .collect();

        Self {
            totals,
            done,
            ratios,
            total_questions,
            done_questions,
        }
    }

    /// Counted questions, unique by id.
    pub fn total_questions(&self) -> usize {
        self.total_questions
    }

    /// Counted questions recorded as done, unique by id.
    pub fn done_questions(&self) -> usize {
        self.done_questions
    }

    /// Catalog rows counted for the descriptor.
    pub fn total(&self, descriptor: &str) -> usize {
        self.totals.get(descriptor).copied().unwrap_or(0)
    }

    /// Done rows counted for the descriptor.
    pub fn done_count(&self, descriptor: &str) -> usize {
        self.done.get(descriptor).copied().unwrap_or(0)
    }

    /// Completion ratio for the descriptor, `0` when it was never counted.
    pub fn ratio(&self, descriptor: &str) -> f64 {
        self.ratios.get(descriptor).copied().unwrap_or(0.0)
    }

    /// Done ratio across all counted questions.
    pub fn overall_ratio(&self) -> f64 {
        if self.total_questions > 0 {
            self.done_questions as f64 / self.total_questions as f64
        } else {
            0.0
        }
    }

    /// Whether nothing was counted.
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Counted descriptor names, in no particular order.
    pub fn descriptors(&self) -> impl Iterator<Item = &str> {
        self.totals.keys().map(String::as_str)
    }
}
