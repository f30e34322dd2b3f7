//! Completion and deferral history.

/// Ids recorded as answered (`done`) and set aside (`marked`).
///
/// Both lists are append-only while a session runs and are written back
/// verbatim on quit, duplicates included. Membership checks treat a list as
/// a set.
#[derive(Debug, Clone, Default)]
pub struct ProgressState {
    /// Ids of answered questions, in recording order
    pub done: Vec<String>,

    /// Ids of questions set aside for later, in recording order
    pub marked: Vec<String>,
}

impl ProgressState {
    /// Create progress state from previously persisted id lists.
    pub fn new(done: Vec<String>, marked: Vec<String>) -> Self {
        Self { done, marked }
    }

    /// Whether the id has been recorded as done.
    pub fn is_done(&self, id: &str) -> bool {
        self.done.iter().any(|d| d == id)
    }

    /// Whether the id has been set aside.
    pub fn is_marked(&self, id: &str) -> bool {
        self.marked.iter().any(|m| m == id)
    }

    /// Record an id as done. Duplicates are kept.
    pub fn record_done(&mut self, id: impl Into<String>) {
        self.done.push(id.into());
    }

    /// Record an id as set aside. Duplicates are kept.
    pub fn record_marked(&mut self, id: impl Into<String>) {
        self.marked.push(id.into());
    }
}
