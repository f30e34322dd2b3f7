//! Core data models for the question bank.
//!
//! This crate defines the domain types shared by the storage, ranking,
//! and session layers.

#![warn(missing_docs)]

// Question catalog
mod question;

// Completion tracking
mod progress;

// Re-exports
pub use question::{Catalog, Question, RelevanceFilter};
pub use progress::ProgressState;
