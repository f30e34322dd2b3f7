//! File-backed persistence for the question bank.
//!
//! This crate loads the read-only catalog files and owns the two progress
//! id lists that are written back at the end of a session.

#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod files;
pub mod progress;

pub use catalog::{load_catalog, load_questions, load_relevance_filter};
pub use error::{Result, StorageError};
pub use files::DataFiles;
pub use progress::{JsonProgressStore, ProgressStore};
