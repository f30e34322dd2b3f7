//! Interactive session control.
//!
//! The session owns the loaded catalog and progress state, dispatches line
//! commands, and persists progress when the user quits.

#![warn(missing_docs)]

pub mod command;
pub mod controller;
pub mod error;

pub use command::Command;
pub use controller::Session;
pub use error::{Result, SessionError};
