//! Core domain types
//!
//! These types describe what the notifier tracks: the server-issued cursor,
//! the work item whose review status changes, and the lexicon that turns
//! status codes into verdicts.

pub mod cursor;
pub mod homework;

pub use cursor::Cursor;
pub use homework::{StatusLexicon, WorkItemRecord};
