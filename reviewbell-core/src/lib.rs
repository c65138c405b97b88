//! Reviewbell Core
//!
//! Core types and pure logic for the review status notifier.
//!
//! This crate contains:
//! - Domain types: cursor, work item records, status lexicon
//! - DTOs: the validated shape of a status endpoint response
//! - Formatting: turning a record into the message sent to the recipient
//!
//! Nothing in here performs I/O. HTTP lives in `reviewbell-client`,
//! the polling loop in `reviewbell-runner`.

pub mod domain;
pub mod dto;
pub mod error;
pub mod format;

pub use error::ValidationError;
pub use format::StatusFormatter;
