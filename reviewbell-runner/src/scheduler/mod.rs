//! Scheduler layer for the runner
//!
//! This layer owns the polling loop: it decides when to poll, what counts
//! as news worth telling the recipient, and how to report its own failures
//! without flooding the chat.

pub mod poller;

pub use poller::StatusPoller;
