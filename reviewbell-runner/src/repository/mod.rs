//! Repository layer
//!
//! Repositories are stateless wrappers around the HTTP clients. They give
//! the poller a narrow, trait-based view of the status endpoint so it can
//! be exercised with in-memory doubles.

mod statuses;

// Re-export traits
pub use statuses::StatusRepository;

// Re-export implementations
pub use statuses::HttpStatusRepository;
