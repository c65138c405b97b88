//! Data Transfer Objects
//!
//! Shapes of data received from the status endpoint once they have passed
//! structural validation.

pub mod status;

pub use status::{StatusPage, validate_response};
