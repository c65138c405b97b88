//! Poll cursor

use serde::{Deserialize, Serialize};
use std::fmt;

/// Point in time (seconds since epoch) from which the next poll fetches
///
/// After startup the cursor only ever takes values the server returned
/// as `current_date`. It is never incremented locally and never moves
/// backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(i64);

impl Cursor {
    pub fn new(seconds: i64) -> Self {
        Self(seconds)
    }

    /// Cursor positioned at the current wall-clock time
    pub fn now() -> Self {
        Self(chrono::Utc::now().timestamp())
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Moves the cursor to a server-issued `current_date`
    ///
    /// Returns `false` and leaves the cursor untouched when `current_date`
    /// lies behind it.
    pub fn advance_to(&mut self, current_date: i64) -> bool {
        if current_date < self.0 {
            return false;
        }
        self.0 = current_date;
        true
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
