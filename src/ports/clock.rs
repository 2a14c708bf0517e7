//! Clock port.

use chrono::{DateTime, Utc};

/// Source of "now", used to report how old an issue is.
pub trait Clock: Send + Sync {
    /// Current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}
