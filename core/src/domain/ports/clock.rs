//! Clock port
//!
//! Eligibility depends on "today". Services read it through this trait so
//! tests can pin the date.

use chrono::NaiveDate;

/// Source of the current calendar date
pub trait Clock: Send + Sync {
    /// Today's date
    fn today(&self) -> NaiveDate;
}
