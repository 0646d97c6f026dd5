//! Test utilities
//!
//! Manual port doubles and test fixtures for unit testing.
//!
//! The clock double is the real `FixedClock` adapter; the registration
//! source double below replays a scripted list of plates so tests can feed
//! the fleet duplicates and exhaustion on purpose.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
