//! System adapter
//!
//! Clock implementations backed by the host clock or a fixed date.

pub mod clock;

pub use clock::{FixedClock, SystemClock};
