//! Adapters layer
//!
//! Implementations of port traits for the host system and plate supply.

pub mod plates;
pub mod system;

pub use plates::{CanonicalRegistrations, RandomRegistrations, CANONICAL_PLATES};
pub use system::{FixedClock, SystemClock};
