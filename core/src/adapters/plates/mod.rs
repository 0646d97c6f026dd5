//! Registration plate adapters
//!
//! Implementations of `RegistrationSource`: the fixed reference list and a
//! random generator.

pub mod canonical;
pub mod random;

pub use canonical::{CanonicalRegistrations, CANONICAL_PLATES};
pub use random::RandomRegistrations;
