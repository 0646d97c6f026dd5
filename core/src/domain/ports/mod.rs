//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod clock;
pub mod registrations;

pub use clock::Clock;
pub use registrations::RegistrationSource;
