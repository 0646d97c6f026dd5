//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models representing core business concepts
//! - `ports`: Trait definitions for things the domain needs from outside
//!   (the current date, a supply of registration plates)

pub mod entities;
pub mod ports;
