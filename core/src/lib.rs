//! carhire core
//!
//! Rental fleet model: vehicles with a fuel tank state machine, drivers and
//! licences, the eligibility rules that decide who may rent what, and the
//! rental ledger that issues and terminates rentals.
//! Uses a hexagonal (ports & adapters) layout like the rest of the workspace.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;

#[cfg(test)]
mod test_utils;


pub use adapters::{CanonicalRegistrations, FixedClock, RandomRegistrations, SystemClock};
pub use app::{
    Eligibility, Fleet, IssueOutcome, LicenceRegistry, RefusalReason, RentalService,
};
pub use config::{Config, PlateSource};
pub use domain::entities::{
    Driver, DriverRecord, DrivingLicence, LicenceKind, Registration, SizeClass, Vehicle,
};
pub use domain::ports::{Clock, RegistrationSource};
pub use error::{ConfigError, DomainError, ParseError};
