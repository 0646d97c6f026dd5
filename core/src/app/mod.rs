//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports and the fleet.

pub mod eligibility;
pub mod fleet;
pub mod licence_registry;
pub mod rental_rules;
pub mod rental_service;

pub use eligibility::{
    evaluate, whole_years_between, Eligibility, EligibilityRequest, RefusalReason,
};
pub use fleet::Fleet;
pub use licence_registry::LicenceRegistry;
pub use rental_rules::{min_age, min_licence_years};
pub use rental_service::{IssueOutcome, RentalService};
