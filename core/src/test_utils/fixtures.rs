//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::adapters::FixedClock;
use crate::app::{Fleet, RentalService};
use crate::domain::entities::{
    Driver, DrivingLicence, LicenceKind, Registration, SizeClass, Vehicle,
};

/// Shorthand for a calendar date
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Create a test driver
pub fn test_driver(first_name: &str, last_name: &str, date_of_birth: NaiveDate) -> Driver {
    Driver::new(first_name, last_name, date_of_birth).unwrap()
}

/// Create a licence owned by `driver` with serial 42
pub fn test_licence(driver: &Driver, issued_on: NaiveDate, kind: LicenceKind) -> DrivingLicence {
    DrivingLicence::new(driver.clone(), issued_on, 42, kind).unwrap()
}

/// Create an idle, full vehicle
pub fn test_vehicle(first: &str, second: &str, class: SizeClass) -> Vehicle {
    Vehicle::new(Registration::new(first, second).unwrap(), class)
}

/// The driver used throughout the reference scenario: born 27/09/1993,
/// full licence since 28/06/2011
pub fn reference_driver() -> (Driver, DrivingLicence) {
    let driver = test_driver("Jonathan", "Carlton", date(1993, 9, 27));
    let licence = test_licence(&driver, date(2011, 6, 28), LicenceKind::Full);
    (driver, licence)
}

/// Rental service over the canonical fleet with today pinned
pub fn canonical_service(today: NaiveDate) -> RentalService<FixedClock> {
    RentalService::new(
        Fleet::canonical().unwrap(),
        Arc::new(FixedClock::new(today)),
    )
}
