//! Eligibility engine
//!
//! Decides whether a driver may rent a vehicle. The checks run in a fixed
//! order and the first failure is the reason reported:
//!
//! 1. the licence belongs to the driver
//! 2. the driver has no active rental
//! 3. the licence is a full licence
//! 4. the vehicle's tank is full
//! 5. the driver is old enough for the size class
//! 6. the licence has been held long enough for the size class

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::rental_rules::{min_age, min_licence_years};
use crate::domain::entities::{Driver, DrivingLicence, SizeClass, Vehicle};

/// Why a rental was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "reason")]
pub enum RefusalReason {
    LicenceNotOwned,
    AlreadyRenting,
    ProvisionalLicence,
    TankNotFull,
    TooYoung { required: u32, actual: u32 },
    LicenceTooRecent { required: u32, actual: u32 },
    /// The fleet has no idle vehicle of that class with that registration
    VehicleUnavailable,
}

impl std::fmt::Display for RefusalReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RefusalReason::LicenceNotOwned => write!(f, "licence belongs to someone else"),
            RefusalReason::AlreadyRenting => write!(f, "driver already has a rental"),
            RefusalReason::ProvisionalLicence => write!(f, "licence is provisional"),
            RefusalReason::TankNotFull => write!(f, "vehicle tank is not full"),
            RefusalReason::TooYoung { required, actual } => {
                write!(f, "driver is {} but must be at least {}", actual, required)
            }
            RefusalReason::LicenceTooRecent { required, actual } => write!(
                f,
                "licence held for {} years but {} are required",
                actual, required
            ),
            RefusalReason::VehicleUnavailable => write!(f, "vehicle is not available"),
        }
    }
}

/// Result of evaluating the rule set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "decision")]
pub enum Eligibility {
    Eligible,
    Refused(RefusalReason),
}

impl Eligibility {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Eligibility::Eligible)
    }
}

/// Everything the rule set looks at, gathered by the caller
#[derive(Debug, Clone, Copy)]
pub struct EligibilityRequest<'a> {
    pub driver: &'a Driver,
    pub licence: &'a DrivingLicence,
    pub vehicle: &'a Vehicle,
    /// Whether the driver already holds an active rental
    pub has_active_rental: bool,
    pub today: NaiveDate,
}

/// Whole calendar years elapsed from `from` to `to`.
///
/// A year only counts once the anniversary has been reached, so someone
/// born on 29 February turns a year older on 1 March in common years.
/// Dates in the future give 0.
pub fn whole_years_between(from: NaiveDate, to: NaiveDate) -> u32 {
    if to <= from {
        return 0;
    }
    let mut years = to.year() - from.year();
    if (to.month(), to.day()) < (from.month(), from.day()) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}

/// Run the six checks in order
pub fn evaluate(request: &EligibilityRequest<'_>) -> Eligibility {
    use Eligibility::Refused;

    if !request.licence.belongs_to(request.driver) {
        return Refused(RefusalReason::LicenceNotOwned);
    }
    if request.has_active_rental {
        return Refused(RefusalReason::AlreadyRenting);
    }
    if !request.licence.is_full() {
        return Refused(RefusalReason::ProvisionalLicence);
    }
    if !request.vehicle.is_tank_full() {
        return Refused(RefusalReason::TankNotFull);
    }

    let class: SizeClass = request.vehicle.class();

    let age = whole_years_between(request.driver.date_of_birth(), request.today);
    let required_age = min_age(class);
    if age < required_age {
        return Refused(RefusalReason::TooYoung {
            required: required_age,
            actual: age,
        });
    }

    let held = whole_years_between(request.licence.issued_on(), request.today);
    let required_held = min_licence_years(class);
    if held < required_held {
        return Refused(RefusalReason::LicenceTooRecent {
            required: required_held,
            actual: held,
        });
    }

    Eligibility::Eligible
}
