//! Rental service
//!
//! The rental ledger: binds drivers to vehicles, runs the eligibility
//! engine before every issue and settles fuel on termination. The service
//! owns the fleet, so every change to a vehicle's rented flag goes through
//! here.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use super::eligibility::{evaluate, Eligibility, EligibilityRequest, RefusalReason};
use super::fleet::Fleet;
use crate::domain::entities::{
    Driver, DrivingLicence, Kilometres, Litres, Registration, SizeClass, Vehicle,
};
use crate::domain::ports::Clock;
use crate::error::DomainError;

/// Result of asking for a vehicle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum IssueOutcome {
    Issued { registration: Registration },
    Refused { reason: RefusalReason },
}

impl IssueOutcome {
    pub fn is_issued(&self) -> bool {
        matches!(self, IssueOutcome::Issued { .. })
    }
}

/// Service owning the fleet and the active rentals
pub struct RentalService<C>
where
    C: Clock,
{
    fleet: Fleet,
    rentals: HashMap<Driver, Registration>,
    clock: Arc<C>,
}

impl<C> RentalService<C>
where
    C: Clock,
{
    pub fn new(fleet: Fleet, clock: Arc<C>) -> Self {
        Self {
            fleet,
            rentals: HashMap::new(),
            clock,
        }
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// The date eligibility is judged against
    pub fn today(&self) -> chrono::NaiveDate {
        self.clock.today()
    }

    /// Idle vehicles of `class`
    pub fn available_count(&self, class: SizeClass) -> usize {
        self.fleet.available_count(class)
    }

    /// Idle vehicles of the class called `name`.
    ///
    /// Returns `None` when `name` is not a known size class.
    pub fn available_count_by_name(&self, name: &str) -> Option<usize> {
        name.parse::<SizeClass>()
            .ok()
            .map(|class| self.available_count(class))
    }

    /// Vehicles currently out on rental, recomputed on every call
    pub fn rented_vehicles(&self) -> impl Iterator<Item = &Vehicle> {
        self.fleet.rented()
    }

    /// Active rentals as (driver, registration) pairs
    pub fn active_rentals(&self) -> impl Iterator<Item = (&Driver, &Registration)> {
        self.rentals.iter()
    }

    pub fn has_rental(&self, driver: &Driver) -> bool {
        self.rentals.contains_key(driver)
    }

    /// The vehicle rented by `driver`
    pub fn vehicle_of(&self, driver: &Driver) -> Result<&Vehicle, DomainError> {
        self.rentals
            .get(driver)
            .and_then(|registration| self.fleet.get(registration))
            .ok_or_else(|| not_renting(driver))
    }

    /// Mutable access to the vehicle rented by `driver`, for driving
    pub fn vehicle_of_mut(&mut self, driver: &Driver) -> Result<&mut Vehicle, DomainError> {
        match self.rentals.get(driver) {
            Some(registration) => self
                .fleet
                .get_mut(registration)
                .ok_or_else(|| not_renting(driver)),
            None => Err(not_renting(driver)),
        }
    }

    /// Issue `vehicle` to `driver`. Returns whether the rental went ahead.
    pub fn issue(&mut self, driver: &Driver, licence: &DrivingLicence, vehicle: &Vehicle) -> bool {
        self.issue_with_outcome(driver, licence, vehicle).is_issued()
    }

    /// Issue `vehicle` to `driver`, reporting why if it was refused.
    ///
    /// `vehicle` only says which vehicle is wanted. The rules read its class
    /// and tank, but the rental is made on the fleet's own vehicle with the
    /// same registration and class, which must be idle.
    pub fn issue_with_outcome(
        &mut self,
        driver: &Driver,
        licence: &DrivingLicence,
        vehicle: &Vehicle,
    ) -> IssueOutcome {
        let request = EligibilityRequest {
            driver,
            licence,
            vehicle,
            has_active_rental: self.has_rental(driver),
            today: self.clock.today(),
        };

        if let Eligibility::Refused(reason) = evaluate(&request) {
            return refuse(driver, vehicle, reason);
        }

        let registration = vehicle.registration();
        if self.rentals.values().any(|bound| bound == registration) {
            return refuse(driver, vehicle, RefusalReason::VehicleUnavailable);
        }

        let Some(fleet_vehicle) = self.fleet.find_available_mut(registration, vehicle.class())
        else {
            return refuse(driver, vehicle, RefusalReason::VehicleUnavailable);
        };

        fleet_vehicle.set_rented(true);
        if !fleet_vehicle.is_rented() {
            return refuse(driver, vehicle, RefusalReason::TankNotFull);
        }

        self.rentals.insert(driver.clone(), registration.clone());
        tracing::info!(driver = %driver, vehicle = %vehicle, "Issued vehicle");

        IssueOutcome::Issued {
            registration: registration.clone(),
        }
    }

    /// End the rental held by `driver`.
    ///
    /// Returns the litres needed to refill the vehicle, or `None` if the
    /// driver had no rental.
    pub fn terminate(&mut self, driver: &Driver) -> Option<Litres> {
        let Some(registration) = self.rentals.remove(driver) else {
            tracing::debug!(driver = %driver, "No rental to terminate");
            return None;
        };

        let vehicle = self.fleet.get_mut(&registration)?;
        vehicle.set_rented(false);
        let deficit = vehicle.refill_deficit();

        tracing::info!(
            driver = %driver,
            vehicle = %vehicle,
            deficit,
            "Terminated rental"
        );
        Some(deficit)
    }

    /// Drive the vehicle rented by `driver`, returning the litres used
    pub fn drive(&mut self, driver: &Driver, distance: Kilometres) -> Result<Litres, DomainError> {
        let vehicle = self.vehicle_of_mut(driver)?;
        match vehicle.drive(distance) {
            Ok(litres) => Ok(litres),
            Err(e) => {
                tracing::warn!(vehicle = %vehicle, distance, error = %e, "Drive rejected");
                Err(e)
            }
        }
    }

    /// Put fuel into a fleet vehicle, returning the litres absorbed
    pub fn refuel(
        &mut self,
        registration: &Registration,
        amount: Litres,
    ) -> Result<Litres, DomainError> {
        let vehicle = self
            .fleet
            .get_mut(registration)
            .ok_or_else(|| DomainError::NotFound(format!("No vehicle {}", registration)))?;
        let absorbed = vehicle.add_fuel(amount)?;
        tracing::debug!(vehicle = %vehicle, absorbed, fuel = vehicle.fuel(), "Refuelled");
        Ok(absorbed)
    }
}

fn not_renting(driver: &Driver) -> DomainError {
    DomainError::NotFound(format!("{} has no active rental", driver))
}

fn refuse(driver: &Driver, vehicle: &Vehicle, reason: RefusalReason) -> IssueOutcome {
    tracing::debug!(driver = %driver, vehicle = %vehicle, %reason, "Refused rental");
    IssueOutcome::Refused { reason }
}
