//! Fleet registry
//!
//! Owns every vehicle the company has. Vehicles are kept in the order they
//! were added and looked up by registration.

use std::collections::HashMap;

use crate::adapters::CanonicalRegistrations;
use crate::app::rental_rules::{CANONICAL_LARGE_COUNT, CANONICAL_SMALL_COUNT};
use crate::domain::entities::{Registration, SizeClass, Vehicle};
use crate::domain::ports::RegistrationSource;
use crate::error::DomainError;

/// The set of vehicles owned by the company
#[derive(Debug, Clone, Default)]
pub struct Fleet {
    vehicles: Vec<Vehicle>,
    index: HashMap<Registration, usize>,
}

impl Fleet {
    /// Build a fleet from explicit vehicles. Registrations must be unique.
    pub fn new(vehicles: impl IntoIterator<Item = Vehicle>) -> Result<Self, DomainError> {
        let mut fleet = Self::default();
        for vehicle in vehicles {
            fleet.add(vehicle)?;
        }
        Ok(fleet)
    }

    /// Build `large` large vehicles followed by `small` small ones, drawing
    /// plates from `source`
    pub fn from_source<S>(source: &mut S, large: usize, small: usize) -> Result<Self, DomainError>
    where
        S: RegistrationSource + ?Sized,
    {
        let needed = large.checked_add(small).ok_or_else(|| {
            DomainError::InvalidArgument(format!(
                "A fleet of {} large and {} small vehicles is too large",
                large, small
            ))
        })?;

        if let Some(remaining) = source.remaining() {
            if remaining < needed {
                return Err(DomainError::InvalidArgument(format!(
                    "Plate source has {} plates left but the fleet needs {}",
                    remaining, needed
                )));
            }
        }

        let mut fleet = Self::default();
        let classes = std::iter::repeat(SizeClass::Large)
            .take(large)
            .chain(std::iter::repeat(SizeClass::Small).take(small));
        for class in classes {
            let registration = source.next_registration()?;
            fleet.add(Vehicle::new(registration, class))?;
        }

        tracing::debug!(large, small, "Built fleet");
        Ok(fleet)
    }

    /// The reference fleet: 10 large and 20 small vehicles on the
    /// canonical plates
    pub fn canonical() -> Result<Self, DomainError> {
        Self::from_source(
            &mut CanonicalRegistrations::new(),
            CANONICAL_LARGE_COUNT,
            CANONICAL_SMALL_COUNT,
        )
    }

    fn add(&mut self, vehicle: Vehicle) -> Result<(), DomainError> {
        if self.index.contains_key(vehicle.registration()) {
            return Err(DomainError::InvalidArgument(format!(
                "Duplicate registration {}",
                vehicle.registration()
            )));
        }
        self.index
            .insert(vehicle.registration().clone(), self.vehicles.len());
        self.vehicles.push(vehicle);
        Ok(())
    }

    pub fn get(&self, registration: &Registration) -> Option<&Vehicle> {
        self.index.get(registration).map(|&i| &self.vehicles[i])
    }

    pub fn get_mut(&mut self, registration: &Registration) -> Option<&mut Vehicle> {
        match self.index.get(registration) {
            Some(&i) => self.vehicles.get_mut(i),
            None => None,
        }
    }

    /// The idle vehicle of `class` with `registration`, if there is one
    pub fn find_available_mut(
        &mut self,
        registration: &Registration,
        class: SizeClass,
    ) -> Option<&mut Vehicle> {
        self.get_mut(registration)
            .filter(|v| v.class() == class && !v.is_rented())
    }

    /// Every vehicle, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.iter()
    }

    /// Vehicles currently out on rental
    pub fn rented(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.iter().filter(|v| v.is_rented())
    }

    /// Number of idle vehicles of `class`
    pub fn available_count(&self, class: SizeClass) -> usize {
        self.vehicles
            .iter()
            .filter(|v| v.class() == class && !v.is_rented())
            .count()
    }

    /// Number of vehicles of `class`, rented or not
    pub fn count(&self, class: SizeClass) -> usize {
        self.vehicles.iter().filter(|v| v.class() == class).count()
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}
