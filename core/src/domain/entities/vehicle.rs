//! Vehicle domain entity
//!
//! A fleet car with a fuel tank and a rental flag. The size class fixes
//! tank capacity and how distance converts into litres.

use serde::{Deserialize, Serialize};

use super::registration::Registration;
use crate::error::DomainError;

/// Litres of fuel
pub type Litres = i32;

/// Distance in kilometres
pub type Kilometres = i32;

/// Vehicle size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    Small,
    Large,
}

impl SizeClass {
    pub const ALL: [SizeClass; 2] = [SizeClass::Small, SizeClass::Large];

    /// Tank capacity in litres
    pub fn capacity(self) -> Litres {
        match self {
            SizeClass::Small => 49,
            SizeClass::Large => 60,
        }
    }

    pub fn consumption_rate(self) -> ConsumptionRate {
        match self {
            SizeClass::Small => ConsumptionRate::Flat { km_per_litre: 20 },
            SizeClass::Large => ConsumptionRate::Tiered {
                threshold_km: 50,
                first_km_per_litre: 10,
                rest_km_per_litre: 15,
            },
        }
    }

    /// Short tag used in the vehicle display form
    pub fn tag(self) -> char {
        match self {
            SizeClass::Small => 'S',
            SizeClass::Large => 'L',
        }
    }
}

impl std::fmt::Display for SizeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SizeClass::Small => write!(f, "small"),
            SizeClass::Large => write!(f, "large"),
        }
    }
}

impl std::str::FromStr for SizeClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "small" | "s" => Ok(SizeClass::Small),
            "large" | "l" => Ok(SizeClass::Large),
            _ => Err(format!("Unknown size class: {}", s)),
        }
    }
}

/// Distance-to-fuel conversion table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsumptionRate {
    /// One litre per `km_per_litre`, whole litres only
    Flat { km_per_litre: Kilometres },
    /// The first `threshold_km` at one rate, everything after at another
    Tiered {
        threshold_km: Kilometres,
        first_km_per_litre: Kilometres,
        rest_km_per_litre: Kilometres,
    },
}

impl ConsumptionRate {
    /// Litres needed to cover `distance` (non-negative)
    pub fn litres_for(self, distance: Kilometres) -> Litres {
        match self {
            ConsumptionRate::Flat { km_per_litre } => distance / km_per_litre,
            ConsumptionRate::Tiered {
                threshold_km,
                first_km_per_litre,
                rest_km_per_litre,
            } => {
                if distance <= threshold_km {
                    return distance / first_km_per_litre;
                }
                let first = threshold_km / first_km_per_litre;
                // Any distance past the threshold costs at least one litre.
                let rest = ((distance - threshold_km) / rest_km_per_litre).max(1);
                first + rest
            }
        }
    }
}

/// Rental state of a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleState {
    Idle,
    Rented,
}

impl std::fmt::Display for VehicleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VehicleState::Idle => write!(f, "idle"),
            VehicleState::Rented => write!(f, "rented"),
        }
    }
}

/// A fleet vehicle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vehicle {
    registration: Registration,
    class: SizeClass,
    fuel: Litres,
    rented: bool,
}

impl Vehicle {
    /// A new idle vehicle with a full tank
    pub fn new(registration: Registration, class: SizeClass) -> Self {
        Self {
            registration,
            class,
            fuel: class.capacity(),
            rented: false,
        }
    }

    pub fn registration(&self) -> &Registration {
        &self.registration
    }

    pub fn class(&self) -> SizeClass {
        self.class
    }

    pub fn capacity(&self) -> Litres {
        self.class.capacity()
    }

    pub fn fuel(&self) -> Litres {
        self.fuel
    }

    pub fn is_tank_full(&self) -> bool {
        self.fuel == self.capacity()
    }

    pub fn is_rented(&self) -> bool {
        self.rented
    }

    pub fn state(&self) -> VehicleState {
        if self.rented {
            VehicleState::Rented
        } else {
            VehicleState::Idle
        }
    }

    /// Litres needed to bring the tank back to full
    pub fn refill_deficit(&self) -> Litres {
        self.capacity() - self.fuel
    }

    /// Add fuel, clamped at capacity.
    ///
    /// Returns the litres actually absorbed. Anything past capacity is
    /// discarded.
    pub fn add_fuel(&mut self, amount: Litres) -> Result<Litres, DomainError> {
        if amount < 0 {
            return Err(DomainError::InvalidArgument(format!(
                "Cannot add a negative amount of fuel: {}",
                amount
            )));
        }
        if self.is_tank_full() {
            return Ok(0);
        }

        let absorbed = amount.min(self.refill_deficit());
        self.fuel += absorbed;
        Ok(absorbed)
    }

    /// Take fuel out of the tank.
    ///
    /// When more is requested than the tank holds, the tank is emptied and
    /// the litres that were actually there are returned.
    pub fn use_fuel(&mut self, amount: Litres) -> Result<Litres, DomainError> {
        if amount < 0 {
            return Err(DomainError::InvalidArgument(format!(
                "Cannot use a negative amount of fuel: {}",
                amount
            )));
        }

        let used = amount.min(self.fuel);
        self.fuel -= used;
        Ok(used)
    }

    /// Drive `distance` km and burn the matching fuel.
    ///
    /// Only allowed while rented and with fuel in the tank. Returns the
    /// litres consumed.
    pub fn drive(&mut self, distance: Kilometres) -> Result<Litres, DomainError> {
        if distance < 0 {
            return Err(DomainError::InvalidArgument(format!(
                "Cannot drive a negative distance: {}",
                distance
            )));
        }
        if self.fuel < 1 {
            return Err(DomainError::InvalidState(format!(
                "{} has no fuel",
                self.registration
            )));
        }
        if !self.rented {
            return Err(DomainError::InvalidState(format!(
                "{} has not been rented",
                self.registration
            )));
        }

        let litres = self.class.consumption_rate().litres_for(distance);
        self.use_fuel(litres)
    }

    /// Set the rented flag.
    ///
    /// A vehicle only goes out on a full tank: `set_rented(true)` leaves the
    /// flag untouched otherwise.
    pub fn set_rented(&mut self, rented: bool) {
        if rented && !self.is_tank_full() {
            tracing::debug!(
                registration = %self.registration,
                fuel = self.fuel,
                "Refusing to mark vehicle rented without a full tank"
            );
            return;
        }
        self.rented = rented;
    }
}

impl std::fmt::Display for Vehicle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.registration, self.class.tag())
    }
}
