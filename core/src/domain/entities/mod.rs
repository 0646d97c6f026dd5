//! Domain entities
//!
//! Pure domain models for the rental fleet: vehicles and their plates,
//! drivers and their licences.

pub mod driver;
pub mod licence;
pub mod registration;
pub mod vehicle;

pub use driver::{parse_record_date, Driver, DriverRecord, RECORD_DATE_FORMAT};
pub use licence::{DrivingLicence, LicenceKind};
pub use registration::Registration;
pub use vehicle::{ConsumptionRate, Kilometres, Litres, SizeClass, Vehicle, VehicleState};
