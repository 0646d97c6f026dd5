//! Driver domain entity
//!
//! A driver is identified by first name, last name and date of birth.
//! `DriverRecord` is the one-line text form of a driver and their licence:
//!
//! ```text
//! Jonathan Carlton:27/09/1993:JC-2011-42-true
//! ```

use chrono::NaiveDate;
use serde::Serialize;

use super::licence::{DrivingLicence, LicenceKind};
use crate::error::{DomainError, ParseError};

/// Date format used in driver records
pub const RECORD_DATE_FORMAT: &str = "%d/%m/%Y";

/// A person who may rent a vehicle
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Driver {
    first_name: String,
    last_name: String,
    date_of_birth: NaiveDate,
}

impl Driver {
    pub fn new(
        first_name: &str,
        last_name: &str,
        date_of_birth: NaiveDate,
    ) -> Result<Self, DomainError> {
        let first_name = first_name.trim();
        let last_name = last_name.trim();

        if first_name.is_empty() {
            return Err(DomainError::InvalidArgument(
                "First name cannot be empty".to_string(),
            ));
        }
        if last_name.is_empty() {
            return Err(DomainError::InvalidArgument(
                "Last name cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            date_of_birth,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Upper-cased first letters of first and last name
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .take(1)
            .chain(self.last_name.chars().take(1))
            .collect::<String>()
            .to_uppercase()
    }
}

impl std::fmt::Display for Driver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} ({})",
            self.first_name,
            self.last_name,
            self.date_of_birth.format(RECORD_DATE_FORMAT)
        )
    }
}

/// Parse a `DD/MM/YYYY` date
pub fn parse_record_date(value: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(value.trim(), RECORD_DATE_FORMAT)
        .map_err(|_| ParseError::InvalidDate(value.to_string()))
}

/// A driver together with their licence, in record form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverRecord {
    pub driver: Driver,
    pub licence: DrivingLicence,
}

impl DriverRecord {
    pub fn new(licence: DrivingLicence) -> Self {
        Self {
            driver: licence.owner().clone(),
            licence,
        }
    }
}

impl std::fmt::Display for DriverRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}:{}:{}",
            self.driver.first_name(),
            self.driver.last_name(),
            self.driver.date_of_birth().format(RECORD_DATE_FORMAT),
            self.licence
        )
    }
}

impl std::str::FromStr for DriverRecord {
    type Err = ParseError;

    /// Only the year of the licence issue date survives the text form, so
    /// the parsed licence is dated 1 January of that year.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseError::InvalidRecord("empty record".to_string()));
        }

        let fields: Vec<&str> = s.split(':').collect();
        let [name, dob, licence] = fields.as_slice() else {
            return Err(ParseError::InvalidRecord(format!(
                "expected 3 ':'-separated fields in '{}'",
                s
            )));
        };

        let (first_name, last_name) = name.trim().split_once(' ').ok_or_else(|| {
            ParseError::InvalidRecord(format!("'{}' is not 'First Last'", name))
        })?;
        let driver = Driver::new(first_name, last_name, parse_record_date(dob)?)?;

        let parts: Vec<&str> = licence.trim().split('-').collect();
        let [initials, year, serial, full] = parts.as_slice() else {
            return Err(ParseError::InvalidRecord(format!(
                "'{}' is not a licence like 'JC-2011-42-true'",
                licence
            )));
        };

        if !initials.eq_ignore_ascii_case(&driver.initials()) {
            return Err(ParseError::InvalidRecord(format!(
                "licence initials '{}' do not match {}",
                initials,
                driver.full_name()
            )));
        }

        let year: i32 = year.parse()?;
        let issued_on = NaiveDate::from_ymd_opt(year, 1, 1)
            .ok_or_else(|| ParseError::InvalidRecord(format!("bad licence year {}", year)))?;
        if serial.len() != 2 || !serial.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidRecord(format!(
                "licence serial '{}' must have two digits",
                serial
            )));
        }
        let serial: u8 = serial.parse()?;
        let kind: LicenceKind = full.parse().map_err(ParseError::InvalidRecord)?;

        let licence = DrivingLicence::new(driver, issued_on, serial, kind)?;
        Ok(DriverRecord::new(licence))
    }
}
