//! Driving licence value object

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::driver::Driver;
use crate::error::DomainError;

/// Whether a licence permits unsupervised driving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenceKind {
    Full,
    Provisional,
}

impl LicenceKind {
    pub fn from_full_flag(full: bool) -> Self {
        if full {
            LicenceKind::Full
        } else {
            LicenceKind::Provisional
        }
    }

    pub fn is_full(self) -> bool {
        self == LicenceKind::Full
    }
}

impl std::fmt::Display for LicenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LicenceKind::Full => write!(f, "full"),
            LicenceKind::Provisional => write!(f, "provisional"),
        }
    }
}

impl std::str::FromStr for LicenceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" | "true" => Ok(LicenceKind::Full),
            "provisional" | "false" => Ok(LicenceKind::Provisional),
            _ => Err(format!("Unknown licence kind: {}", s)),
        }
    }
}

/// A driving licence held by one driver
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrivingLicence {
    owner: Driver,
    initials: String,
    issued_on: NaiveDate,
    serial: u8,
    kind: LicenceKind,
}

impl DrivingLicence {
    /// Build a licence for `owner`. `serial` is the two-digit number printed
    /// after the issue year and must be below 100.
    pub fn new(
        owner: Driver,
        issued_on: NaiveDate,
        serial: u8,
        kind: LicenceKind,
    ) -> Result<Self, DomainError> {
        if serial > 99 {
            return Err(DomainError::InvalidArgument(format!(
                "Licence serial must have two digits, got {}",
                serial
            )));
        }
        let initials = owner.initials();
        Ok(Self {
            owner,
            initials,
            issued_on,
            serial,
            kind,
        })
    }

    pub fn owner(&self) -> &Driver {
        &self.owner
    }

    pub fn initials(&self) -> &str {
        &self.initials
    }

    pub fn issued_on(&self) -> NaiveDate {
        self.issued_on
    }

    pub fn serial(&self) -> u8 {
        self.serial
    }

    pub fn kind(&self) -> LicenceKind {
        self.kind
    }

    pub fn is_full(&self) -> bool {
        self.kind.is_full()
    }

    /// Whether this licence was issued to `driver`
    pub fn belongs_to(&self, driver: &Driver) -> bool {
        &self.owner == driver
    }
}

impl std::fmt::Display for DrivingLicence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}-{:02}-{}",
            self.initials,
            self.issued_on.year(),
            self.serial,
            self.kind.is_full()
        )
    }
}
