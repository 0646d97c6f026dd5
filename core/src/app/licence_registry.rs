//! Licence registry
//!
//! Issues driving licences and remembers them, so each driver identity
//! holds exactly one licence for the lifetime of the registry.

use std::collections::HashMap;

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::entities::{Driver, DriverRecord, DrivingLicence, LicenceKind};
use crate::error::DomainError;

/// Memoizing licence factory keyed by driver identity
#[derive(Debug)]
pub struct LicenceRegistry {
    licences: HashMap<Driver, DrivingLicence>,
    rng: StdRng,
}

impl LicenceRegistry {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Registry with reproducible licence serials
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            licences: HashMap::new(),
            rng,
        }
    }

    /// The licence for `driver`, issuing one on first request.
    ///
    /// Later calls for the same driver return the stored licence and ignore
    /// `issued_on` and `kind`.
    pub fn issue(
        &mut self,
        driver: &Driver,
        issued_on: NaiveDate,
        kind: LicenceKind,
    ) -> Result<DrivingLicence, DomainError> {
        if let Some(existing) = self.licences.get(driver) {
            tracing::debug!(driver = %driver, licence = %existing, "Returning existing licence");
            return Ok(existing.clone());
        }

        if issued_on < driver.date_of_birth() {
            return Err(DomainError::InvalidArgument(format!(
                "Licence issue date {} is before {} was born",
                issued_on, driver
            )));
        }

        let serial: u8 = self.rng.gen_range(0..100);
        let licence = DrivingLicence::new(driver.clone(), issued_on, serial, kind)?;
        tracing::info!(driver = %driver, licence = %licence, "Issued driving licence");

        self.licences.insert(driver.clone(), licence.clone());
        Ok(licence)
    }

    /// Register a licence reconstructed from a driver record.
    ///
    /// If the driver already holds a licence, that one wins.
    pub fn adopt(&mut self, record: DriverRecord) -> DrivingLicence {
        self.licences
            .entry(record.driver)
            .or_insert(record.licence)
            .clone()
    }

    /// The stored licence for `driver`, if any
    pub fn get(&self, driver: &Driver) -> Option<&DrivingLicence> {
        self.licences.get(driver)
    }

    /// Look a driver up by name, case-insensitively
    pub fn find_by_name(&self, first_name: &str, last_name: &str) -> Vec<&Driver> {
        self.licences
            .keys()
            .filter(|d| {
                d.first_name().eq_ignore_ascii_case(first_name)
                    && d.last_name().eq_ignore_ascii_case(last_name)
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.licences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.licences.is_empty()
    }
}

impl Default for LicenceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
