//! The reference plate list
//!
//! Thirty fixed plates. Built in order, the first ten go to large
//! vehicles and the remaining twenty to small ones.

use crate::domain::entities::Registration;
use crate::domain::ports::RegistrationSource;
use crate::error::DomainError;

/// Plates of the reference fleet, in issue order
pub const CANONICAL_PLATES: [(&str, &str); 30] = [
    ("FP61", "RVG"),
    ("YN56", "QPI"),
    ("TP00", "QQJ"),
    ("TM02", "RQW"),
    ("DI00", "LRB"),
    ("FP12", "SBJ"),
    ("SS61", "RJK"),
    ("IA52", "XCY"),
    ("OD96", "ZEC"),
    ("HK11", "KMG"),
    ("NE49", "WQH"),
    ("PJ53", "TEV"),
    ("XL92", "HNQ"),
    ("BM84", "CRS"),
    ("HN33", "BMR"),
    ("SE61", "RLU"),
    ("AA78", "OGG"),
    ("KA16", "UAR"),
    ("QU02", "MWE"),
    ("ZW80", "YGG"),
    ("WN38", "AZM"),
    ("KE34", "YED"),
    ("VD35", "VXB"),
    ("KD76", "ORG"),
    ("SP01", "HOM"),
    ("JD46", "XLK"),
    ("RI87", "XGK"),
    ("QI85", "GJY"),
    ("NE32", "ASW"),
    ("DZ61", "LFK"),
];

/// Hands out `CANONICAL_PLATES` in order
#[derive(Debug, Clone, Default)]
pub struct CanonicalRegistrations {
    next: usize,
}

impl CanonicalRegistrations {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RegistrationSource for CanonicalRegistrations {
    fn next_registration(&mut self) -> Result<Registration, DomainError> {
        let (first, second) = CANONICAL_PLATES.get(self.next).ok_or_else(|| {
            DomainError::NotFound(format!(
                "All {} canonical plates have been issued",
                CANONICAL_PLATES.len()
            ))
        })?;
        self.next += 1;
        Registration::new(first, second)
    }

    fn remaining(&self) -> Option<usize> {
        Some(CANONICAL_PLATES.len() - self.next)
    }
}
