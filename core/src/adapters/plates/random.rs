//! Random plate generator

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::entities::Registration;
use crate::domain::ports::RegistrationSource;
use crate::error::DomainError;

const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Attempts at drawing an unused plate before giving up
const MAX_ATTEMPTS: usize = 1_000;

/// Generates random `AB12 CDE` plates, never the same one twice
#[derive(Debug)]
pub struct RandomRegistrations {
    rng: StdRng,
    issued: HashSet<Registration>,
}

impl RandomRegistrations {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic generator for reproducible fleets
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            issued: HashSet::new(),
        }
    }

    /// Mark a plate as taken so it is never generated
    pub fn reserve(&mut self, registration: Registration) {
        self.issued.insert(registration);
    }

    fn letter(&mut self) -> char {
        LETTERS[self.rng.gen_range(0..LETTERS.len())] as char
    }

    fn draw(&mut self) -> Result<Registration, DomainError> {
        let first = format!(
            "{}{}{:02}",
            self.letter(),
            self.letter(),
            self.rng.gen_range(0..100)
        );
        let second: String = (0..3).map(|_| self.letter()).collect();
        Registration::new(&first, &second)
    }
}

impl Default for RandomRegistrations {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationSource for RandomRegistrations {
    fn next_registration(&mut self) -> Result<Registration, DomainError> {
        for _ in 0..MAX_ATTEMPTS {
            let candidate = self.draw()?;
            if self.issued.insert(candidate.clone()) {
                return Ok(candidate);
            }
        }
        Err(DomainError::NotFound(format!(
            "No unused plate found after {} attempts",
            MAX_ATTEMPTS
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_plates_are_well_formed() {
        let mut source = RandomRegistrations::seeded(7);
        for _ in 0..50 {
            let reg = source.next_registration().unwrap();
            let text = reg.to_string();
            assert_eq!(text.len(), 8);
            assert!(text.parse::<Registration>().is_ok());
        }
    }

    #[test]
    fn random_plates_never_repeat() {
        let mut source = RandomRegistrations::seeded(42);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            assert!(seen.insert(source.next_registration().unwrap()));
        }
    }

    #[test]
    fn same_seed_same_plates() {
        let mut a = RandomRegistrations::seeded(3);
        let mut b = RandomRegistrations::seeded(3);
        for _ in 0..10 {
            assert_eq!(
                a.next_registration().unwrap(),
                b.next_registration().unwrap()
            );
        }
    }

    #[test]
    fn reserved_plates_are_skipped() {
        let mut probe = RandomRegistrations::seeded(11);
        let first = probe.next_registration().unwrap();

        let mut source = RandomRegistrations::seeded(11);
        source.reserve(first.clone());
        assert_ne!(source.next_registration().unwrap(), first);
    }
}
