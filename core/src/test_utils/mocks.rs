//! Mock implementations of port traits

use std::collections::VecDeque;

use crate::domain::entities::Registration;
use crate::domain::ports::RegistrationSource;
use crate::error::DomainError;

// ============================================================================
// Scripted Registration Source
// ============================================================================

/// Hands out a fixed list of plates in order, duplicates included
#[derive(Debug, Default)]
pub struct ScriptedRegistrations {
    plates: VecDeque<String>,
}

impl ScriptedRegistrations {
    pub fn new(plates: &[&str]) -> Self {
        Self {
            plates: plates.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl RegistrationSource for ScriptedRegistrations {
    fn next_registration(&mut self) -> Result<Registration, DomainError> {
        let plate = self
            .plates
            .pop_front()
            .ok_or_else(|| DomainError::NotFound("Script exhausted".to_string()))?;
        plate.parse()
    }

    fn remaining(&self) -> Option<usize> {
        Some(self.plates.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_source_replays_plates() {
        let mut source = ScriptedRegistrations::new(&["AB12 CDE", "XY34 ZZZ"]);
        assert_eq!(source.remaining(), Some(2));
        assert_eq!(source.next_registration().unwrap().to_string(), "AB12 CDE");
        assert_eq!(source.next_registration().unwrap().to_string(), "XY34 ZZZ");
        assert!(source.next_registration().is_err());
    }

    #[test]
    fn scripted_source_surfaces_bad_plates() {
        let mut source = ScriptedRegistrations::new(&["not a plate"]);
        assert!(matches!(
            source.next_registration(),
            Err(DomainError::InvalidArgument(_))
        ));
    }
}
