//! Registration source port
//!
//! The fleet does not invent plates itself. It draws them from a
//! `RegistrationSource`, which is responsible for handing out unique ones.

use crate::domain::entities::Registration;
use crate::error::DomainError;

/// Supplier of registration plates for new vehicles
pub trait RegistrationSource {
    /// The next unused plate.
    ///
    /// Fails with `DomainError::NotFound` once the source is exhausted.
    fn next_registration(&mut self) -> Result<Registration, DomainError>;

    /// Plates still available, if the source is finite
    fn remaining(&self) -> Option<usize> {
        None
    }
}
