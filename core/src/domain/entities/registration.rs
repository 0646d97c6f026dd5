//! Registration value object
//!
//! A vehicle plate in the `AB12 CDE` format: two letters and two digits,
//! a space, then three letters.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

const FIRST_COMPONENT_PATTERN: &str = r"^[A-Z]{2}[0-9]{2}$";
const SECOND_COMPONENT_PATTERN: &str = r"^[A-Z]{3}$";

/// A vehicle registration plate
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Registration {
    first: String,
    second: String,
}

impl Registration {
    /// Build a registration from its two components.
    ///
    /// Components are trimmed and upper-cased before validation, so
    /// `"ng57"`/`" hxe"` is accepted as `NG57 HXE`.
    pub fn new(first: &str, second: &str) -> Result<Self, DomainError> {
        let first = first.trim().to_uppercase();
        let second = second.trim().to_uppercase();

        if first.is_empty() || second.is_empty() {
            return Err(DomainError::InvalidArgument(
                "Registration components cannot be empty".to_string(),
            ));
        }
        if !matches(FIRST_COMPONENT_PATTERN, &first) {
            return Err(DomainError::InvalidArgument(format!(
                "'{}' must be 2 letters followed by 2 digits",
                first
            )));
        }
        if !matches(SECOND_COMPONENT_PATTERN, &second) {
            return Err(DomainError::InvalidArgument(format!(
                "'{}' must be exactly 3 letters",
                second
            )));
        }

        Ok(Self { first, second })
    }

    /// The letters-and-digits half, e.g. `NG57`
    pub fn first_component(&self) -> &str {
        &self.first
    }

    /// The trailing three letters, e.g. `HXE`
    pub fn second_component(&self) -> &str {
        &self.second
    }
}

fn matches(pattern: &str, value: &str) -> bool {
    regex::Regex::new(pattern)
        .map(|re| re.is_match(value))
        .unwrap_or(false)
}

impl std::fmt::Display for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.first, self.second)
    }
}

impl std::str::FromStr for Registration {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(first), Some(second), None) => Registration::new(first, second),
            _ => Err(DomainError::InvalidArgument(format!(
                "'{}' is not a registration like 'NG57 HXE'",
                s
            ))),
        }
    }
}

impl TryFrom<String> for Registration {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Registration> for String {
    fn from(registration: Registration) -> Self {
        registration.to_string()
    }
}
