use std::env;

use chrono::NaiveDate;

use crate::adapters::{CanonicalRegistrations, RandomRegistrations, CANONICAL_PLATES};
use crate::app::rental_rules::{CANONICAL_LARGE_COUNT, CANONICAL_SMALL_COUNT};
use crate::app::Fleet;
use crate::domain::ports::RegistrationSource;
use crate::error::{ConfigError, DomainError};

/// Where fleet plates come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlateSource {
    Canonical,
    Random,
}

impl std::str::FromStr for PlateSource {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "canonical" => Ok(PlateSource::Canonical),
            "random" => Ok(PlateSource::Random),
            _ => Err(ConfigError::UnknownPlateSource(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub large_cars: usize,
    pub small_cars: usize,
    pub plates: PlateSource,
    /// Pinned "today" for eligibility checks; the system clock when unset
    pub today: Option<NaiveDate>,
    /// `tracing-subscriber` filter directive
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            large_cars: CANONICAL_LARGE_COUNT,
            small_cars: CANONICAL_SMALL_COUNT,
            plates: PlateSource::Canonical,
            today: None,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from any variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            large_cars: count(&lookup, "CARHIRE_LARGE_CARS", defaults.large_cars)?,
            small_cars: count(&lookup, "CARHIRE_SMALL_CARS", defaults.small_cars)?,
            plates: match lookup("CARHIRE_PLATES") {
                Some(value) => value.parse()?,
                None => defaults.plates,
            },
            today: match lookup("CARHIRE_TODAY") {
                Some(value) => match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
                    Ok(date) => Some(date),
                    Err(_) => return Err(ConfigError::InvalidDate(value)),
                },
                None => None,
            },
            log_filter: lookup("CARHIRE_LOG").unwrap_or(defaults.log_filter),
        };

        let Some(requested) = config.large_cars.checked_add(config.small_cars) else {
            return Err(ConfigError::FleetTooLarge {
                large: config.large_cars,
                small: config.small_cars,
            });
        };

        if config.plates == PlateSource::Canonical && requested > CANONICAL_PLATES.len() {
            return Err(ConfigError::NotEnoughPlates {
                requested,
                available: CANONICAL_PLATES.len(),
            });
        }

        Ok(config)
    }

    /// Build the fleet this config describes
    pub fn build_fleet(&self) -> Result<Fleet, DomainError> {
        let mut source: Box<dyn RegistrationSource> = match self.plates {
            PlateSource::Canonical => Box::new(CanonicalRegistrations::new()),
            PlateSource::Random => Box::new(RandomRegistrations::new()),
        };
        Fleet::from_source(source.as_mut(), self.large_cars, self.small_cars)
    }
}

fn count<F>(lookup: &F, name: &'static str, default: usize) -> Result<usize, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) => match value.trim().parse() {
            Ok(n) => Ok(n),
            Err(_) => Err(ConfigError::InvalidCount { name, value }),
        },
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::SizeClass;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn defaults_describe_the_reference_fleet() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.large_cars, 10);
        assert_eq!(config.small_cars, 20);
        assert_eq!(config.plates, PlateSource::Canonical);
        assert!(config.today.is_none());
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("CARHIRE_LARGE_CARS", "2"),
            ("CARHIRE_SMALL_CARS", " 3 "),
            ("CARHIRE_PLATES", "random"),
            ("CARHIRE_TODAY", "2016-10-17"),
            ("CARHIRE_LOG", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.large_cars, 2);
        assert_eq!(config.small_cars, 3);
        assert_eq!(config.plates, PlateSource::Random);
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2016, 10, 17));
        assert_eq!(config.log_filter, "debug");

        let fleet = config.build_fleet().unwrap();
        assert_eq!(fleet.count(SizeClass::Large), 2);
        assert_eq!(fleet.count(SizeClass::Small), 3);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            Config::from_lookup(lookup(&[("CARHIRE_LARGE_CARS", "-1")])),
            Err(ConfigError::InvalidCount { .. })
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[("CARHIRE_TODAY", "17/10/2016")])),
            Err(ConfigError::InvalidDate(_))
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[("CARHIRE_PLATES", "vanity")])),
            Err(ConfigError::UnknownPlateSource(_))
        ));
    }

    #[test]
    fn canonical_plates_cap_fleet_size() {
        assert!(matches!(
            Config::from_lookup(lookup(&[("CARHIRE_SMALL_CARS", "25")])),
            Err(ConfigError::NotEnoughPlates {
                requested: 35,
                available: 30
            })
        ));
        assert!(Config::from_lookup(lookup(&[
            ("CARHIRE_SMALL_CARS", "25"),
            ("CARHIRE_PLATES", "random"),
        ]))
        .is_ok());
    }

    #[test]
    fn rejects_fleet_sizes_that_overflow() {
        let max = usize::MAX.to_string();
        for plates in ["canonical", "random"] {
            let result = Config::from_lookup(lookup(&[
                ("CARHIRE_LARGE_CARS", max.as_str()),
                ("CARHIRE_SMALL_CARS", "1"),
                ("CARHIRE_PLATES", plates),
            ]));
            assert!(matches!(
                result,
                Err(ConfigError::FleetTooLarge { small: 1, .. })
            ));
        }
    }

    #[test]
    fn default_config_builds_canonical_fleet() {
        let fleet = Config::default().build_fleet().unwrap();
        assert_eq!(fleet.len(), 30);
    }
}
