//! Shell session
//!
//! Holds the rental service and the licence registry for one run of the
//! shell, and turns parsed commands into text replies.

use std::sync::Arc;

use carhire_core::{
    Clock, Config, Driver, DomainError, DriverRecord, FixedClock, IssueOutcome, LicenceRegistry,
    Registration, RentalService, SizeClass, SystemClock, Vehicle,
};
use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::command::{help_text, Command, DriverName};

/// Errors a single command can end in. None of them end the session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("No registered driver called {0}")]
    UnknownDriver(DriverName),

    #[error("{count} registered drivers are called {name}")]
    AmbiguousDriver { name: DriverName, count: usize },

    #[error("Unknown size class '{0}', expected small or large")]
    UnknownClass(String),

    #[error("Failed to render status: {0}")]
    Status(#[from] serde_json::Error),
}

/// Clock picked from config: a pinned date or the host clock
#[derive(Debug, Clone, Copy)]
pub enum SessionClock {
    System(SystemClock),
    Fixed(FixedClock),
}

impl SessionClock {
    pub fn from_config(config: &Config) -> Self {
        match config.today {
            Some(today) => SessionClock::Fixed(FixedClock::new(today)),
            None => SessionClock::System(SystemClock),
        }
    }
}

impl Clock for SessionClock {
    fn today(&self) -> NaiveDate {
        match self {
            SessionClock::System(clock) => clock.today(),
            SessionClock::Fixed(clock) => clock.today(),
        }
    }
}

#[derive(Debug, Serialize)]
struct AvailableCounts {
    small: usize,
    large: usize,
}

#[derive(Debug, Serialize)]
struct RentalEntry {
    driver: String,
    registration: Registration,
}

/// What the `status` command prints
#[derive(Debug, Serialize)]
struct StatusReport<'a> {
    today: NaiveDate,
    available: AvailableCounts,
    vehicles: Vec<&'a Vehicle>,
    rentals: Vec<RentalEntry>,
}

pub struct Session<C>
where
    C: Clock,
{
    service: RentalService<C>,
    registry: LicenceRegistry,
}

impl Session<SessionClock> {
    /// Build the fleet and clock described by `config`
    pub fn from_config(config: &Config) -> Result<Self, DomainError> {
        let fleet = config.build_fleet()?;
        let clock = SessionClock::from_config(config);
        Ok(Self::new(
            RentalService::new(fleet, Arc::new(clock)),
            LicenceRegistry::new(),
        ))
    }
}

impl<C> Session<C>
where
    C: Clock,
{
    pub fn new(service: RentalService<C>, registry: LicenceRegistry) -> Self {
        Self { service, registry }
    }

    /// Run one command and return the text to print
    pub fn execute(&mut self, command: Command) -> Result<String, SessionError> {
        tracing::debug!(?command, "Executing command");

        match command {
            Command::Register {
                name,
                date_of_birth,
                licence_issued,
                kind,
            } => {
                let driver = Driver::new(&name.first, &name.last, date_of_birth)?;
                let licence = self.registry.issue(&driver, licence_issued, kind)?;
                Ok(format!("Registered {} with licence {}", driver, licence))
            }

            Command::Record { record } => {
                let driver = record.driver.clone();
                let licence = self.registry.adopt(record);
                Ok(format!("Registered {} with licence {}", driver, licence))
            }

            Command::Issue { name, registration } => {
                let driver = self.driver(&name)?;
                let licence = match self.registry.get(&driver) {
                    Some(licence) => licence.clone(),
                    None => return Err(SessionError::UnknownDriver(name)),
                };
                let wanted = self
                    .service
                    .fleet()
                    .get(&registration)
                    .cloned()
                    .ok_or_else(|| DomainError::NotFound(format!("No vehicle {}", registration)))?;

                match self.service.issue_with_outcome(&driver, &licence, &wanted) {
                    IssueOutcome::Issued { registration } => {
                        Ok(format!("Issued {} to {}", registration, name))
                    }
                    IssueOutcome::Refused { reason } => {
                        Ok(format!("Refused {} to {}: {}", wanted.registration(), name, reason))
                    }
                }
            }

            Command::Drive { name, distance } => {
                let driver = self.driver(&name)?;
                let used = self.service.drive(&driver, distance)?;
                let vehicle = self.service.vehicle_of(&driver)?;
                Ok(format!(
                    "Drove {} km in {}, used {} litres, {} left",
                    distance,
                    vehicle,
                    used,
                    vehicle.fuel()
                ))
            }

            Command::Refuel {
                registration,
                litres,
            } => {
                let absorbed = self.service.refuel(&registration, litres)?;
                Ok(format!("{} took {} litres", registration, absorbed))
            }

            Command::Terminate { name } => {
                let driver = self.driver(&name)?;
                match self.service.terminate(&driver) {
                    Some(deficit) => Ok(format!(
                        "Rental ended for {}, {} litres needed to refill",
                        name, deficit
                    )),
                    None => Ok(format!("{} has no active rental", name)),
                }
            }

            Command::Whois { name } => {
                let driver = self.driver(&name)?;
                let record = match self.registry.get(&driver) {
                    Some(licence) => DriverRecord::new(licence.clone()),
                    None => return Err(SessionError::UnknownDriver(name)),
                };
                match self.service.vehicle_of(&driver) {
                    Ok(vehicle) => Ok(format!("{} renting {}", record, vehicle)),
                    Err(_) => Ok(format!("{} not renting", record)),
                }
            }

            Command::Available { class } => match self.service.available_count_by_name(&class) {
                Some(count) => Ok(format!("{} {} available", count, class.to_lowercase())),
                None => Err(SessionError::UnknownClass(class)),
            },

            Command::Rented => {
                let lines: Vec<String> = self
                    .service
                    .rented_vehicles()
                    .map(|v| format!("{} fuel {}/{}", v, v.fuel(), v.capacity()))
                    .collect();
                if lines.is_empty() {
                    Ok("No vehicles on rental".to_string())
                } else {
                    Ok(lines.join("\n"))
                }
            }

            Command::Status => self.status(),

            Command::Help => Ok(help_text()),

            Command::Quit => Ok("Goodbye".to_string()),
        }
    }

    /// The single registered driver with this name
    fn driver(&self, name: &DriverName) -> Result<Driver, SessionError> {
        let matches = self.registry.find_by_name(&name.first, &name.last);
        match matches.as_slice() {
            [driver] => Ok((*driver).clone()),
            [] => Err(SessionError::UnknownDriver(name.clone())),
            _ => Err(SessionError::AmbiguousDriver {
                name: name.clone(),
                count: matches.len(),
            }),
        }
    }

    fn status(&self) -> Result<String, SessionError> {
        let mut rentals: Vec<RentalEntry> = self
            .service
            .active_rentals()
            .map(|(driver, registration)| RentalEntry {
                driver: driver.full_name(),
                registration: registration.clone(),
            })
            .collect();
        rentals.sort_by(|a, b| a.registration.cmp(&b.registration));

        let report = StatusReport {
            today: self.service.today(),
            available: AvailableCounts {
                small: self.service.available_count(SizeClass::Small),
                large: self.service.available_count(SizeClass::Large),
            },
            vehicles: self.service.fleet().iter().collect(),
            rentals,
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::parse_command;
    use carhire_core::Fleet;

    fn create_session() -> Session<FixedClock> {
        let today = NaiveDate::from_ymd_opt(2016, 10, 17).unwrap();
        Session::new(
            RentalService::new(Fleet::canonical().unwrap(), Arc::new(FixedClock::new(today))),
            LicenceRegistry::seeded(7),
        )
    }

    fn run(session: &mut Session<FixedClock>, line: &str) -> Result<String, SessionError> {
        session.execute(parse_command(line).unwrap())
    }

    #[test]
    fn reference_rental_through_the_shell() {
        let mut session = create_session();

        let reply = run(&mut session, "register Jonathan Carlton 27/09/1993 28/06/2011 full").unwrap();
        assert!(reply.starts_with("Registered Jonathan Carlton (27/09/1993) with licence JC-2011-"));

        assert_eq!(
            run(&mut session, "issue Jonathan Carlton SE61 RLU").unwrap(),
            "Issued SE61 RLU to Jonathan Carlton"
        );
        assert_eq!(run(&mut session, "available small").unwrap(), "19 small available");
        assert_eq!(run(&mut session, "available LARGE").unwrap(), "10 large available");

        assert_eq!(
            run(&mut session, "drive Jonathan Carlton 40").unwrap(),
            "Drove 40 km in SE61 RLU (S), used 2 litres, 47 left"
        );
        assert_eq!(run(&mut session, "rented").unwrap(), "SE61 RLU (S) fuel 47/49");

        assert_eq!(
            run(&mut session, "terminate Jonathan Carlton").unwrap(),
            "Rental ended for Jonathan Carlton, 2 litres needed to refill"
        );
        assert_eq!(
            run(&mut session, "terminate Jonathan Carlton").unwrap(),
            "Jonathan Carlton has no active rental"
        );
        assert_eq!(run(&mut session, "refuel SE61 RLU 10").unwrap(), "SE61 RLU took 2 litres");
    }

    fn create_session_with_reference() -> Session<FixedClock> {
        let mut session = create_session();
        run(&mut session, "register Jonathan Carlton 27/09/1993 28/06/2011 full").unwrap();
        session
    }

    #[test]
    fn refusals_are_replies_not_errors() {
        let mut session = create_session_with_reference();
        assert_eq!(
            run(&mut session, "issue Jonathan Carlton TP00 QQJ").unwrap(),
            "Refused TP00 QQJ to Jonathan Carlton: driver is 23 but must be at least 25"
        );

        run(&mut session, "issue Jonathan Carlton SE61 RLU").unwrap();
        assert_eq!(
            run(&mut session, "issue Jonathan Carlton AA78 OGG").unwrap(),
            "Refused AA78 OGG to Jonathan Carlton: driver already has a rental"
        );
    }

    #[test]
    fn help_and_quit_reply() {
        let mut session = create_session();
        assert!(run(&mut session, "help").unwrap().contains("`terminate <first> <last>`"));
        assert_eq!(run(&mut session, "quit").unwrap(), "Goodbye");
    }

    #[test]
    fn commands_for_unknown_drivers_fail() {
        let mut session = create_session();
        assert!(matches!(
            run(&mut session, "issue Nobody Here SE61 RLU"),
            Err(SessionError::UnknownDriver(_))
        ));
        assert!(matches!(
            run(&mut session, "whois Nobody Here"),
            Err(SessionError::UnknownDriver(_))
        ));
    }

    #[test]
    fn same_name_different_birthdays_is_ambiguous() {
        let mut session = create_session();
        run(&mut session, "register Sam Smith 01/01/1980 01/01/2000 full").unwrap();
        run(&mut session, "register Sam Smith 02/02/1982 01/01/2001 full").unwrap();
        assert!(matches!(
            run(&mut session, "terminate sam smith"),
            Err(SessionError::AmbiguousDriver { count: 2, .. })
        ));
    }

    #[test]
    fn unknown_vehicle_and_class() {
        let mut session = create_session_with_reference();
        assert!(matches!(
            run(&mut session, "issue Jonathan Carlton ZZ99 ZZZ"),
            Err(SessionError::Domain(DomainError::NotFound(_)))
        ));
        assert!(matches!(
            run(&mut session, "available minibus"),
            Err(SessionError::UnknownClass(_))
        ));
    }

    #[test]
    fn drive_errors_surface_from_the_domain() {
        let mut session = create_session_with_reference();
        assert!(matches!(
            run(&mut session, "drive Jonathan Carlton 10"),
            Err(SessionError::Domain(DomainError::NotFound(_)))
        ));

        run(&mut session, "issue Jonathan Carlton SE61 RLU").unwrap();
        assert!(matches!(
            run(&mut session, "drive Jonathan Carlton -1"),
            Err(SessionError::Domain(DomainError::InvalidArgument(_)))
        ));
    }

    #[test]
    fn record_and_whois() {
        let mut session = create_session();
        let reply = run(&mut session, "record Jonathan Carlton:27/09/1993:JC-2011-42-true").unwrap();
        assert_eq!(
            reply,
            "Registered Jonathan Carlton (27/09/1993) with licence JC-2011-42-true"
        );

        assert_eq!(
            run(&mut session, "whois jonathan carlton").unwrap(),
            "Jonathan Carlton:27/09/1993:JC-2011-42-true not renting"
        );
        run(&mut session, "issue Jonathan Carlton SE61 RLU").unwrap();
        assert_eq!(
            run(&mut session, "whois Jonathan Carlton").unwrap(),
            "Jonathan Carlton:27/09/1993:JC-2011-42-true renting SE61 RLU (S)"
        );
    }

    #[test]
    fn status_is_json() {
        let mut session = create_session_with_reference();
        run(&mut session, "issue Jonathan Carlton SE61 RLU").unwrap();

        let status: serde_json::Value =
            serde_json::from_str(&run(&mut session, "status").unwrap()).unwrap();
        assert_eq!(status["today"], "2016-10-17");
        assert_eq!(status["available"]["small"], 19);
        assert_eq!(status["available"]["large"], 10);
        assert_eq!(status["vehicles"].as_array().unwrap().len(), 30);
        assert_eq!(status["rentals"][0]["driver"], "Jonathan Carlton");
        assert_eq!(status["rentals"][0]["registration"], "SE61 RLU");
    }

    #[test]
    fn session_clock_follows_config() {
        let pinned = Config {
            today: NaiveDate::from_ymd_opt(2016, 10, 17),
            ..Config::default()
        };
        assert_eq!(
            SessionClock::from_config(&pinned).today(),
            NaiveDate::from_ymd_opt(2016, 10, 17).unwrap()
        );
        assert!(matches!(
            SessionClock::from_config(&Config::default()),
            SessionClock::System(_)
        ));

        let session = Session::from_config(&pinned).unwrap();
        assert_eq!(session.service.fleet().len(), 30);
    }
}
