//! Command parser for the rental shell
//!
//! Parses one-line commands like "issue Jonathan Carlton SE61 RLU" or
//! "drive Jonathan Carlton 40".

use carhire_core::domain::entities::{parse_record_date, Kilometres, Litres};
use carhire_core::{DriverRecord, LicenceKind, ParseError, Registration};
use chrono::NaiveDate;

/// A driver named on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverName {
    pub first: String,
    pub last: String,
}

impl std::fmt::Display for DriverName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.first, self.last)
    }
}

/// Commands the shell understands
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Register a driver and issue them a licence
    Register {
        name: DriverName,
        date_of_birth: NaiveDate,
        licence_issued: NaiveDate,
        kind: LicenceKind,
    },

    /// Register a driver from their one-line record
    Record { record: DriverRecord },

    /// Rent the vehicle with this registration
    Issue {
        name: DriverName,
        registration: Registration,
    },

    /// Drive the vehicle a driver is renting
    Drive {
        name: DriverName,
        distance: Kilometres,
    },

    /// Put fuel into a fleet vehicle
    Refuel {
        registration: Registration,
        litres: Litres,
    },

    /// End a driver's rental
    Terminate { name: DriverName },

    /// Show a driver's record and current rental
    Whois { name: DriverName },

    /// Count idle vehicles of a size class. The class name is kept raw so an
    /// unknown class can be reported rather than rejected at parse time.
    Available { class: String },

    /// List vehicles out on rental
    Rented,

    /// JSON snapshot of the fleet and rentals
    Status,

    Help,

    Quit,
}

/// Parse a shell command from text input
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ParseError::UnknownCommand("empty input".to_string()));
    }

    let parts: Vec<&str> = input.split_whitespace().collect();
    let command = parts[0].to_lowercase();
    let args = &parts[1..];

    match command.as_str() {
        "register" | "reg" => {
            require(args, 5, "register <first> <last> <dd/mm/yyyy> <dd/mm/yyyy> <full|provisional>")?;
            let kind: LicenceKind = args[4].parse().map_err(|e: String| {
                ParseError::InvalidArgument(format!("{} (valid: full, provisional)", e))
            })?;
            Ok(Command::Register {
                name: driver_name(args),
                date_of_birth: parse_record_date(args[2])?,
                licence_issued: parse_record_date(args[3])?,
                kind,
            })
        }

        "record" | "load" => {
            if args.is_empty() {
                return Err(ParseError::MissingArgument(
                    "record <First Last:DD/MM/YYYY:LL-YYYY-NN-true>".to_string(),
                ));
            }
            // Records carry a space between the names, so rejoin the rest.
            let record: DriverRecord = args.join(" ").parse()?;
            Ok(Command::Record { record })
        }

        "issue" | "rent" => {
            require(args, 4, "issue <first> <last> <AB12> <CDE>")?;
            Ok(Command::Issue {
                name: driver_name(args),
                registration: Registration::new(args[2], args[3])?,
            })
        }

        "drive" => {
            require(args, 3, "drive <first> <last> <km>")?;
            Ok(Command::Drive {
                name: driver_name(args),
                distance: args[2].parse()?,
            })
        }

        "refuel" | "fill" => {
            require(args, 3, "refuel <AB12> <CDE> <litres>")?;
            Ok(Command::Refuel {
                registration: Registration::new(args[0], args[1])?,
                litres: args[2].parse()?,
            })
        }

        "terminate" | "return" | "end" => {
            require(args, 2, "terminate <first> <last>")?;
            Ok(Command::Terminate {
                name: driver_name(args),
            })
        }

        "whois" | "who" => {
            require(args, 2, "whois <first> <last>")?;
            Ok(Command::Whois {
                name: driver_name(args),
            })
        }

        "available" | "avail" => {
            require(args, 1, "available <small|large>")?;
            Ok(Command::Available {
                class: args[0].to_string(),
            })
        }

        "rented" | "out" => Ok(Command::Rented),

        "status" | "fleet" => Ok(Command::Status),

        "help" | "?" | "commands" => Ok(Command::Help),

        "quit" | "exit" | "q" => Ok(Command::Quit),

        _ => Err(ParseError::UnknownCommand(command)),
    }
}

fn require(args: &[&str], count: usize, usage: &str) -> Result<(), ParseError> {
    if args.len() < count {
        return Err(ParseError::MissingArgument(format!("usage: {}", usage)));
    }
    Ok(())
}

fn driver_name(args: &[&str]) -> DriverName {
    DriverName {
        first: args[0].to_string(),
        last: args[1].to_string(),
    }
}

/// Generate help text for available commands
pub fn help_text() -> String {
    r#"# Available Commands

## Drivers
- `register <first> <last> <dd/mm/yyyy> <dd/mm/yyyy> <full|provisional>` - Register a driver (date of birth, licence issue date)
- `record <First Last:DD/MM/YYYY:LL-YYYY-NN-true>` - Register a driver from a record
- `whois <first> <last>` - Show a driver's record and rental

## Rentals
- `issue <first> <last> <AB12> <CDE>` - Rent a vehicle to a driver
- `drive <first> <last> <km>` - Drive the rented vehicle
- `terminate <first> <last>` - End a rental and report the litres to refill

## Fleet
- `refuel <AB12> <CDE> <litres>` - Put fuel into a vehicle
- `available <small|large>` - Count idle vehicles of a class
- `rented` - List vehicles out on rental
- `status` - JSON snapshot of the fleet

## Shell
- `help` - Show this help message
- `quit` - Leave the shell
"#
    .to_string()
}
