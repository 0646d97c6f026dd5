//! carhire shell
//!
//! A line-oriented shell over the rental fleet. Reads one command per line
//! from stdin and prints the reply to stdout. Type `help` for the list of
//! commands. Configuration comes from the environment (or a `.env` file):
//! - `CARHIRE_LARGE_CARS`, `CARHIRE_SMALL_CARS`: fleet size
//! - `CARHIRE_PLATES`: `canonical` or `random`
//! - `CARHIRE_TODAY`: pin the date eligibility is judged against
//! - `CARHIRE_LOG`: log filter

mod command;
mod session;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use carhire_core::Config;
use command::{parse_command, Command};
use session::Session;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to read configuration")?;

    // Logs go to stderr, stdout is for command replies
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(io::stderr)
        .init();

    let mut session = Session::from_config(&config).context("Failed to build the fleet")?;
    tracing::info!(
        large = config.large_cars,
        small = config.small_cars,
        plates = ?config.plates,
        today = ?config.today,
        "Starting carhire shell"
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let mut quit = false;
        let reply = match parse_command(&line) {
            Ok(command) => {
                quit = command == Command::Quit;
                match session.execute(command) {
                    Ok(reply) => reply,
                    Err(e) => format!("Error: {}", e),
                }
            }
            Err(e) => format!("Error: {}", e),
        };

        writeln!(stdout, "{}", reply)?;
        stdout.flush()?;

        if quit {
            break;
        }
    }

    tracing::info!("Shell closed");
    Ok(())
}
