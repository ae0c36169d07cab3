//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `miles_search` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate. This binary
//! stands in for the web layer the library is designed to serve: it
//! validates the airport codes, runs one search, and renders the result.

use anyhow::{ensure, Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use std::process;

use miles_search::config::{API_KEY_ENV, TELEMETRY_ID_ENV};
use miles_search::initialization::init_logger_with;
use miles_search::{
    Config, LogFormat, LogLevel, SearchCoordinator, SearchError, SearchQuery, SmilesClient,
};

#[derive(Parser)]
#[command(
    name = "miles_search",
    version,
    about = "Search award-ticket flights paid in frequent-flyer miles"
)]
struct Cli {
    /// Origin airport IATA code (3 letters)
    origin: String,

    /// Destination airport IATA code (3 letters)
    destination: String,

    /// Departure date (YYYY-MM-DD)
    date: NaiveDate,

    /// Number of additional departure dates to search after the base date
    #[arg(short, long, default_value_t = 0)]
    flexibility: u32,

    /// Adult passenger count
    #[arg(long, default_value_t = 1)]
    adults: u32,

    /// Child passenger count
    #[arg(long, default_value_t = 0)]
    children: u32,

    /// Infant passenger count
    #[arg(long, default_value_t = 0)]
    infants: u32,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    log_format: LogFormat,
}

fn parse_airport_code(raw: &str, label: &str) -> Result<String> {
    ensure!(
        raw.len() == 3 && raw.chars().all(|c| c.is_ascii_alphabetic()),
        "{label} must be a 3-letter IATA code, got {raw:?}"
    );
    Ok(raw.to_ascii_uppercase())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load SMILES_API_KEY / SMILES_TELEMETRY_ID from .env if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    let api_key = std::env::var(API_KEY_ENV)
        .with_context(|| format!("{API_KEY_ENV} must be set (in the environment or .env)"))?;
    let telemetry_id = std::env::var(TELEMETRY_ID_ENV)
        .with_context(|| format!("{TELEMETRY_ID_ENV} must be set (in the environment or .env)"))?;

    let query = SearchQuery {
        origin: parse_airport_code(&cli.origin, "origin")?,
        destination: parse_airport_code(&cli.destination, "destination")?,
        departure_date: cli.date,
        flexibility: cli.flexibility,
        adults: cli.adults.max(1),
        children: cli.children,
        infants: cli.infants,
    };

    let config = Config::new(api_key, telemetry_id);
    let client = SmilesClient::new(&config).context("Failed to initialize HTTP client")?;
    let coordinator = SearchCoordinator::new(client)
        .with_eligible_fares(config.eligible_fares.clone());

    let start_time = std::time::Instant::now();
    match coordinator.search(&query).await {
        Ok(report) => {
            for flight in &report.flights {
                println!(
                    "{}  {} -> {}  {}h{:02}m  {} stop(s)  {} miles  {}",
                    flight.departure_time,
                    flight.departure_airport,
                    flight.arrival_airport,
                    flight.duration_hours,
                    flight.duration_minutes,
                    flight.number_of_stops,
                    flight.miles_cost,
                    flight.airline,
                );
                println!("    {}", flight.booking_url);
            }

            coordinator.stats().log_summary();

            if report.flights.is_empty() {
                println!("No flights found.");
            }
            println!(
                "✅ Searched {} date{} ({} failed): {} flight{} in {:.1}s",
                report.dates_searched,
                if report.dates_searched == 1 { "" } else { "s" },
                report.dates_failed,
                report.flights.len(),
                if report.flights.len() == 1 { "" } else { "s" },
                start_time.elapsed().as_secs_f64()
            );
            Ok(())
        }
        Err(e @ SearchError::AllSearchesFailed { .. }) => {
            coordinator.stats().log_summary();
            eprintln!("miles_search error: {e:#}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_airport_code_uppercases() {
        assert_eq!(parse_airport_code("cnf", "origin").unwrap(), "CNF");
        assert_eq!(parse_airport_code("GRU", "destination").unwrap(), "GRU");
    }

    #[test]
    fn test_parse_airport_code_rejects_bad_tokens() {
        assert!(parse_airport_code("", "origin").is_err());
        assert!(parse_airport_code("GRUU", "origin").is_err());
        assert!(parse_airport_code("G1U", "origin").is_err());
    }
}
