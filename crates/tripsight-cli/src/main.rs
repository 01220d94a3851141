//! `tripsight` CLI — resolve trip visibility and run calendar queries from
//! the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Resolve the effective visibility for a viewer
//! tripsight resolve --trip full_details --personal busy_only
//!
//! # Which itinerary locations overlap a date? (stdin → stdout)
//! cat locations.json | tripsight overlap --start 2024-06-01T00:00:00Z
//!
//! # Overlap over a date range, from file to file
//! tripsight overlap --start 2024-06-01T00:00:00Z --end 2024-06-05T00:00:00Z \
//!   -i locations.json -o matches.json
//!
//! # Busy/free calendar spans for a month
//! tripsight calendar --from 2024-06-01T00:00:00Z --to 2024-06-30T00:00:00Z \
//!   -i locations.json
//! ```

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use tripsight_core::{
    busy_spans, display_policy, find_overlapping, free_spans, resolve_effective,
    should_show_trip, LocationRange, VisibilityLevel,
};

#[derive(Parser)]
#[command(
    name = "tripsight",
    version,
    about = "Trip visibility resolution and calendar overlap queries"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the effective visibility of a trip for one viewer
    Resolve {
        /// The trip's owner-set visibility level
        #[arg(long)]
        trip: String,
        /// The viewer's personal override, if any
        #[arg(long)]
        personal: Option<String>,
    },
    /// Find itinerary locations whose date ranges overlap a query date
    Overlap {
        /// Query start date (ISO 8601)
        #[arg(long)]
        start: String,
        /// Query end date (defaults to --start for a single-day query)
        #[arg(long)]
        end: Option<String>,
        /// Input file with a JSON array of locations (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Compute merged busy spans and free gaps within a calendar window
    Calendar {
        /// Window start (ISO 8601)
        #[arg(long)]
        from: String,
        /// Window end (ISO 8601)
        #[arg(long)]
        to: String,
        /// Input file with a JSON array of locations (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve { trip, personal } => {
            let trip_level: VisibilityLevel = trip
                .parse()
                .with_context(|| format!("Invalid --trip level: '{}'", trip))?;
            let personal_level: Option<VisibilityLevel> = personal
                .as_deref()
                .map(|p| {
                    p.parse()
                        .with_context(|| format!("Invalid --personal level: '{}'", p))
                })
                .transpose()?;

            let effective = resolve_effective(trip_level, personal_level);
            let result = serde_json::json!({
                "effective": effective,
                "visible": should_show_trip(trip_level, personal_level),
                "policy": display_policy(effective),
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Overlap {
            start,
            end,
            input,
            output,
        } => {
            let query_start = parse_datetime(&start)?;
            let query_end = end.as_deref().map(parse_datetime).transpose()?;

            let candidates = read_locations(input.as_deref())?;
            let matches = find_overlapping(Some(query_start), query_end, &candidates);

            write_output(output.as_deref(), &serde_json::to_string_pretty(&matches)?)?;
        }
        Commands::Calendar {
            from,
            to,
            input,
            output,
        } => {
            let window_start = parse_datetime(&from)?;
            let window_end = parse_datetime(&to)?;
            anyhow::ensure!(
                window_start < window_end,
                "--from must be earlier than --to"
            );

            let ranges = read_locations(input.as_deref())?;
            let result = serde_json::json!({
                "busy": busy_spans(&ranges, window_start, window_end),
                "free": free_spans(&ranges, window_start, window_end),
            });
            write_output(output.as_deref(), &serde_json::to_string_pretty(&result)?)?;
        }
    }

    Ok(())
}

/// Parse an ISO 8601 datetime string into `DateTime<Utc>`.
///
/// Accepts RFC 3339 (with offset, e.g., "2024-06-01T00:00:00Z") and naive
/// local time (e.g., "2024-06-01T00:00:00"), which is interpreted as UTC.
fn parse_datetime(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|ndt| ndt.and_utc())
        .with_context(|| format!("Invalid datetime: '{}'", s))
}

/// Read and parse a JSON array of locations from a file or stdin.
fn read_locations(path: Option<&str>) -> Result<Vec<LocationRange>> {
    let json = read_input(path)?;
    serde_json::from_str(&json).context("Failed to parse locations JSON")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
