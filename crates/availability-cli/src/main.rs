//! `availability` CLI — check date-times against weekly availability strings.
//!
//! ## Usage
//!
//! ```sh
//! # Is Wednesday 10:00 inside the provider's hours?
//! availability check --at 2026-03-18T10:00 --rule "Mon-Fri, 9AM-12PM"
//!
//! # Several rules, any of which may match
//! availability check --at 2026-03-21T11:00 -r "Mon-Fri, 9AM-12PM" -r "Sat, 10AM-2PM"
//!
//! # Rules from a JSON array, verdict as JSON
//! availability check --at 2026-03-18T10:00 --rules-file doctor.json --json
//!
//! # Check "now" in a timezone against a shift's presets
//! availability check --tz America/New_York --shift morning
//!
//! # Show the parsed form of a rule
//! availability parse "Mon, Wed, Fri, 9AM-11AM"
//!
//! # List shift presets
//! availability presets night
//! ```
//!
//! `check` exits with 0 when the time is available, 1 when it is outside
//! hours and 2 when a rule is malformed.

use anyhow::{Context, Result};
use availability_engine::{BookingVerdict, Shift, WeekdayPolicy};
use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "availability",
    version,
    about = "Check date-times against weekly availability strings"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log parsing and matching decisions to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a date-time against availability rules
    Check {
        /// Candidate date-time, e.g. 2026-03-18T10:00 (defaults to now)
        #[arg(long)]
        at: Option<String>,
        /// Availability rule, e.g. "Mon-Fri, 9AM-12PM" (repeatable)
        #[arg(short, long = "rule")]
        rules: Vec<String>,
        /// JSON file holding an array of availability rules
        #[arg(long)]
        rules_file: Option<String>,
        /// Add the presets of a shift (Morning, Afternoon, Evening, Night)
        #[arg(long)]
        shift: Option<String>,
        /// IANA timezone the candidate is evaluated in (e.g., "Europe/London")
        #[arg(long)]
        tz: Option<String>,
        /// Reject unknown weekday abbreviations instead of dropping them
        #[arg(long)]
        strict: bool,
        /// Print the verdict as JSON
        #[arg(long)]
        json: bool,
    },
    /// Parse a single availability rule and print it as JSON
    Parse {
        /// The rule, e.g. "Mon-Fri, 9AM-12PM"
        rule: String,
        /// Reject unknown weekday abbreviations instead of dropping them
        #[arg(long)]
        strict: bool,
    },
    /// List the availability presets offered per shift
    Presets {
        /// Only list this shift
        shift: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Check {
            at,
            rules,
            rules_file,
            shift,
            tz,
            strict,
            json,
        } => {
            let tz = parse_timezone(tz.as_deref())?;
            let candidate = resolve_candidate(at.as_deref(), tz)?;
            let rules = collect_rules(rules, rules_file.as_deref(), shift.as_deref())?;
            tracing::info!(%candidate, rules = rules.len(), "checking availability");

            let verdict =
                availability_engine::check_booking_with(&candidate, &rules, policy(strict));

            if json {
                println!("{}", serde_json::to_string_pretty(&verdict)?);
            } else {
                println!("{}", verdict.message());
            }

            match verdict {
                BookingVerdict::Available { .. } => {}
                BookingVerdict::OutsideHours { .. } => process::exit(1),
                BookingVerdict::Malformed { .. } => process::exit(2),
            }
        }
        Commands::Parse { rule, strict } => {
            let parsed = availability_engine::parse_schedule_with(&rule, policy(strict))
                .with_context(|| format!("Failed to parse rule: {}", rule))?;
            println!("{}", serde_json::to_string_pretty(&parsed)?);
        }
        Commands::Presets { shift } => {
            let shifts = match shift {
                Some(name) => vec![parse_shift(&name)?],
                None => Shift::ALL.to_vec(),
            };
            for shift in shifts {
                println!("{}:", shift);
                for preset in shift.presets() {
                    println!("  {}", preset);
                }
            }
        }
    }

    Ok(())
}

/// Install a stderr subscriber. `--verbose` forces `debug`; otherwise the
/// filter comes from `RUST_LOG` (directives such as
/// `availability_engine=debug` are accepted) and defaults to `warn`.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn policy(strict: bool) -> WeekdayPolicy {
    if strict {
        WeekdayPolicy::Strict
    } else {
        WeekdayPolicy::Lenient
    }
}

fn parse_shift(name: &str) -> Result<Shift> {
    name.parse().map_err(|e: String| anyhow::anyhow!(e))
}

fn parse_timezone(tz: Option<&str>) -> Result<Option<Tz>> {
    tz.map(|name| {
        name.parse::<Tz>()
            .map_err(|_| anyhow::anyhow!("Invalid timezone: '{}'", name))
    })
    .transpose()
}

/// Resolve the candidate as local wall-clock time.
///
/// - no `--at`: the current time in `tz` (UTC when no timezone is given)
/// - RFC 3339 `--at`: converted into `tz`, or kept in its own offset
/// - naive `--at` (`2026-03-18T10:00`, `2026-03-18 10:00`): used as-is
fn resolve_candidate(at: Option<&str>, tz: Option<Tz>) -> Result<NaiveDateTime> {
    let Some(at) = at else {
        let now = Utc::now();
        return Ok(match tz {
            Some(tz) => now.with_timezone(&tz).naive_local(),
            None => now.naive_utc(),
        });
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(at) {
        return Ok(match tz {
            Some(tz) => dt.with_timezone(&tz).naive_local(),
            None => dt.naive_local(),
        });
    }

    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(at, fmt).ok())
        .with_context(|| format!("Invalid date-time: '{}' (expected e.g. 2026-03-18T10:00)", at))
}

/// Gather rules in order: `--rule` flags, then `--rules-file`, then shift presets.
fn collect_rules(
    mut rules: Vec<String>,
    rules_file: Option<&str>,
    shift: Option<&str>,
) -> Result<Vec<String>> {
    if let Some(path) = rules_file {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path))?;
        let from_file: Vec<String> = serde_json::from_str(&content)
            .with_context(|| format!("Expected a JSON array of rule strings in {}", path))?;
        rules.extend(from_file);
    }

    if let Some(name) = shift {
        let shift = parse_shift(name)?;
        rules.extend(shift.presets().iter().map(|p| p.to_string()));
    }

    Ok(rules)
}
