//! daylabel - print chat list divider labels for timestamps
//!
//! Labels each timestamp relative to now ("Today", "Yesterday",
//! "3 days ago", "June 12, 2025"), optionally grouping consecutive
//! timestamps into day sections the way a chat list shows them.
//!
//! Uses XDG Base Directory specification for file locations:
//! - Config: $XDG_CONFIG_HOME/daylabel/config.toml (~/.config/daylabel/config.toml)
//! - Logs: $XDG_STATE_HOME/daylabel/daylabel.YYYY-MM-DD.log (~/.local/state/daylabel/)

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, ValueEnum};
use daylabel_core::{parse_instant, Config, DateLabeler, Zone};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "daylabel")]
#[command(about = "Print chat list divider labels for timestamps")]
#[command(version)]
struct Args {
    /// Timestamps (RFC 3339, YYYY-MM-DD[ HH:MM[:SS]], or epoch ms).
    /// Read one per line from stdin when omitted; blank lines are undated.
    timestamps: Vec<String>,

    /// Reference time instead of the current time
    #[arg(long)]
    now: Option<String>,

    /// Calendar zone: local, utc, or an offset like +02:00
    #[arg(short, long)]
    zone: Option<Zone>,

    /// Group consecutive timestamps into day sections
    #[arg(short, long)]
    group: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Config file to use instead of the XDG default
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct LabelRow<'a> {
    input: &'a str,
    label: String,
}

#[derive(Serialize)]
struct SectionRow<'a> {
    label: String,
    day: Option<NaiveDate>,
    count: usize,
    inputs: Vec<&'a str>,
}

struct Entry {
    input: String,
    at: Option<DateTime<Utc>>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    // Initialize logging
    let _log_guard =
        daylabel_core::logging::init(&config.logging).context("failed to initialize logging")?;

    let zone = args.zone.unwrap_or(config.calendar.zone);
    let labeler = DateLabeler::new(config.labels);

    let now = match args.now.as_deref() {
        Some(raw) => parse_instant(raw, &zone)
            .context("invalid --now")?
            .context("--now must not be empty")?,
        None => Utc::now(),
    };

    let inputs = if args.timestamps.is_empty() {
        read_stdin_lines()?
    } else {
        args.timestamps.clone()
    };

    let entries = inputs
        .into_iter()
        .map(|input| {
            let at = parse_instant(&input, &zone)?;
            Ok(Entry { input, at })
        })
        .collect::<daylabel_core::Result<Vec<_>>>()
        .context("invalid timestamp")?;

    tracing::info!(
        count = entries.len(),
        zone = %zone,
        now = %now.to_rfc3339(),
        group = args.group,
        "Labeling timestamps"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.group {
        let sections = zone.sections(&labeler, &entries, &now, |e: &Entry| e.at);
        let rows: Vec<SectionRow> = sections
            .into_iter()
            .map(|s| SectionRow {
                count: s.items.len(),
                inputs: s.items.into_iter().map(|e| e.input.as_str()).collect(),
                label: s.label,
                day: s.day,
            })
            .collect();

        match args.format {
            OutputFormat::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
            }
            OutputFormat::Text => {
                for row in &rows {
                    writeln!(out, "{}", format!("{} ({})", row.label, row.count).trim_start())?;
                }
            }
        }
    } else {
        let rows: Vec<LabelRow> = entries
            .iter()
            .map(|e| LabelRow {
                input: &e.input,
                label: zone.label(&labeler, e.at.as_ref(), &now),
            })
            .collect();

        match args.format {
            OutputFormat::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
            }
            OutputFormat::Text => {
                for row in &rows {
                    writeln!(out, "{}", row.label)?;
                }
            }
        }
    }

    Ok(())
}

fn read_stdin_lines() -> Result<Vec<String>> {
    io::stdin()
        .lock()
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("failed to read timestamps from stdin")
}
