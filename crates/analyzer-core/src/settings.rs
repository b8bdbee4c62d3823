use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Per-listener distinct-song-play statistics for one calendar date
#[derive(Parser, Debug, Clone)]
#[command(
    name = "song-analyzer",
    about = "Per-listener distinct-song-play statistics for one calendar date",
    version
)]
pub struct Settings {
    /// Tab-delimited event log to analyze
    #[arg(long, default_value = "exhibitA-input.csv")]
    pub input: PathBuf,

    /// Where to write the distribution CSV
    #[arg(long, default_value = "output.csv")]
    pub output: PathBuf,

    /// Target calendar date (YYYY-MM-DD)
    #[arg(long, default_value = "2016-08-10", value_parser = parse_date)]
    pub date: NaiveDate,

    /// Distinct-song count reported as an exact-match statistic
    #[arg(long, default_value = "346")]
    pub exact_count: usize,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,
}

/// Clap value parser for `--date`.
fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("invalid date \"{}\": {}", s, e))
}
