//! Event-log ingestion for the song-play analyzer.
//!
//! Reads the tab-delimited play log line by line and builds a
//! [`ListenerSongIndex`] restricted to a single target date.

use std::io::BufRead;
use std::path::Path;

use analyzer_core::error::{AnalyzerError, Result};
use analyzer_core::models::{ListenerSongIndex, PlayRecord};
use analyzer_core::time_utils::parse_play_timestamp;
use chrono::NaiveDate;
use tracing::debug;

// ── Public API ────────────────────────────────────────────────────────────────

/// Build the per-listener distinct-song index for `target_date`.
///
/// Lines that are blank, have fewer than four tab-separated fields, or whose
/// timestamp matches neither accepted format are dropped without a report.
/// Only failure to open `path` is fatal.
pub fn load_listener_songs(path: &Path, target_date: NaiveDate) -> Result<ListenerSongIndex> {
    let file = std::fs::File::open(path).map_err(|source| AnalyzerError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let reader = std::io::BufReader::new(file);
    let mut index = ListenerSongIndex::new();

    let mut lines_read = 0u64;
    let mut lines_skipped = 0u64;
    let mut plays_qualified = 0u64;

    for line_result in reader.lines() {
        lines_read += 1;
        let line = match line_result {
            Ok(l) => l,
            Err(_) => {
                lines_skipped += 1;
                continue;
            }
        };

        let record = match parse_line(&line) {
            Some(r) => r,
            None => {
                lines_skipped += 1;
                continue;
            }
        };

        // Time of day is ignored for the comparison.
        if record.played_at.date() == target_date {
            plays_qualified += 1;
            index.record_play(record.client_id, record.song_id);
        }
    }

    debug!(
        "File {}: {} read, {} skipped, {} qualified",
        path.display(),
        lines_read,
        lines_skipped,
        plays_qualified,
    );

    Ok(index)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Parse one log line into a [`PlayRecord`], or `None` when malformed.
///
/// Field index 1 is the song id, index 2 the client id, index 3 the
/// timestamp; each is trimmed of surrounding whitespace. Extra fields beyond
/// the fourth are ignored.
fn parse_line(line: &str) -> Option<PlayRecord> {
    if line.trim().is_empty() {
        return None;
    }

    let parts: Vec<&str> = line.split('\t').collect();
    if parts.len() < 4 {
        return None;
    }

    let song_id = parts[1].trim();
    let client_id = parts[2].trim();
    let played_at = parse_play_timestamp(parts[3].trim())?;

    Some(PlayRecord {
        song_id: song_id.to_string(),
        client_id: client_id.to_string(),
        played_at,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
