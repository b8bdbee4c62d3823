use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

// ── Play-timestamp parsing ────────────────────────────────────────────────────

/// Parse a play timestamp from the event log.
///
/// Exactly two formats are accepted, tried in order with the first match
/// winning: `dd/MM/yyyy HH:mm:ss`, then a bare `dd/MM/yyyy` which is treated
/// as midnight. Anything else yields `None`.
pub fn parse_play_timestamp(s: &str) -> Option<NaiveDateTime> {
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%d/%m/%Y %H:%M:%S") {
        return Some(dt);
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%d/%m/%Y") {
        return Some(date.and_time(NaiveTime::MIN));
    }

    None
}

// ── Tests ─────────────────────────────────────────────────────────────────────
