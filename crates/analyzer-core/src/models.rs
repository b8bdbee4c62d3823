use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// A single play event parsed from one log line.
///
/// Lives only while its line is being processed; it is folded into the
/// [`ListenerSongIndex`] and dropped.
#[derive(Debug, Clone)]
pub struct PlayRecord {
    /// Identifier of the song that was played.
    pub song_id: String,
    /// Identifier of the listener who played it.
    pub client_id: String,
    /// When the play happened (naive local time).
    pub played_at: NaiveDateTime,
}

/// Per-listener sets of distinct song identifiers for one target date.
///
/// A listener is present only if it has at least one qualifying play, and a
/// song id appears at most once per listener no matter how many qualifying
/// events reference it.
#[derive(Debug, Default)]
pub struct ListenerSongIndex {
    songs: HashMap<String, HashSet<String>>,
}

impl ListenerSongIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one qualifying play, creating the listener's set on first use.
    ///
    /// Repeats of the same song are absorbed by set semantics.
    pub fn record_play(&mut self, client_id: impl Into<String>, song_id: impl Into<String>) {
        self.songs
            .entry(client_id.into())
            .or_default()
            .insert(song_id.into());
    }

    /// Number of listeners with at least one qualifying play.
    pub fn listener_count(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Iterate over `(client_id, distinct song set)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HashSet<String>)> + '_ {
        self.songs.iter().map(|(client, songs)| (client.as_str(), songs))
    }

    /// Distinct-song count for one listener, if present.
    pub fn distinct_count(&self, client_id: &str) -> Option<usize> {
        self.songs.get(client_id).map(HashSet::len)
    }
}

/// One row of the distinct-play-count distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionEntry {
    /// Number of distinct songs played by each listener counted in this row.
    pub distinct_play_count: usize,
    /// How many listeners played exactly that many distinct songs.
    pub client_count: u64,
}
