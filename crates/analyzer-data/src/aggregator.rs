//! Distribution and scalar statistics over the listener index.

use std::collections::BTreeMap;

use analyzer_core::error::{AnalyzerError, Result};
use analyzer_core::models::{DistributionEntry, ListenerSongIndex};

// ── PlayCountAggregator ───────────────────────────────────────────────────────

/// Stateless helper that reduces a [`ListenerSongIndex`] to summary statistics.
pub struct PlayCountAggregator;

impl PlayCountAggregator {
    /// Group listeners by their distinct-song count.
    ///
    /// Returns one entry per observed count, ascending, with the number of
    /// listeners at that count. An empty index yields an empty vector.
    pub fn distribution(index: &ListenerSongIndex) -> Vec<DistributionEntry> {
        // BTreeMap keeps the cardinality keys sorted.
        let mut counts: BTreeMap<usize, u64> = BTreeMap::new();

        for (_, songs) in index.iter() {
            *counts.entry(songs.len()).or_insert(0) += 1;
        }

        counts
            .into_iter()
            .map(|(distinct_play_count, client_count)| DistributionEntry {
                distinct_play_count,
                client_count,
            })
            .collect()
    }

    /// Listeners whose distinct-song count equals `n` exactly.
    pub fn count_with_exact(index: &ListenerSongIndex, n: usize) -> u64 {
        index.iter().filter(|(_, songs)| songs.len() == n).count() as u64
    }

    /// Largest distinct-song count across all listeners.
    ///
    /// An empty index is a distinct failure mode, not zero: listeners only
    /// enter the index by playing at least one song.
    pub fn max_distinct_songs(index: &ListenerSongIndex) -> Result<usize> {
        index
            .iter()
            .map(|(_, songs)| songs.len())
            .max()
            .ok_or(AnalyzerError::EmptyIndex)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
