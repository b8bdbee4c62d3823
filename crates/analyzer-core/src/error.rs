use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the song-play analyzer.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// The event log could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The distribution CSV could not be serialized to disk.
    #[error("Failed to write CSV {path}: {source}")]
    CsvWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A maximum was requested but no listener had any qualifying play.
    #[error("No listeners with qualifying plays on the target date")]
    EmptyIndex,

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the analyzer crates.
pub type Result<T> = std::result::Result<T, AnalyzerError>;
