//! CSV serialization and console reporting of the computed statistics.

use std::path::Path;

use analyzer_core::error::{AnalyzerError, Result};
use analyzer_core::models::DistributionEntry;

// ── CSV output ────────────────────────────────────────────────────────────────

const CSV_HEADER: [&str; 2] = ["DISTINCT_PLAY_COUNT", "CLIENT_COUNT"];

/// Write the distribution to `path` as CSV, one row per entry in the given
/// (already ascending) order, preceded by the header line.
///
/// The file is written to a temporary sibling and renamed into place, so a
/// failed write never leaves a partial file behind; an existing file at
/// `path` is overwritten. Prints a confirmation line naming the destination.
pub fn save_distribution_to_csv(distribution: &[DistributionEntry], path: &Path) -> Result<()> {
    let tmp = path.with_extension("csv.tmp");

    // The header is written explicitly so that an empty distribution still
    // produces a well-formed file.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&tmp)
        .map_err(|source| AnalyzerError::CsvWrite {
            path: tmp.clone(),
            source,
        })?;

    writer
        .write_record(CSV_HEADER)
        .map_err(|source| AnalyzerError::CsvWrite {
            path: tmp.clone(),
            source,
        })?;

    for entry in distribution {
        writer
            .serialize(entry)
            .map_err(|source| AnalyzerError::CsvWrite {
                path: tmp.clone(),
                source,
            })?;
    }

    writer.flush()?;
    drop(writer);
    std::fs::rename(&tmp, path)?;

    println!("Distribution saved to: {}", path.display());
    Ok(())
}

// ── Console output ────────────────────────────────────────────────────────────

/// Print how many listeners played exactly `exact_target` distinct songs.
pub fn print_exact_count(exact_target: usize, exact_matches: u64) {
    println!(
        "Users who played {} distinct songs: {}",
        exact_target, exact_matches
    );
}

/// Print the maximum distinct-song count across all listeners.
pub fn print_max_distinct(max_distinct: usize) {
    println!("Maximum number of distinct songs played: {}", max_distinct);
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::PlayCountAggregator;
    use crate::loader::load_listener_songs;
    use std::io::Write;
    use tempfile::TempDir;

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn entry(distinct_play_count: usize, client_count: u64) -> DistributionEntry {
        DistributionEntry {
            distinct_play_count,
            client_count,
        }
    }

    // ── save_distribution_to_csv ──────────────────────────────────────────────

    #[test]
    fn test_csv_header_and_rows_in_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output.csv");

        save_distribution_to_csv(&[entry(1, 1), entry(2, 1)], &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "DISTINCT_PLAY_COUNT,CLIENT_COUNT\n1,1\n2,1\n");
    }

    #[test]
    fn test_csv_empty_distribution_writes_header_only() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output.csv");

        save_distribution_to_csv(&[], &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "DISTINCT_PLAY_COUNT,CLIENT_COUNT\n");
    }

    #[test]
    fn test_csv_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output.csv");
        std::fs::write(&path, "stale contents").unwrap();

        save_distribution_to_csv(&[entry(3, 7)], &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "DISTINCT_PLAY_COUNT,CLIENT_COUNT\n3,7\n");
    }

    #[test]
    fn test_csv_output_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output.csv");
        let dist = vec![entry(1, 4), entry(2, 2), entry(5, 1)];

        save_distribution_to_csv(&dist, &path).unwrap();
        let first = std::fs::read(&path).unwrap();

        save_distribution_to_csv(&dist, &path).unwrap();
        let second = std::fs::read(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_csv_no_temp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output.csv");

        save_distribution_to_csv(&[entry(1, 1)], &path).unwrap();

        let names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["output.csv".to_string()]);
    }

    // ── Full pipeline ─────────────────────────────────────────────────────────

    #[test]
    fn test_pipeline_scenario_end_to_end() {
        let dir = TempDir::new().unwrap();
        let log_path = dir.path().join("plays.tsv");
        let out_path = dir.path().join("output.csv");

        let mut file = std::fs::File::create(&log_path).unwrap();
        for line in [
            "x\tS1\tC1\t10/08/2016 10:00:00",
            "x\tS2\tC1\t10/08/2016 11:00:00",
            "x\tS1\tC2\t10/08/2016 09:00:00",
            "x\tS3\tC3\t09/08/2016 09:00:00",
            "bad line with no tabs",
        ] {
            writeln!(file, "{}", line).unwrap();
        }
        drop(file);

        let target = chrono::NaiveDate::from_ymd_opt(2016, 8, 10).unwrap();
        let index = load_listener_songs(&log_path, target).unwrap();
        let distribution = PlayCountAggregator::distribution(&index);
        save_distribution_to_csv(&distribution, &out_path).unwrap();

        let contents = std::fs::read_to_string(&out_path).unwrap();
        assert_eq!(contents, "DISTINCT_PLAY_COUNT,CLIENT_COUNT\n1,1\n2,1\n");

        assert_eq!(PlayCountAggregator::count_with_exact(&index, 1), 1);
        assert_eq!(PlayCountAggregator::max_distinct_songs(&index).unwrap(), 2);
    }
}
