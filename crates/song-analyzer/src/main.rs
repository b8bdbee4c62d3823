mod bootstrap;

use analyzer_core::settings::Settings;
use analyzer_data::aggregator::PlayCountAggregator;
use analyzer_data::loader::load_listener_songs;
use analyzer_data::reporter;
use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let settings = Settings::parse();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("Song analyzer v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Target date: {}, exact-match threshold: {}",
        settings.date,
        settings.exact_count
    );

    let base = bootstrap::resolve_base_path();
    let input_path = bootstrap::resolve_against_base(&base, &settings.input);
    let output_path = bootstrap::resolve_against_base(&base, &settings.output);

    let index = load_listener_songs(&input_path, settings.date)?;
    tracing::info!("{} listeners with qualifying plays", index.listener_count());

    let distribution = PlayCountAggregator::distribution(&index);
    reporter::save_distribution_to_csv(&distribution, &output_path)?;

    let exact_matches = PlayCountAggregator::count_with_exact(&index, settings.exact_count);
    reporter::print_exact_count(settings.exact_count, exact_matches);

    let max_distinct = PlayCountAggregator::max_distinct_songs(&index)?;
    reporter::print_max_distinct(max_distinct);

    Ok(())
}
