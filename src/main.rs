use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use swadesh_overlap::catalog::ConcepticonData;
use swadesh_overlap::config::Config;
use swadesh_overlap::output::terminal;
use swadesh_overlap::pipeline;

/// Swadesh overlap: which Swadesh-1952-200 nouns each conceptlist shares.
///
/// Reads the conceptlists named in conceptlists.tsv from a Concepticon data
/// checkout, prints the shared nouns per list, and writes a bar chart
/// (swadesh-barcharts.pdf) and a presence/absence heatmap
/// (swadesh-heatmap.pdf). Paths can be changed through CONCEPTICON_DATA_DIR,
/// SWADESH_CONCEPTLISTS, SWADESH_REFERENCE_LIST, SWADESH_BARCHART_PATH and
/// SWADESH_HEATMAP_PATH (a .env file is read too).
#[derive(Parser)]
#[command(name = "swadesh-overlap", version, about)]
struct Cli {}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Structured logging on stderr; stdout is reserved for the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("swadesh_overlap=info")),
        )
        .with_writer(io::stderr)
        .init();

    let _cli = Cli::parse();

    let config = Config::load()?;
    config.require_catalog()?;

    let catalog = ConcepticonData::open(&config.data_dir)?;
    info!(
        data_dir = %config.data_dir.display(),
        concept_sets = catalog.concept_set_count(),
        "Opened concept catalog"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let run = pipeline::run(&config, &catalog, &mut out)?;

    terminal::display_summary(
        &run.overlaps,
        run.nouns.len(),
        &[config.barchart_path.as_path(), config.heatmap_path.as_path()],
    );

    Ok(())
}
