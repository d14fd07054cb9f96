// The whole run, start to finish: read the configured lists, extract the
// reference nouns, compute overlaps, print the report, render both figures.
//
// Steps run strictly in sequence and the first error aborts the run. The
// report is fully written before any figure is drawn.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::info;

use crate::catalog::ConceptCatalog;
use crate::config::{load_conceptlist_names, Config};
use crate::output::{render_barchart, render_heatmap, write_report};
use crate::overlap::{
    compute_overlaps, reference_nouns, HeatmapMatrix, OverlapResult, ReferenceNounSet,
};

/// Everything a finished run computed.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub names: Vec<String>,
    pub nouns: ReferenceNounSet,
    pub overlaps: OverlapResult,
    pub matrix: HeatmapMatrix,
}

/// Run the full pipeline against `catalog`, writing the report to `out` and
/// the figures to the paths in `config`.
pub fn run<W: Write>(
    config: &Config,
    catalog: &dyn ConceptCatalog,
    out: &mut W,
) -> Result<RunOutput> {
    let names = load_conceptlist_names(&config.conceptlists_path)?;
    info!(
        conceptlists = names.len(),
        path = %config.conceptlists_path.display(),
        "Loaded conceptlist names"
    );

    let nouns = reference_nouns(catalog, &config.reference_list)?;
    info!(
        reference = %config.reference_list,
        nouns = nouns.len(),
        "Extracted reference nouns"
    );

    let overlaps = compute_overlaps(catalog, &names, &nouns)?;

    write_report(out, &overlaps).context("Failed to write report")?;

    render_barchart(&overlaps, &config.barchart_path)?;

    let matrix = HeatmapMatrix::build(&names, &nouns, &overlaps);
    render_heatmap(&matrix, &config.heatmap_path)?;

    Ok(RunOutput {
        names,
        nouns,
        overlaps,
        matrix,
    })
}
