// Colored run summary on stderr.
//
// stdout carries only the plain report, so everything meant for the person
// at the terminal goes to stderr here.

use std::path::Path;

use colored::Colorize;

use crate::overlap::OverlapResult;

/// How many lists the summary ranks.
const TOP_N: usize = 5;

/// Show the noun universe size, the best-covered lists, and the written files.
pub fn display_summary(overlaps: &OverlapResult, noun_count: usize, written: &[&Path]) {
    eprintln!(
        "\n{}",
        format!(
            "=== Swadesh noun overlap ({} lists, {} reference nouns) ===",
            overlaps.len(),
            noun_count
        )
        .bold()
    );

    if overlaps.is_empty() {
        eprintln!("  {}", "No conceptlists configured.".dimmed());
    } else {
        for (rank, (count, name)) in overlaps.ranked().into_iter().take(TOP_N).enumerate() {
            eprintln!(
                "  {:>2}. {:<40} {:>4}  {}",
                rank + 1,
                name,
                count,
                coverage(count, noun_count)
            );
        }
        if overlaps.len() > TOP_N {
            eprintln!("  {}", format!("... and {} more", overlaps.len() - TOP_N).dimmed());
        }
    }

    eprintln!();
    for path in written {
        eprintln!("  {} {}", "wrote".green(), path.display());
    }
}

/// Share of the reference nouns a list covers, colored by how much.
fn coverage(count: usize, noun_count: usize) -> colored::ColoredString {
    if noun_count == 0 {
        return "-".dimmed();
    }
    let pct = count as f64 * 100.0 / noun_count as f64;
    let text = format!("{pct:>5.1}%");
    if pct >= 75.0 {
        text.green()
    } else if pct >= 40.0 {
        text.yellow()
    } else {
        text.red()
    }
}
