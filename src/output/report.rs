// Plain-text report of shared concepts per concept list.
//
// The format is line-oriented so it can be diffed and grepped:
//
//   # Conceptlist <name> has <N> common concepts
//   * <gloss>
//   ...
//   <blank line>

use std::io::{self, Write};

use crate::overlap::OverlapResult;

/// Write the report for every list, in configuration order.
pub fn write_report<W: Write>(out: &mut W, overlaps: &OverlapResult) -> io::Result<()> {
    for list in overlaps.iter() {
        writeln!(
            out,
            "# Conceptlist {} has {} common concepts",
            list.name,
            list.count()
        )?;
        for gloss in &list.shared {
            writeln!(out, "* {gloss}")?;
        }
        writeln!(out)?;
    }
    out.flush()
}
