// Presence/absence matrix: concept lists × reference nouns.

use super::compute::OverlapResult;
use super::nouns::ReferenceNounSet;

/// Rows are concept lists in configuration order, columns the reference
/// nouns in their declared order. A cell is 1 iff the noun is among the
/// list's shared concepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatmapMatrix {
    rows: Vec<String>,
    columns: Vec<String>,
    cells: Vec<Vec<u8>>,
}

impl HeatmapMatrix {
    /// Build the matrix over the full row and column universes. Rows without
    /// an overlap entry stay all-zero.
    pub fn build(names: &[String], nouns: &ReferenceNounSet, overlaps: &OverlapResult) -> Self {
        let columns: Vec<String> = nouns.as_slice().to_vec();
        let mut cells = vec![vec![0u8; columns.len()]; names.len()];

        for (row, name) in cells.iter_mut().zip(names) {
            let Some(overlap) = overlaps.get(name) else {
                continue;
            };
            for (cell, noun) in row.iter_mut().zip(&columns) {
                if overlap.contains(noun) {
                    *cell = 1;
                }
            }
        }

        Self {
            rows: names.to_vec(),
            columns,
            cells,
        }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Cell value by row and column index.
    pub fn cell(&self, row: usize, column: usize) -> Option<u8> {
        self.cells.get(row)?.get(column).copied()
    }

    /// Cell value by list name and gloss.
    pub fn get(&self, name: &str, gloss: &str) -> Option<u8> {
        let row = self.rows.iter().position(|r| r == name)?;
        let column = self.columns.iter().position(|c| c == gloss)?;
        self.cell(row, column)
    }

    /// The full row of the named list.
    pub fn row(&self, name: &str) -> Option<&[u8]> {
        let row = self.rows.iter().position(|r| r == name)?;
        self.cells.get(row).map(Vec::as_slice)
    }

    pub fn is_present(&self, row: usize, column: usize) -> bool {
        self.cell(row, column) == Some(1)
    }
}
