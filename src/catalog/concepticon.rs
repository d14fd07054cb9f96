// Concepticon data checkout reader.
//
// Layout (relative to the checkout root):
//
//   concepticondata/concepticon.tsv               concept sets + categories
//   concepticondata/conceptlists/<NAME>.tsv       one file per concept list
//
// Both are tab-separated with a header row. Glosses may contain literal
// quote characters, so quote processing is disabled. The category table is
// small and loaded once; concept lists are read on demand.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use super::traits::{ConceptCatalog, ConceptEntry};

const DATA_SUBDIR: &str = "concepticondata";
const CONCEPTSETS_FILE: &str = "concepticon.tsv";
const CONCEPTLISTS_SUBDIR: &str = "conceptlists";

/// A row of `concepticon.tsv`. Other columns are ignored.
#[derive(Debug, Deserialize)]
struct ConceptSetRow {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "ONTOLOGICAL_CATEGORY", default)]
    ontological_category: Option<String>,
}

/// A row of `conceptlists/<NAME>.tsv`. Other columns are ignored.
#[derive(Debug, Deserialize)]
struct ConceptRow {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "CONCEPTICON_ID", default)]
    concepticon_id: Option<String>,
    #[serde(rename = "CONCEPTICON_GLOSS", default)]
    concepticon_gloss: Option<String>,
}

/// Catalog backed by a Concepticon data checkout on disk.
pub struct ConcepticonData {
    root: PathBuf,
    categories: HashMap<String, String>,
}

impl ConcepticonData {
    /// Open a checkout and load its concept-set category table.
    pub fn open(root: &Path) -> Result<Self> {
        let conceptsets_path = root.join(DATA_SUBDIR).join(CONCEPTSETS_FILE);
        let mut categories = HashMap::new();

        for row in read_tsv::<ConceptSetRow>(&conceptsets_path)? {
            let row = row?;
            categories.insert(row.id, row.ontological_category.unwrap_or_default());
        }

        debug!(
            path = %conceptsets_path.display(),
            concept_sets = categories.len(),
            "Loaded concept set categories"
        );

        Ok(Self {
            root: root.to_path_buf(),
            categories,
        })
    }

    /// Number of concept sets in the category table.
    pub fn concept_set_count(&self) -> usize {
        self.categories.len()
    }

    fn conceptlist_path(&self, name: &str) -> PathBuf {
        self.root
            .join(DATA_SUBDIR)
            .join(CONCEPTLISTS_SUBDIR)
            .join(format!("{name}.tsv"))
    }
}

impl ConceptCatalog for ConcepticonData {
    fn conceptlist(&self, name: &str) -> Result<Vec<ConceptEntry>> {
        // List names are file stems; anything path-like can't name a list.
        if name.is_empty() || name.contains(['/', '\\']) || name.starts_with('.') {
            bail!("Unknown conceptlist: {name}");
        }

        let path = self.conceptlist_path(name);
        if !path.is_file() {
            bail!("Unknown conceptlist: {name} (no {})", path.display());
        }

        let mut entries = Vec::new();
        for row in read_tsv::<ConceptRow>(&path)? {
            let row = row?;
            entries.push(ConceptEntry {
                id: row.id,
                gloss: row.concepticon_gloss,
                concept_set_id: row.concepticon_id,
            });
        }

        debug!(conceptlist = name, concepts = entries.len(), "Read conceptlist");
        Ok(entries)
    }

    fn category_of(&self, concept_set_id: &str) -> Result<&str> {
        self.categories
            .get(concept_set_id)
            .map(String::as_str)
            .ok_or_else(|| anyhow!("Concept set {concept_set_id} not found in catalog"))
    }
}

/// Open a tab-separated file and return an iterator of typed rows, each
/// carrying the file path and line number in its error context.
fn read_tsv<T: DeserializeOwned>(path: &Path) -> Result<impl Iterator<Item = Result<T>>> {
    let reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .quoting(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let display = path.display().to_string();
    Ok(reader
        .into_deserialize::<T>()
        .enumerate()
        .map(move |(i, row)| {
            row.with_context(|| format!("Failed to parse line {} in {}", i + 2, display))
        }))
}
