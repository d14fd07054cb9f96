use std::collections::HashSet;
use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Reference word-list whose nouns every other list is compared against.
pub const DEFAULT_REFERENCE_LIST: &str = "Swadesh-1952-200";

/// Central configuration loaded from environment variables.
///
/// Every setting has a default, so a plain run in a directory containing
/// `concepticon-data/` and `conceptlists.tsv` needs no configuration at all.
/// A .env file is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the Concepticon data checkout (CONCEPTICON_DATA_DIR)
    pub data_dir: PathBuf,
    /// File listing the concept lists to compare, one per line (SWADESH_CONCEPTLISTS)
    pub conceptlists_path: PathBuf,
    /// Name of the reference list (SWADESH_REFERENCE_LIST)
    pub reference_list: String,
    /// Bar chart output; `.svg` writes SVG, anything else PDF (SWADESH_BARCHART_PATH)
    pub barchart_path: PathBuf,
    /// Heatmap output, same format rule as the bar chart (SWADESH_HEATMAP_PATH)
    pub heatmap_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("concepticon-data"),
            conceptlists_path: PathBuf::from("conceptlists.tsv"),
            reference_list: DEFAULT_REFERENCE_LIST.to_string(),
            barchart_path: PathBuf::from("swadesh-barcharts.pdf"),
            heatmap_path: PathBuf::from("swadesh-heatmap.pdf"),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to the
    /// defaults for anything unset.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            data_dir: env_path("CONCEPTICON_DATA_DIR").unwrap_or(defaults.data_dir),
            conceptlists_path: env_path("SWADESH_CONCEPTLISTS")
                .unwrap_or(defaults.conceptlists_path),
            reference_list: env::var("SWADESH_REFERENCE_LIST")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.reference_list),
            barchart_path: env_path("SWADESH_BARCHART_PATH").unwrap_or(defaults.barchart_path),
            heatmap_path: env_path("SWADESH_HEATMAP_PATH").unwrap_or(defaults.heatmap_path),
        })
    }

    /// Check that the Concepticon data checkout is present.
    /// Call this before opening the catalog.
    pub fn require_catalog(&self) -> Result<()> {
        if !self.data_dir.is_dir() {
            anyhow::bail!(
                "Concepticon data not found at {}\n\
                 Clone https://github.com/concepticon/concepticon-data there,\n\
                 or set CONCEPTICON_DATA_DIR to an existing checkout.",
                self.data_dir.display()
            );
        }
        Ok(())
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    env::var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Read the concept lists to compare from a file with one name per line.
///
/// Surrounding whitespace is trimmed. Blank lines and repeated names are
/// rejected: both point at a malformed file, and a repeated name would show
/// up twice in the bar chart and heatmap.
pub fn load_conceptlist_names(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read conceptlist file: {}", path.display()))?;
    parse_conceptlist_names(&contents)
        .with_context(|| format!("Invalid conceptlist file: {}", path.display()))
}

/// Parse conceptlist names from file contents. See `load_conceptlist_names`.
pub fn parse_conceptlist_names(contents: &str) -> Result<Vec<String>> {
    let mut names = Vec::new();
    let mut seen = HashSet::new();

    for (i, line) in contents.lines().enumerate() {
        let name = line.trim();
        if name.is_empty() {
            anyhow::bail!("Line {} is blank", i + 1);
        }
        if !seen.insert(name) {
            anyhow::bail!("Line {}: conceptlist {name} is listed more than once", i + 1);
        }
        names.push(name.to_string());
    }

    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_in_file_order() {
        let names =
            parse_conceptlist_names("Zeta-2000-10\nAlpha-1990-50\r\n  Mid-2010-20  \n").unwrap();
        assert_eq!(names, vec!["Zeta-2000-10", "Alpha-1990-50", "Mid-2010-20"]);
    }

    #[test]
    fn empty_file_has_no_names() {
        assert!(parse_conceptlist_names("").unwrap().is_empty());
    }

    #[test]
    fn blank_line_is_rejected() {
        let err = parse_conceptlist_names("A-1\n\nB-2\n").unwrap_err();
        assert!(err.to_string().contains("Line 2"), "got: {err}");
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let err = parse_conceptlist_names("A-1\nB-2\nA-1\n").unwrap_err();
        assert!(err.to_string().contains("A-1"), "got: {err}");
        assert!(err.to_string().contains("Line 3"), "got: {err}");
    }

    #[test]
    fn defaults_match_fixed_outputs() {
        let config = Config::default();
        assert_eq!(config.reference_list, "Swadesh-1952-200");
        assert_eq!(config.barchart_path, PathBuf::from("swadesh-barcharts.pdf"));
        assert_eq!(config.heatmap_path, PathBuf::from("swadesh-heatmap.pdf"));
    }
}
