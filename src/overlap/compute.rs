// Per-list overlap with the reference noun set.
//
// For each configured concept list we keep the glosses it shares with the
// reference nouns, deduplicated and sorted. Sorting is byte-wise on the
// canonical gloss, so "ASH" sorts before "Ash" and both before "ash".

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use tracing::debug;

use super::nouns::ReferenceNounSet;
use crate::catalog::ConceptCatalog;

/// Shared concepts of one concept list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOverlap {
    pub name: String,
    /// Glosses present in both the list and the reference nouns, sorted
    pub shared: Vec<String>,
}

impl ListOverlap {
    pub fn count(&self) -> usize {
        self.shared.len()
    }

    pub fn contains(&self, gloss: &str) -> bool {
        self.shared
            .binary_search_by(|g| g.as_str().cmp(gloss))
            .is_ok()
    }
}

/// Overlap of every configured list, in configuration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlapResult {
    lists: Vec<ListOverlap>,
}

impl OverlapResult {
    pub fn iter(&self) -> impl Iterator<Item = &ListOverlap> {
        self.lists.iter()
    }

    pub fn get(&self, name: &str) -> Option<&ListOverlap> {
        self.lists.iter().find(|l| l.name == name)
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// (count, name) pairs ordered by count, highest first.
    ///
    /// The sort is stable, so lists with equal counts keep their
    /// configuration order.
    pub fn ranked(&self) -> Vec<(usize, &str)> {
        let mut pairs: Vec<(usize, &str)> = self
            .lists
            .iter()
            .map(|l| (l.count(), l.name.as_str()))
            .collect();
        pairs.sort_by(|a, b| b.0.cmp(&a.0));
        pairs
    }
}

/// Compute the shared noun glosses of each named concept list.
///
/// Fails on the first list the catalog does not know; no partial result is
/// returned.
pub fn compute_overlaps(
    catalog: &dyn ConceptCatalog,
    names: &[String],
    nouns: &ReferenceNounSet,
) -> Result<OverlapResult> {
    let mut lists = Vec::with_capacity(names.len());

    for name in names {
        let entries = catalog
            .conceptlist(name)
            .with_context(|| format!("Failed to load conceptlist {name}"))?;

        // BTreeSet both dedups and sorts.
        let shared: BTreeSet<&str> = entries
            .iter()
            .filter_map(|entry| entry.gloss.as_deref())
            .filter(|gloss| nouns.contains(gloss))
            .collect();

        debug!(conceptlist = %name, shared = shared.len(), "Computed overlap");

        lists.push(ListOverlap {
            name: name.clone(),
            shared: shared.into_iter().map(str::to_string).collect(),
        });
    }

    Ok(OverlapResult { lists })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlap(name: &str, shared: &[&str]) -> ListOverlap {
        ListOverlap {
            name: name.to_string(),
            shared: shared.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn ranked_is_descending_and_stable_on_ties() {
        let result = OverlapResult {
            lists: vec![
                overlap("A", &["X"]),
                overlap("B", &["X", "Y", "Z"]),
                overlap("C", &["Y"]),
                overlap("D", &["X", "Y", "Z"]),
            ],
        };
        assert_eq!(result.ranked(), vec![(3, "B"), (3, "D"), (1, "A"), (1, "C")]);
    }

    #[test]
    fn ranked_empty() {
        assert!(OverlapResult::default().ranked().is_empty());
    }

    #[test]
    fn contains_uses_sorted_shared() {
        let l = overlap("A", &["ALL", "BIRD", "WATER"]);
        assert!(l.contains("BIRD"));
        assert!(!l.contains("ASH"));
    }
}
