// Reference noun set — the "Person/Thing" subset of the reference list.

use std::collections::HashSet;

use anyhow::{anyhow, Context, Result};

use crate::catalog::ConceptCatalog;

/// Ontological category that marks a concept set as a noun.
pub const NOUN_CATEGORY: &str = "Person/Thing";

/// Unique noun glosses in the order they first appear in the reference list.
///
/// Iteration order is stable and defines the heatmap's column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceNounSet {
    glosses: Vec<String>,
    index: HashSet<String>,
}

impl ReferenceNounSet {
    /// Add a gloss unless it is already present. Returns whether it was added.
    fn insert(&mut self, gloss: String) -> bool {
        if self.index.contains(&gloss) {
            return false;
        }
        self.index.insert(gloss.clone());
        self.glosses.push(gloss);
        true
    }

    pub fn contains(&self, gloss: &str) -> bool {
        self.index.contains(gloss)
    }

    pub fn len(&self) -> usize {
        self.glosses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glosses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.glosses.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.glosses
    }
}

impl<S: Into<String>> FromIterator<S> for ReferenceNounSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::default();
        for gloss in iter {
            set.insert(gloss.into());
        }
        set
    }
}

/// Extract the noun glosses of the reference list.
///
/// Every entry's concept set must be known to the catalog: an unmapped entry
/// or an id missing from the category table is a data-integrity error and is
/// returned rather than skipped.
pub fn reference_nouns(
    catalog: &dyn ConceptCatalog,
    reference_list: &str,
) -> Result<ReferenceNounSet> {
    let entries = catalog
        .conceptlist(reference_list)
        .with_context(|| format!("Failed to load reference list {reference_list}"))?;

    let mut nouns = ReferenceNounSet::default();
    for entry in entries {
        let concept_set_id = entry.concept_set_id.as_deref().ok_or_else(|| {
            anyhow!(
                "Concept {} in reference list {reference_list} is not linked to a concept set",
                entry.id
            )
        })?;

        let category = catalog
            .category_of(concept_set_id)
            .with_context(|| format!("Failed to categorize concept {}", entry.id))?;
        if category != NOUN_CATEGORY {
            continue;
        }

        let gloss = entry
            .gloss
            .ok_or_else(|| anyhow!("Concept {} in reference list has no gloss", entry.id))?;
        nouns.insert(gloss);
    }

    Ok(nouns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_iter_keeps_first_seen_order_and_drops_duplicates() {
        let set: ReferenceNounSet = ["WATER", "ASH", "WATER", "BIRD"].into_iter().collect();
        assert_eq!(set.as_slice(), &["WATER", "ASH", "BIRD"]);
        assert_eq!(set.len(), 3);
        assert!(set.contains("ASH"));
        assert!(!set.contains("ash"));
    }

    #[test]
    fn empty_set() {
        let set = ReferenceNounSet::default();
        assert!(set.is_empty());
        assert_eq!(set.iter().count(), 0);
    }
}
