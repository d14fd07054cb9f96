// In-memory concept catalog for tests and small fixtures.

use std::collections::HashMap;

use anyhow::{anyhow, Result};

use super::traits::{ConceptCatalog, ConceptEntry};

/// A catalog held entirely in maps, built up with the `with_*` methods.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    lists: HashMap<String, Vec<ConceptEntry>>,
    categories: HashMap<String, String>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a concept set and its ontological category.
    pub fn with_concept_set(mut self, id: &str, category: &str) -> Self {
        self.categories.insert(id.to_string(), category.to_string());
        self
    }

    /// Register a concept list. Replaces any list with the same name.
    pub fn with_list(mut self, name: &str, entries: Vec<ConceptEntry>) -> Self {
        self.lists.insert(name.to_string(), entries);
        self
    }

    /// Register a list whose entries are mapped glosses, using each gloss as
    /// its own concept-set id. Every gloss must also be given a category via
    /// `with_concept_set` if the list is used as a reference list.
    pub fn with_gloss_list(self, name: &str, glosses: &[&str]) -> Self {
        let entries = glosses
            .iter()
            .enumerate()
            .map(|(i, gloss)| ConceptEntry::mapped(&format!("{name}-{}", i + 1), gloss, gloss))
            .collect();
        self.with_list(name, entries)
    }
}

impl ConceptCatalog for InMemoryCatalog {
    fn conceptlist(&self, name: &str) -> Result<Vec<ConceptEntry>> {
        self.lists
            .get(name)
            .cloned()
            .ok_or_else(|| anyhow!("Unknown conceptlist: {name}"))
    }

    fn category_of(&self, concept_set_id: &str) -> Result<&str> {
        self.categories
            .get(concept_set_id)
            .map(String::as_str)
            .ok_or_else(|| anyhow!("Concept set {concept_set_id} not found in catalog"))
    }
}
