// Concept catalog trait — the swap-ready abstraction over the linguistic
// database.
//
// The pipeline only ever asks two questions of the catalog: "which concepts
// does this list contain?" and "what ontological category is this concept
// set?". The default implementation reads a Concepticon data checkout from
// disk; tests use the in-memory catalog.

use anyhow::Result;

/// One concept as elicited in a concept list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConceptEntry {
    /// Identifier of the entry within its list (e.g. "Swadesh-1952-200-1")
    pub id: String,
    /// Canonical gloss of the linked concept set, `None` when unmapped
    pub gloss: Option<String>,
    /// Key into the catalog's category table, `None` when unmapped
    pub concept_set_id: Option<String>,
}

impl ConceptEntry {
    /// Build an entry that is linked to a concept set.
    pub fn mapped(id: &str, concept_set_id: &str, gloss: &str) -> Self {
        Self {
            id: id.to_string(),
            gloss: Some(gloss.to_string()),
            concept_set_id: Some(concept_set_id.to_string()),
        }
    }

    /// Build an entry the catalog has not linked to any concept set.
    pub fn unmapped(id: &str) -> Self {
        Self {
            id: id.to_string(),
            gloss: None,
            concept_set_id: None,
        }
    }
}

/// Read-only access to concept lists and concept-set metadata.
pub trait ConceptCatalog {
    /// All entries of the named concept list, in list order.
    ///
    /// Fails if the catalog does not know the list.
    fn conceptlist(&self, name: &str) -> Result<Vec<ConceptEntry>>;

    /// Ontological category of a concept set (e.g. "Person/Thing").
    ///
    /// Fails if the concept set is absent from the category table.
    fn category_of(&self, concept_set_id: &str) -> Result<&str>;
}
