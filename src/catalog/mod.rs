// Concept catalog access — the read-only repository the overlap pipeline
// queries for concept lists and concept-set categories.

pub mod concepticon;
pub mod memory;
pub mod traits;

pub use concepticon::ConcepticonData;
pub use memory::InMemoryCatalog;
pub use traits::{ConceptCatalog, ConceptEntry};
