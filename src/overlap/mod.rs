// Overlap computation — reference noun extraction, per-list shared
// concepts, and the presence/absence matrix behind the heatmap.
//
// Everything here is pure: the catalog is only read, and results are built
// once and never mutated afterwards.

pub mod compute;
pub mod matrix;
pub mod nouns;

pub use compute::{compute_overlaps, ListOverlap, OverlapResult};
pub use matrix::HeatmapMatrix;
pub use nouns::{reference_nouns, ReferenceNounSet, NOUN_CATEGORY};
