// Swadesh overlap: how many Swadesh nouns each comparative word-list shares.
//
// This is the library root. Data flows one way through the modules:
// catalog -> overlap -> output, driven end to end by pipeline.

pub mod catalog;
pub mod config;
pub mod overlap;
pub mod output;
pub mod pipeline;
