// Output — the text report, the two figures, and the terminal run summary.

pub mod barchart;
pub mod heatmap;
pub mod palette;
pub mod report;
pub mod terminal;
pub mod vector;

pub use barchart::render_barchart;
pub use heatmap::render_heatmap;
pub use report::write_report;
