// Vector file output for rendered figures.
//
// Figures are drawn with plotters' SVG backend into a String. plotters can
// only rotate text by multiples of 90 degrees, so tilted axis labels are
// appended to the finished document as rotated <text> elements. The SVG is
// then written as-is for `.svg` targets, or converted to PDF otherwise.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use svg2pdf::usvg;
use tracing::{debug, info};

/// Output format, chosen by the target's file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorFormat {
    Svg,
    Pdf,
}

impl VectorFormat {
    /// `.svg` (any case) selects SVG; everything else is PDF.
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => VectorFormat::Svg,
            _ => VectorFormat::Pdf,
        }
    }
}

/// A text label anchored at its end and rotated about that anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct RotatedLabel {
    pub text: String,
    pub x: i32,
    pub y: i32,
    /// Degrees, negative is counter-clockwise
    pub angle: f64,
    pub font_size: u32,
}

impl RotatedLabel {
    fn to_svg(&self) -> String {
        format!(
            r##"<text x="{x}" y="{y}" font-family="sans-serif" font-size="{size}" fill="#000000" text-anchor="end" dominant-baseline="middle" transform="rotate({angle}, {x}, {y})">{text}</text>"##,
            x = self.x,
            y = self.y,
            size = self.font_size,
            angle = self.angle,
            text = escape_xml(&self.text),
        )
    }
}

/// Append rotated labels just before the closing `</svg>` tag.
pub fn splice_labels(mut svg: String, labels: &[RotatedLabel]) -> String {
    if labels.is_empty() {
        return svg;
    }

    let fragment: String = labels
        .iter()
        .map(|label| label.to_svg() + "\n")
        .collect();

    match svg.rfind("</svg>") {
        Some(pos) => svg.insert_str(pos, &fragment),
        None => svg.push_str(&fragment),
    }
    svg
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Write a rendered figure to `path`, replacing any existing file.
pub fn write_figure(path: &Path, svg: &str) -> Result<()> {
    let format = VectorFormat::for_path(path);
    let bytes = match format {
        VectorFormat::Svg => svg.as_bytes().to_vec(),
        VectorFormat::Pdf => svg_to_pdf(svg)?,
    };

    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    file.write_all(&bytes)
        .and_then(|_| file.flush())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!(path = %path.display(), ?format, bytes = bytes.len(), "Wrote figure");
    Ok(())
}

/// Families tried, in order, for the generic `sans-serif` used by every label.
const SANS_FAMILIES: &[&str] = &[
    "Arial",
    "Helvetica",
    "DejaVu Sans",
    "Liberation Sans",
    "Noto Sans",
    "FreeSans",
    "Nimbus Sans",
    "Roboto",
    "Open Sans",
    "Ubuntu",
    "Cantarell",
];

/// Pick an installed family for `sans-serif`.
///
/// usvg maps the generic family to Arial and silently drops text it cannot
/// resolve, so the family has to exist in `db`. Falls back to any family with
/// "Sans" in its name.
fn sans_serif_family(db: &usvg::fontdb::Database) -> Option<String> {
    let installed: Vec<&str> = db
        .faces()
        .flat_map(|face| face.families.iter().map(|(name, _)| name.as_str()))
        .collect();

    SANS_FAMILIES
        .iter()
        .find(|family| installed.contains(*family))
        .map(|family| family.to_string())
        .or_else(|| {
            installed
                .iter()
                .find(|name| name.contains("Sans"))
                .map(|name| name.to_string())
        })
}

fn svg_to_pdf(svg: &str) -> Result<Vec<u8>> {
    let mut options = usvg::Options::default();
    let fontdb = options.fontdb_mut();
    fontdb.load_system_fonts();
    let family = sans_serif_family(fontdb).ok_or_else(|| {
        anyhow!(
            "No sans-serif font found for PDF text (tried {} and any \"Sans\" family)",
            SANS_FAMILIES.join(", ")
        )
    })?;
    debug!(%family, faces = fontdb.len(), "Resolved sans-serif font");
    fontdb.set_sans_serif_family(family);

    let tree = usvg::Tree::from_str(svg, &options).context("Failed to parse rendered SVG")?;
    svg2pdf::to_pdf(
        &tree,
        svg2pdf::ConversionOptions::default(),
        svg2pdf::PageOptions::default(),
    )
    .map_err(|e| anyhow!("Failed to convert figure to PDF: {e}"))
}
