//! Record joining for the jewelry catalog.
//!
//! The jewelry catalog is assembled from two hand-maintained resources:
//!
//! - **Attribute table** (`earring_attributes.csv`): one row per photo with
//!   the columns `Filename`, `Material`, `Size`, `Color Palette` and
//!   `Theme or Motif`. The header row names the fields.
//!
//! - **Descriptions** (`earring_descriptions.txt`): one artist statement per
//!   line, written as `filename: statement`. Only the first colon separates
//!   key from text, so statements may contain colons of their own.
//!
//! [`join`] merges the two by exact filename (extension included) and derives
//! the display fields of each [`CatalogItem`].
//!
//! ## Fallbacks
//!
//! Every field of a joined item is populated. Resolution per field, first
//! non-empty value wins:
//!
//! - **Materials**: `Material` column → "Mixed Materials"
//! - **Dimensions**: `Size` column → "Standard"
//! - **Artist statement**: matching description line → [`FALLBACK_STATEMENT`]

use crate::classify;
use crate::naming;
use crate::types::CatalogItem;
use std::collections::{HashMap, HashSet};

/// Statement used when a photo has no description line.
pub const FALLBACK_STATEMENT: &str =
    "A beautiful handcrafted piece made with love and attention to detail.";
const FALLBACK_MATERIALS: &str = "Mixed Materials";
const FALLBACK_DIMENSIONS: &str = "Standard";

/// One row of the attribute table. Missing columns read as empty strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawAttributeRow {
    pub filename: String,
    pub material: String,
    pub size: String,
    pub color_palette: String,
    pub theme_or_motif: String,
}

impl RawAttributeRow {
    /// Whether this row belongs to the dice sub-theme.
    pub fn is_dice(&self) -> bool {
        classify::is_dice(&self.theme_or_motif, &self.filename)
    }
}

/// Filename → artist statement.
pub type Descriptions = HashMap<String, String>;

/// Constant fields stamped onto every joined item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDefaults {
    pub medium: String,
    pub year: String,
    /// Site-relative directory holding the full-size photos.
    pub image_root: String,
}

impl Default for ItemDefaults {
    fn default() -> Self {
        Self {
            medium: "Handcrafted Earrings".to_string(),
            year: "2024".to_string(),
            image_root: "/images".to_string(),
        }
    }
}

/// Header names of the attribute table, in [`RawAttributeRow`] field order.
const COLUMNS: [&str; 5] = ["Filename", "Material", "Size", "Color Palette", "Theme or Motif"];

/// Parse the attribute table.
///
/// The first row is the header; columns are located by name. Blank lines are
/// skipped, a leading UTF-8 BOM is ignored, and rows with fewer cells than the
/// header are accepted (the missing cells read as empty).
pub fn parse_attributes(text: &str) -> Result<Vec<RawAttributeRow>, csv::Error> {
    let text = text.trim_start_matches('\u{FEFF}');
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let index = COLUMNS.map(|name| headers.iter().position(|h| h == name));

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let cell = |column: usize| -> String {
            index[column]
                .and_then(|i| record.get(i))
                .unwrap_or("")
                .to_string()
        };
        rows.push(RawAttributeRow {
            filename: cell(0),
            material: cell(1),
            size: cell(2),
            color_palette: cell(3),
            theme_or_motif: cell(4),
        });
    }
    Ok(rows)
}

/// Parse `filename: statement` lines.
///
/// Lines without a colon, or with nothing before it, are ignored. Later lines
/// for the same filename replace earlier ones.
pub fn parse_descriptions(text: &str) -> Descriptions {
    text.lines()
        .filter_map(|line| {
            let (key, value) = line.split_once(':')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            Some((key.to_string(), value.trim().to_string()))
        })
        .collect()
}

/// Pick the first non-empty candidate, trimmed.
fn first_non_empty(candidates: &[Option<&str>]) -> Option<String> {
    candidates
        .iter()
        .filter_map(|opt| opt.map(str::trim).filter(|s| !s.is_empty()))
        .map(String::from)
        .next()
}

/// Build one catalog item from a row and the description map.
pub fn build_item(
    row: &RawAttributeRow,
    descriptions: &Descriptions,
    defaults: &ItemDefaults,
) -> CatalogItem {
    let filename = row.filename.trim();
    let parsed = naming::parse_filename(filename);

    let artist_statement = first_non_empty(&[
        descriptions.get(filename).map(String::as_str),
        Some(FALLBACK_STATEMENT),
    ])
    .unwrap_or_else(|| FALLBACK_STATEMENT.to_string());

    CatalogItem {
        filename: parsed.stem,
        title: parsed.title,
        medium: defaults.medium.clone(),
        materials: first_non_empty(&[Some(row.material.as_str()), Some(FALLBACK_MATERIALS)])
            .unwrap_or_default(),
        dimensions: first_non_empty(&[Some(row.size.as_str()), Some(FALLBACK_DIMENSIONS)])
            .unwrap_or_default(),
        artist_statement,
        image: format!("{}/{}", defaults.image_root.trim_end_matches('/'), filename),
        collection: classify::classify(
            &row.material,
            &row.color_palette,
            &row.theme_or_motif,
            filename,
        ),
        year: defaults.year.clone(),
    }
}

/// Join attribute rows with their descriptions, preserving row order.
///
/// Rows without a filename are skipped. A filename that maps to an item key
/// already present (e.g. `a.jpg` and `a.jpeg`) is dropped so keys stay unique.
pub fn join(
    rows: &[RawAttributeRow],
    descriptions: &Descriptions,
    defaults: &ItemDefaults,
) -> Vec<CatalogItem> {
    let mut seen = HashSet::new();
    let mut items = Vec::with_capacity(rows.len());

    for row in rows {
        if row.filename.trim().is_empty() {
            tracing::debug!("skipping attribute row without a filename");
            continue;
        }
        let item = build_item(row, descriptions, defaults);
        if !seen.insert(item.filename.clone()) {
            tracing::warn!(filename = %row.filename, "duplicate catalog key, keeping first row");
            continue;
        }
        items.push(item);
    }
    items
}
