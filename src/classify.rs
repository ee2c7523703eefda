//! Collection classification for jewelry rows.
//!
//! Each piece lands in exactly one collection. The rules are plain substring
//! tests over lower-cased fields and are **not** mutually exclusive, so the
//! order below is the tie-break: the first rule that matches wins.
//!
//! | # | Test | Collection |
//! |---|------|------------|
//! | 1 | theme has `dice`/`gaming`, or filename has `dice` | Dice |
//! | 2 | material has `bead`/`pearl` | Beaded Collection |
//! | 3 | material has `silver` and (`wire` or `metal`) | Silver Series |
//! | 4 | material has `copper`/`brass` | Signature Collection |
//! | 5 | material has `wood`/`leather`/`shell`/`seashell` | Natural Elements |
//! | 6 | color has `blue`/`green`, or theme has `ocean`/`seashell`/`jellyfish` | Ocean Whispers |
//! | 7 | anything else | Signature Collection |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of collection tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Collection {
    #[serde(rename = "Dice")]
    Dice,
    #[serde(rename = "Beaded Collection")]
    BeadedCollection,
    #[serde(rename = "Silver Series")]
    SilverSeries,
    #[default]
    #[serde(rename = "Signature Collection")]
    SignatureCollection,
    #[serde(rename = "Natural Elements")]
    NaturalElements,
    #[serde(rename = "Ocean Whispers")]
    OceanWhispers,
}

impl Collection {
    pub const ALL: [Collection; 6] = [
        Collection::Dice,
        Collection::BeadedCollection,
        Collection::SilverSeries,
        Collection::SignatureCollection,
        Collection::NaturalElements,
        Collection::OceanWhispers,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Collection::Dice => "Dice",
            Collection::BeadedCollection => "Beaded Collection",
            Collection::SilverSeries => "Silver Series",
            Collection::SignatureCollection => "Signature Collection",
            Collection::NaturalElements => "Natural Elements",
            Collection::OceanWhispers => "Ocean Whispers",
        }
    }

    /// Look up a collection by its display label (case-insensitive).
    pub fn from_label(label: &str) -> Option<Collection> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Dice-theme detection (rule 1). Shared with the rate-limit filter so both
/// agree on what counts as a dice piece.
pub fn is_dice(theme_or_motif: &str, filename: &str) -> bool {
    let theme = theme_or_motif.to_lowercase();
    theme.contains("dice") || theme.contains("gaming") || filename.to_lowercase().contains("dice")
}

/// Assign a collection from a row's raw fields. Empty strings stand in for
/// absent fields.
pub fn classify(
    material: &str,
    color_palette: &str,
    theme_or_motif: &str,
    filename: &str,
) -> Collection {
    let material = material.to_lowercase();
    let color = color_palette.to_lowercase();
    let theme = theme_or_motif.to_lowercase();

    if is_dice(&theme, filename) {
        Collection::Dice
    } else if contains_any(&material, &["bead", "pearl"]) {
        Collection::BeadedCollection
    } else if material.contains("silver") && contains_any(&material, &["wire", "metal"]) {
        Collection::SilverSeries
    } else if contains_any(&material, &["copper", "brass"]) {
        Collection::SignatureCollection
    } else if contains_any(&material, &["wood", "leather", "shell", "seashell"]) {
        Collection::NaturalElements
    } else if contains_any(&color, &["blue", "green"])
        || contains_any(&theme, &["ocean", "seashell", "jellyfish"])
    {
        Collection::OceanWhispers
    } else {
        Collection::SignatureCollection
    }
}

fn contains_any(field: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| field.contains(n))
}
