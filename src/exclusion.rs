//! Exclusion and rate-limit filtering of attribute rows.
//!
//! Runs before [`crate::records::join`] and decides which photos make it into
//! the jewelry catalog at all:
//!
//! 1. **Denylist**: rows whose filename (extension included) matches an entry,
//!    ignoring case, are dropped unconditionally.
//! 2. **Dice cap**: the dice sub-theme is limited to the first `dice_cap`
//!    rows in source order. Detection is the classifier's dice rule
//!    ([`crate::classify::is_dice`]) applied to the raw fields.
//!
//! The filter is stateful over the row sequence, so callers must feed rows in
//! their original order to get reproducible output.

use crate::records::RawAttributeRow;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Maximum number of dice pieces admitted by default.
pub const DEFAULT_DICE_CAP: usize = 3;

/// Photos held back from the public catalog.
pub const DEFAULT_EXCLUDED: &[&str] = &[
    "brown_orange_red_white_earrings.jpg",
    "black_blue_green_pink_earrings.jpg",
    "black_blue_dice_orange_earrings.jpg",
    "black_silver_earrings_1.jpg",
    "black_gold_silver_earrings.jpg",
    "black_gold_silver_earrings_1.jpg",
    "black_earrings.jpg",
    "silver_purple_shell_jellyfish_earrings.jpg",
    "bead_black_blue_white_earrings.jpg",
    "black_blue_white_earrings.jpg",
    "black_blue_crystal_white_earrings.jpg",
    "black_blue_white_earrings_1.jpg",
    "blue_gold_white_earrings.jpg",
    "blue_crystal_gold_white_earrings.jpg",
    "black_blue_crystal_green_white_earrings.jpg",
    "black_blue_earrings.jpg",
    "black_blue_earrings_1.jpg",
    "black_blue_earrings_2.jpg",
    "black_blue_earrings_3.jpg",
    "black_blue_silver_earrings.jpg",
    "blue_gold_purple_earrings.jpg",
    "purple_silver_earrings.jpg",
    "gold_pink_purple_silver_earrings.jpg",
    "gold_pink_white_earrings.jpg",
    "pink_white_earrings.jpg",
    "pink_silver_white_earrings.jpg",
    "blue_green_crystal_cube_earrings.jpg",
];

/// Which loader variant builds the jewelry catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoaderMode {
    /// Apply the denylist and the dice cap.
    #[default]
    Filtered,
    /// Pass every row through.
    Unfiltered,
}

/// Rows that survived the filter, plus what was dropped and why.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOutcome {
    pub kept: Vec<RawAttributeRow>,
    /// Filenames dropped by the denylist.
    pub excluded: Vec<String>,
    /// Filenames dropped because the dice cap was already reached.
    pub capped: Vec<String>,
}

/// Denylist plus dice cap.
#[derive(Debug, Clone)]
pub struct ExclusionFilter {
    denylist: HashSet<String>,
    dice_cap: usize,
}

impl Default for ExclusionFilter {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED.iter().copied(), DEFAULT_DICE_CAP)
    }
}

impl ExclusionFilter {
    pub fn new<'a>(denylist: impl IntoIterator<Item = &'a str>, dice_cap: usize) -> Self {
        Self {
            denylist: denylist
                .into_iter()
                .map(|name| name.trim().to_lowercase())
                .collect(),
            dice_cap,
        }
    }

    /// Whether a filename is on the denylist (case-insensitive).
    pub fn is_excluded(&self, filename: &str) -> bool {
        self.denylist.contains(&filename.trim().to_lowercase())
    }

    /// Filter rows in source order.
    pub fn filter(&self, rows: Vec<RawAttributeRow>) -> FilterOutcome {
        let mut outcome = FilterOutcome::default();
        let mut dice_count = 0usize;

        for row in rows {
            if self.is_excluded(&row.filename) {
                outcome.excluded.push(row.filename);
                continue;
            }
            if row.is_dice() {
                if dice_count >= self.dice_cap {
                    outcome.capped.push(row.filename);
                    continue;
                }
                dice_count += 1;
            }
            outcome.kept.push(row);
        }

        tracing::debug!(
            kept = outcome.kept.len(),
            excluded = outcome.excluded.len(),
            capped = outcome.capped.len(),
            "filtered attribute rows"
        );
        outcome
    }
}

/// Apply the loader variant selected by `mode`.
pub fn apply(mode: LoaderMode, filter: &ExclusionFilter, rows: Vec<RawAttributeRow>) -> FilterOutcome {
    match mode {
        LoaderMode::Filtered => filter.filter(rows),
        LoaderMode::Unfiltered => FilterOutcome {
            kept: rows,
            ..FilterOutcome::default()
        },
    }
}
