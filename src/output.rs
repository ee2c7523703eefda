//! CLI output formatting for all pipeline stages.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every entity (piece, product, page) is its semantic identity, its
//! positional index and title, with source files shown as secondary context
//! via indented `Source:` lines.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Jewelry (16 pieces)
//!     Source: data/earring_attributes.csv + data/earring_descriptions.txt
//!     001 Circle Gold Earrings [Signature Collection]
//!     002 Bead Blue Silver Earrings [Beaded Collection]
//!     Excluded: black_earrings.jpg
//!     Dice cap: white_dice_earrings.jpg
//!
//! Skincare (10 products)
//!     Source: data/soap_products.json
//!     001 Lavender Dreams [soap]
//!
//! Locations
//!     2 markets, 1 store
//!
//! Pages
//!     001 Meet Gina
//!         Source: about.md
//!
//! Config
//!     config.toml
//!     images/
//! ```
//!
//! ## Generate
//!
//! ```text
//! index.html
//! jewelry/ (9 pages)
//! skincare/ (5 pages)
//! about.html
//!
//! Generated 18 pages, 8 images
//! ```
//!
//! ## Browse
//!
//! ```text
//! Jewelry · all · "silver"
//! 001 Silver Earrings [Silver Series]
//! Showing 2 of 2 pieces
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure:
//! no I/O, no side effects.

use crate::appointment::Receipt;
use crate::catalog::LoadedCatalog;
use crate::generate::GenerateReport;
use crate::presenter::{CatalogView, Searchable};
use crate::scan::Manifest;
use std::path::Path;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format a catalog header: label with item count.
///
/// ```text
/// Jewelry (16 pieces)
/// Skincare (1 product)
/// ```
fn entity_header(title: &str, count: usize, noun: &str) -> String {
    let noun = if count == 1 {
        noun.trim_end_matches('s')
    } else {
        noun
    };
    format!("{} ({} {})", title, count, noun)
}

/// Format an item line: index, title, and category tag.
fn item_line(index: usize, title: &str, category: &str) -> String {
    format!("{} {} [{}]", format_index(index), title, category)
}

fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}...", &text[..cut]),
    }
}

/// Lines for one loaded catalog: header, sources, items, placeholder notice.
fn catalog_lines<T: Searchable>(
    title: &str,
    noun: &str,
    sources: &str,
    catalog: &LoadedCatalog<T>,
    item_title: impl Fn(&T) -> &str,
) -> Vec<String> {
    let mut lines = vec![entity_header(title, catalog.items.len(), noun)];
    lines.push(format!("{}Source: {}", indent(1), sources));
    if let Some(error) = &catalog.error {
        lines.push(format!(
            "{}Placeholder data: {}",
            indent(1),
            truncate_desc(error, 80)
        ));
    }
    for (i, item) in catalog.items.iter().enumerate() {
        lines.push(format!(
            "{}{}",
            indent(1),
            item_line(i + 1, item_title(item), item.category())
        ));
    }
    lines
}

// ============================================================================
// Stage 1: Scan output
// ============================================================================

/// Format scan stage output showing the loaded catalogs.
pub fn format_scan_output(manifest: &Manifest, source_root: &Path) -> Vec<String> {
    let data = &manifest.config.data;
    let mut lines = catalog_lines(
        "Jewelry",
        "pieces",
        &format!("{} + {}", data.attributes, data.descriptions),
        &manifest.jewelry,
        |item| item.title.as_str(),
    );
    for name in &manifest.filter_report.excluded {
        lines.push(format!("{}Excluded: {}", indent(1), name));
    }
    for name in &manifest.filter_report.capped {
        lines.push(format!("{}Dice cap: {}", indent(1), name));
    }

    lines.push(String::new());
    lines.extend(catalog_lines(
        "Skincare",
        "products",
        &data.products,
        &manifest.skincare,
        |product| product.name.as_str(),
    ));

    lines.push(String::new());
    lines.push("Locations".to_string());
    lines.push(format!(
        "{}{}, {}",
        indent(1),
        plural(manifest.locations.markets.len(), "market", "markets"),
        plural(manifest.locations.stores.len(), "store", "stores")
    ));

    if let Some(about) = &manifest.about {
        lines.push(String::new());
        lines.push("Pages".to_string());
        lines.push(format!("{}{} {}", indent(1), format_index(1), about.title));
        lines.push(format!("{}Source: {}.md", indent(2), about.slug));
    }

    // Config section
    lines.push(String::new());
    lines.push("Config".to_string());
    let config_path = source_root.join("config.toml");
    if config_path.exists() {
        lines.push(format!("{}config.toml", indent(1)));
    }
    let assets_path = source_root.join(&manifest.config.assets_dir);
    if assets_path.is_dir() {
        lines.push(format!("{}{}/", indent(1), manifest.config.assets_dir));
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(manifest: &Manifest, source_root: &Path) {
    for line in format_scan_output(manifest, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage 2: Generate output
// ============================================================================

/// Format generate stage output: top-level pages, then one line per gallery
/// directory with its page count.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut dirs: Vec<(&str, usize)> = Vec::new();

    for page in &report.pages {
        match page.split_once('/') {
            None => lines.push(page.clone()),
            Some((dir, _)) => match dirs.iter_mut().find(|(d, _)| *d == dir) {
                Some((_, count)) => *count += 1,
                None => {
                    dirs.push((dir, 1));
                    lines.push(format!("{dir}/"));
                }
            },
        }
    }

    // Fill in page counts on the directory lines
    for line in lines.iter_mut() {
        if let Some(dir) = line.strip_suffix('/')
            && let Some((_, count)) = dirs.iter().find(|(d, _)| *d == dir)
        {
            *line = format!("{}/ ({})", dir, plural(*count, "page", "pages"));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {}, {}",
        plural(report.pages.len(), "page", "pages"),
        plural(report.images_copied, "image", "images")
    ));
    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Browse output
// ============================================================================

/// Format the presenter's current state: heading, displayed items, counts.
pub fn format_browse_output<T: Searchable>(
    heading: &str,
    noun: &str,
    view: &CatalogView<T>,
    item_title: impl Fn(&T) -> &str,
) -> Vec<String> {
    let mut header = format!("{} · {}", heading, view.category());
    if !view.search().is_empty() {
        header.push_str(&format!(" · \"{}\"", view.search()));
    }
    let mut lines = vec![header];

    for (i, item) in view.displayed().into_iter().enumerate() {
        lines.push(item_line(i + 1, item_title(item), item.category()));
    }
    lines.push(format!(
        "Showing {} of {} {}",
        view.displayed_count(),
        view.filtered_count(),
        noun
    ));
    if view.has_more() {
        lines.push(format!("Load more: {} remaining", view.remaining_count()));
    }
    lines
}

pub fn print_browse_output<T: Searchable>(
    heading: &str,
    noun: &str,
    view: &CatalogView<T>,
    item_title: impl Fn(&T) -> &str,
) {
    for line in format_browse_output(heading, noun, view, item_title) {
        println!("{}", line);
    }
}

// ============================================================================
// Appointment output
// ============================================================================

pub fn format_receipt(receipt: &Receipt) -> Vec<String> {
    let mut lines = vec!["Appointment request accepted".to_string()];
    lines.push(format!("{}Receipt: {}", indent(1), receipt.id));
    match &receipt.destination {
        Some(path) => lines.push(format!("{}Queued: {}", indent(1), path.display())),
        None => lines.push(format!("{}Delivered to log", indent(1))),
    }
    lines
}

pub fn print_receipt(receipt: &Receipt) {
    for line in format_receipt(receipt) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
