//! Content scanning and manifest generation.
//!
//! Stage 1 of the build pipeline. Reads the content directory, loads every
//! catalog, and produces a structured manifest that the generate stage
//! consumes.
//!
//! ## Directory Structure
//!
//! ```text
//! content/                          # Content root
//! ├── config.toml                   # Site configuration (optional)
//! ├── about.md                      # Artist profile (optional)
//! ├── data/
//! │   ├── earring_attributes.csv    # Filename, Material, Size, Color Palette, Theme or Motif
//! │   ├── earring_descriptions.txt  # filename: statement
//! │   ├── soap_products.json        # Skincare products
//! │   └── locations.json            # Markets and stores (optional)
//! └── images/                       # Copied to the output as-is
//!     └── compressed/               # Small versions used as carousel previews
//! ```
//!
//! ## Output
//!
//! Produces a [`Manifest`] containing:
//! - Landing-page sections (jewelry, skincare, about, where-to-find)
//! - The jewelry and skincare catalogs, each either loaded or a placeholder
//! - Markets and stores
//! - The about page, if present
//! - Site configuration
//!
//! ## Failure Handling
//!
//! Only problems with the site as a whole are errors here: a missing content
//! root or an invalid `config.toml`. A catalog that cannot be loaded is
//! replaced by its placeholder dataset and the failure is recorded in the
//! manifest, so the rest of the site still builds.

use crate::catalog::{self, FilterReport, LoadedCatalog};
use crate::config::{self, SiteConfig};
use crate::types::{CatalogItem, Locations, Page, Product, Section};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Content directory not found: {0}")]
    MissingRoot(PathBuf),
}

/// Manifest output from the scan stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub sections: Vec<Section>,
    pub jewelry: LoadedCatalog<CatalogItem>,
    #[serde(default)]
    pub filter_report: FilterReport,
    pub skincare: LoadedCatalog<Product>,
    #[serde(default)]
    pub locations: Locations,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<Page>,
    pub config: SiteConfig,
}

pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::MissingRoot(root.to_path_buf()));
    }

    // Load site config (uses defaults if config.toml doesn't exist)
    let config = config::load_config(root)?;

    let mut filter_report = FilterReport::default();
    let jewelry = LoadedCatalog::load_or_placeholder(
        "jewelry",
        || {
            catalog::load_earrings(root, &config.data, &config.catalog).map(|load| {
                filter_report = load.report;
                load.items
            })
        },
        catalog::placeholder_earrings,
    );
    let skincare = LoadedCatalog::load_or_placeholder(
        "skincare",
        || catalog::load_products(root, &config.data),
        catalog::placeholder_products,
    );
    let locations = catalog::load_locations(root, &config.data);
    let about = parse_about(root)?;

    let sections = build_sections(&config, &jewelry.items, &skincare.items, about.is_some());

    Ok(Manifest {
        sections,
        jewelry,
        filter_report,
        skincare,
        locations,
        about,
        config,
    })
}

/// Write the manifest as pretty JSON to `<temp_dir>/catalog.json`.
pub fn write_manifest(manifest: &Manifest, temp_dir: &Path) -> Result<PathBuf, ScanError> {
    fs::create_dir_all(temp_dir)?;
    let path = temp_dir.join("catalog.json");
    let json = serde_json::to_string_pretty(manifest)?;
    fs::write(&path, json)?;
    tracing::debug!(path = %path.display(), "wrote catalog manifest");
    Ok(path)
}

/// Parse `about.md` from the content root.
///
/// The title comes from the first `# heading`, falling back to "About".
fn parse_about(root: &Path) -> Result<Option<Page>, ScanError> {
    let path = root.join("about.md");
    if !path.is_file() {
        return Ok(None);
    }
    let content = fs::read_to_string(&path)?;
    let title = content
        .lines()
        .find(|line| line.starts_with("# "))
        .map(|line| line.trim_start_matches("# ").trim().to_string())
        .unwrap_or_else(|| "About".to_string());

    Ok(Some(Page {
        title,
        slug: "about".to_string(),
        body: content,
    }))
}

/// Small carousel version of a site image: `/images/x.jpg` → `/images/compressed/x.jpg`.
///
/// Images hosted elsewhere have no compressed version.
fn preview_path(image: &str) -> Option<String> {
    let name = image.strip_prefix("/images/")?;
    if name.is_empty() || name.starts_with("compressed/") {
        return None;
    }
    Some(format!("/images/compressed/{name}"))
}

fn previews<'a>(images: impl Iterator<Item = &'a str>, limit: usize) -> Vec<String> {
    images.filter_map(preview_path).take(limit).collect()
}

/// The landing-page carousel, in display order.
fn build_sections(
    config: &SiteConfig,
    jewelry: &[CatalogItem],
    skincare: &[Product],
    has_about: bool,
) -> Vec<Section> {
    let limit = config.gallery.preview_count;
    let mut sections = vec![
        Section {
            id: "jewelry".to_string(),
            title: "Wearable Sculptures".to_string(),
            subtitle: "Handcrafted Jewelry Collection".to_string(),
            description: "Each piece emerges from the intersection of medical precision and \
                artistic intuition: delicate sculptures that carry the healing energy of \
                skilled hands."
                .to_string(),
            path: "jewelry/".to_string(),
            preview_images: previews(jewelry.iter().map(|i| i.image.as_str()), limit),
        },
        Section {
            id: "skincare".to_string(),
            title: "Lippie & Lather".to_string(),
            subtitle: "Botanical Skincare Artistry".to_string(),
            description: "Hand-poured with the same healing intention that flows through \
                decades of caring for others, where botanical wisdom meets artisanal craft."
                .to_string(),
            path: "skincare/".to_string(),
            preview_images: previews(skincare.iter().map(|p| p.image.as_str()), limit),
        },
    ];

    if has_about {
        sections.push(Section {
            id: "about".to_string(),
            title: "The Artist".to_string(),
            subtitle: format!("{} • Healer & Creator", config.site.artist),
            description: "Three decades of healing work transformed into artistic design, \
                where the precision of healthcare meets the flow of creative expression."
                .to_string(),
            path: "about.html".to_string(),
            preview_images: Vec::new(),
        });
    }

    sections.push(Section {
        id: "where-to-find".to_string(),
        title: "Where to Find Us".to_string(),
        subtitle: "Markets & Shops".to_string(),
        description: "Meet the work in person at local farmers markets and the shops that \
            carry a permanent display."
            .to_string(),
        path: "where-to-find.html".to_string(),
        preview_images: Vec::new(),
    });

    sections
}
