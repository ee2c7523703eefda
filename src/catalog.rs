//! Resource loading for the product catalogs.
//!
//! Each view loads its own catalog from the content root:
//!
//! ```text
//! data/earring_attributes.csv ─┐
//!                               ├─ rayon::join ─→ filter ─→ join ─→ Vec<CatalogItem>
//! data/earring_descriptions.txt┘
//!
//! data/soap_products.json ─────────────────────────────────→ Vec<Product>
//! data/locations.json (optional) ──────────────────────────→ Locations
//! ```
//!
//! ## Failure Handling
//!
//! A load either fails with a [`LoadError`] or yields a non-empty catalog.
//! Failures are view-scoped: [`LoadedCatalog::load_or_placeholder`] logs the
//! error, substitutes a small placeholder dataset, and records the message so
//! the generated page can show an inline notice. Nothing here aborts the build.

use crate::classify::Collection;
use crate::config::{CatalogConfig, DataConfig};
use crate::exclusion;
use crate::records;
use crate::types::{CatalogItem, Locations, Product, ProductType};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {resource}: {source}")]
    Fetch {
        resource: String,
        source: std::io::Error,
    },
    #[error("failed to parse {resource}: {message}")]
    Parse { resource: String, message: String },
    #[error("no items found in {resource}")]
    EmptyResult { resource: String },
}

impl LoadError {
    /// Whether the resource could not be retrieved or understood, as opposed
    /// to being readable but empty.
    pub fn is_fetch_error(&self) -> bool {
        matches!(self, LoadError::Fetch { .. } | LoadError::Parse { .. })
    }
}

/// A catalog as presented by one view: the real items, or a placeholder set
/// together with the message of the error that caused the substitution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadedCatalog<T> {
    pub items: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> LoadedCatalog<T> {
    pub fn loaded(items: Vec<T>) -> Self {
        Self { items, error: None }
    }

    pub fn is_placeholder(&self) -> bool {
        self.error.is_some()
    }

    /// Run `load`; on failure log the error and fall back to `placeholder`.
    pub fn load_or_placeholder(
        view: &str,
        load: impl FnOnce() -> Result<Vec<T>, LoadError>,
        placeholder: impl FnOnce() -> Vec<T>,
    ) -> Self {
        match load() {
            Ok(items) => Self::loaded(items),
            Err(e) => {
                tracing::error!(view, error = %e, "catalog load failed, using placeholder data");
                Self {
                    items: placeholder(),
                    error: Some(e.to_string()),
                }
            }
        }
    }
}

/// What the exclusion filter dropped while building the jewelry catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterReport {
    #[serde(default)]
    pub excluded: Vec<String>,
    #[serde(default)]
    pub capped: Vec<String>,
}

/// Result of a successful jewelry load.
#[derive(Debug, Clone, PartialEq)]
pub struct EarringLoad {
    pub items: Vec<CatalogItem>,
    pub report: FilterReport,
}

fn read_resource(root: &Path, relative: &str) -> Result<String, LoadError> {
    fs::read_to_string(root.join(relative)).map_err(|source| LoadError::Fetch {
        resource: relative.to_string(),
        source,
    })
}

/// Load the jewelry catalog.
///
/// Both resources are read concurrently and joined once both resolve; a
/// failure of either fails the whole load.
pub fn load_earrings(
    root: &Path,
    data: &DataConfig,
    catalog: &CatalogConfig,
) -> Result<EarringLoad, LoadError> {
    let (attributes, descriptions) = rayon::join(
        || read_resource(root, &data.attributes),
        || read_resource(root, &data.descriptions),
    );
    let attributes = attributes?;
    let descriptions = descriptions?;

    let rows = records::parse_attributes(&attributes).map_err(|e| LoadError::Parse {
        resource: data.attributes.clone(),
        message: e.to_string(),
    })?;
    let descriptions = records::parse_descriptions(&descriptions);

    let outcome = exclusion::apply(catalog.loader, &catalog.exclusion_filter(), rows);
    let items = records::join(&outcome.kept, &descriptions, &catalog.item_defaults());
    if items.is_empty() {
        return Err(LoadError::EmptyResult {
            resource: data.attributes.clone(),
        });
    }

    tracing::info!(
        items = items.len(),
        excluded = outcome.excluded.len(),
        capped = outcome.capped.len(),
        "loaded jewelry catalog"
    );
    Ok(EarringLoad {
        items,
        report: FilterReport {
            excluded: outcome.excluded,
            capped: outcome.capped,
        },
    })
}

/// Load the skincare products, passed through as-is.
pub fn load_products(root: &Path, data: &DataConfig) -> Result<Vec<Product>, LoadError> {
    let text = read_resource(root, &data.products)?;
    let products: Vec<Product> = serde_json::from_str(&text).map_err(|e| LoadError::Parse {
        resource: data.products.clone(),
        message: e.to_string(),
    })?;
    if products.is_empty() {
        return Err(LoadError::EmptyResult {
            resource: data.products.clone(),
        });
    }
    tracing::info!(items = products.len(), "loaded skincare products");
    Ok(products)
}

/// Load markets and stores. The file is optional: absent or unreadable means
/// nothing is listed.
pub fn load_locations(root: &Path, data: &DataConfig) -> Locations {
    let path = root.join(&data.locations);
    if !path.exists() {
        tracing::debug!(resource = %data.locations, "no locations file");
        return Locations::default();
    }
    let parsed = read_resource(root, &data.locations).and_then(|text| {
        serde_json::from_str::<Locations>(&text).map_err(|e| LoadError::Parse {
            resource: data.locations.clone(),
            message: e.to_string(),
        })
    });
    match parsed {
        Ok(locations) => locations,
        Err(e) => {
            tracing::warn!(error = %e, "ignoring locations file");
            Locations::default()
        }
    }
}

// =============================================================================
// Placeholder datasets
// =============================================================================

/// Shown in the jewelry view when the real catalog cannot be loaded.
pub fn placeholder_earrings() -> Vec<CatalogItem> {
    vec![CatalogItem {
        filename: "rose_gold_cascade".to_string(),
        title: "Cascade of Light".to_string(),
        medium: "Wearable Sculpture".to_string(),
        materials: "Sterling Silver, Rose Gold, Light".to_string(),
        dimensions: "2.5\" × 0.8\"".to_string(),
        artist_statement: "An exploration of how precious metals can capture and reflect the \
            ephemeral quality of falling light. Each drop represents a moment suspended in time."
            .to_string(),
        image: "https://images.unsplash.com/photo-1535632066927-ab7c9ab60908?w=500&h=600&fit=crop"
            .to_string(),
        collection: Collection::SilverSeries,
        year: "2024".to_string(),
    }]
}

/// Shown in the skincare view when the product list cannot be loaded.
pub fn placeholder_products() -> Vec<Product> {
    vec![
        Product {
            id: "lavender-dreams-soap".to_string(),
            name: "Lavender Dreams".to_string(),
            kind: ProductType::Soap,
            scent: "Lavender & Chamomile".to_string(),
            ingredients: [
                "Olive Oil",
                "Coconut Oil",
                "Lavender Essential Oil",
                "Chamomile",
                "Shea Butter",
            ]
            .map(String::from)
            .to_vec(),
            benefits: "Calming and moisturizing, perfect for sensitive skin".to_string(),
            description: "Hand-poured with organic lavender from local farms, this gentle soap \
                brings the tranquility of a summer garden to your daily routine."
                .to_string(),
            image: "https://images.unsplash.com/photo-1556228720-195a672e8a03?w=500&h=600&fit=crop"
                .to_string(),
            collection: "Botanical Bliss".to_string(),
        },
        Product {
            id: "citrus-burst-soap".to_string(),
            name: "Citrus Burst".to_string(),
            kind: ProductType::Soap,
            scent: "Orange & Lemongrass".to_string(),
            ingredients: [
                "Coconut Oil",
                "Palm Oil",
                "Orange Essential Oil",
                "Lemongrass",
                "Vitamin E",
            ]
            .map(String::from)
            .to_vec(),
            benefits: "Energizing and cleansing, great for morning routines".to_string(),
            description: "Bright and invigorating, this soap awakens the senses with fresh \
                citrus oils and natural exfoliating properties."
                .to_string(),
            image: "https://images.unsplash.com/photo-1571781926291-c477ebfd024b?w=500&h=600&fit=crop"
                .to_string(),
            collection: "Energizing Essentials".to_string(),
        },
    ]
}
