//! Shared test utilities for the adorna-site test suite.
//!
//! Provides fixture setup and lookup helpers that work with scan-phase data
//! structures (`Manifest`, `CatalogItem`, `Product`, `Section`).
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let manifest = scan(tmp.path()).unwrap();
//!
//! let item = find_item(&manifest, "circle_gold_earrings");
//! assert_eq!(item.title, "Circle Gold Earrings");
//! assert_eq!(section_ids(&manifest), vec!["jewelry", "skincare", "about", "where-to-find"]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::scan::Manifest;
use crate::types::{CatalogItem, Product, Section};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Manifest lookups (panic with a clear message on miss)
// =========================================================================

/// Find a jewelry piece by catalog key. Panics if not found.
pub fn find_item<'a>(manifest: &'a Manifest, filename: &str) -> &'a CatalogItem {
    manifest
        .jewelry
        .items
        .iter()
        .find(|i| i.filename == filename)
        .unwrap_or_else(|| {
            let keys: Vec<&str> = manifest
                .jewelry
                .items
                .iter()
                .map(|i| i.filename.as_str())
                .collect();
            panic!("item '{filename}' not found. Available: {keys:?}")
        })
}

/// Find a skincare product by id. Panics if not found.
pub fn find_product<'a>(manifest: &'a Manifest, id: &str) -> &'a Product {
    manifest
        .skincare
        .items
        .iter()
        .find(|p| p.id == id)
        .unwrap_or_else(|| {
            let ids: Vec<&str> = manifest.skincare.items.iter().map(|p| p.id.as_str()).collect();
            panic!("product '{id}' not found. Available: {ids:?}")
        })
}

/// Find a carousel section by id. Panics if not found.
pub fn find_section<'a>(manifest: &'a Manifest, id: &str) -> &'a Section {
    manifest
        .sections
        .iter()
        .find(|s| s.id == id)
        .unwrap_or_else(|| {
            let ids = section_ids(manifest);
            panic!("section '{id}' not found. Available: {ids:?}")
        })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// Carousel section ids in display order.
pub fn section_ids(manifest: &Manifest) -> Vec<&str> {
    manifest.sections.iter().map(|s| s.id.as_str()).collect()
}

/// Jewelry catalog keys in catalog order.
pub fn item_keys(manifest: &Manifest) -> Vec<&str> {
    manifest
        .jewelry
        .items
        .iter()
        .map(|i| i.filename.as_str())
        .collect()
}
