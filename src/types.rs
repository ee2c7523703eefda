//! Shared types used across both pipeline stages.
//!
//! These types are serialized to JSON by the scan stage and read back by the
//! generate stage, so they must round-trip through serde unchanged. Field
//! names follow the camelCase shape of the site's JSON resources.

use crate::classify::Collection;
use serde::{Deserialize, Serialize};

/// One piece of jewelry, joined from the attribute table and descriptions.
///
/// Immutable once built by [`crate::records::join`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Catalog key: image filename with extension stripped.
    pub filename: String,
    /// Humanized filename (`circle_gold_earrings` → "Circle Gold Earrings").
    pub title: String,
    pub medium: String,
    pub materials: String,
    pub dimensions: String,
    /// Matched description, or the fixed fallback statement.
    pub artist_statement: String,
    /// Site-relative image path including the original extension.
    pub image: String,
    pub collection: Collection,
    pub year: String,
}

/// Skincare product type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductType {
    Soap,
    LipBalm,
}

impl ProductType {
    pub const ALL: [ProductType; 2] = [ProductType::Soap, ProductType::LipBalm];

    /// Wire value, as it appears in `soap_products.json`.
    pub fn as_str(self) -> &'static str {
        match self {
            ProductType::Soap => "soap",
            ProductType::LipBalm => "lip-balm",
        }
    }

    /// Button label in the skincare view.
    pub fn label(self) -> &'static str {
        match self {
            ProductType::Soap => "Soaps",
            ProductType::LipBalm => "Lip Balms",
        }
    }
}

impl std::fmt::Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A soap or lip balm, loaded wholesale from `soap_products.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ProductType,
    pub scent: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub benefits: String,
    #[serde(default)]
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub collection: String,
}

/// How often a market appearance happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketStatus {
    Upcoming,
    Regular,
    Seasonal,
}

impl MarketStatus {
    pub fn label(self) -> &'static str {
        match self {
            MarketStatus::Upcoming => "Next Up",
            MarketStatus::Regular => "Monthly",
            MarketStatus::Seasonal => "Seasonal",
        }
    }
}

/// A farmers market or fair where the work is sold in person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    pub id: String,
    pub name: String,
    pub location: String,
    pub address: String,
    pub schedule: String,
    pub next_date: String,
    pub time: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub status: MarketStatus,
}

/// A shop carrying a permanent display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub description: String,
    pub display_type: String,
    pub hours: String,
}

/// Contents of `locations.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Locations {
    pub markets: Vec<Market>,
    pub stores: Vec<Store>,
}

impl Locations {
    pub fn is_empty(&self) -> bool {
        self.markets.is_empty() && self.stores.is_empty()
    }
}

/// A page generated from a markdown file in the content root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Title from first `# heading` in markdown, or the slug-derived fallback
    pub title: String,
    /// URL slug (filename stem)
    pub slug: String,
    /// Raw markdown content
    pub body: String,
}

/// One slide of the landing-page carousel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// Site-relative link to the section's detail view.
    pub path: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub preview_images: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_parses_from_site_json() {
        let json = r#"{
            "id": "lavender-dreams-soap",
            "name": "Lavender Dreams",
            "type": "soap",
            "scent": "Lavender & Chamomile",
            "ingredients": ["Olive Oil", "Shea Butter"],
            "benefits": "Calming",
            "description": "Hand-poured.",
            "image": "/images/lavender.jpeg",
            "collection": "Botanical Bliss"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.kind, ProductType::Soap);
        assert_eq!(product.ingredients, vec!["Olive Oil", "Shea Butter"]);
    }

    #[test]
    fn lip_balm_type_is_kebab_case() {
        let kind: ProductType = serde_json::from_str(r#""lip-balm""#).unwrap();
        assert_eq!(kind, ProductType::LipBalm);
        assert_eq!(kind.to_string(), "lip-balm");
    }

    #[test]
    fn unknown_product_type_is_rejected() {
        let result: Result<ProductType, _> = serde_json::from_str(r#""candle""#);
        assert!(result.is_err());
    }

    #[test]
    fn catalog_item_serializes_camel_case() {
        let item = CatalogItem {
            filename: "silver_earrings".to_string(),
            title: "Silver Earrings".to_string(),
            medium: "Handcrafted Earrings".to_string(),
            materials: "silver wire".to_string(),
            dimensions: "Standard".to_string(),
            artist_statement: "Shiny.".to_string(),
            image: "/images/silver_earrings.jpg".to_string(),
            collection: Collection::SilverSeries,
            year: "2024".to_string(),
        };
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains(r#""artistStatement":"Shiny.""#));
        assert!(json.contains(r#""collection":"Silver Series""#));
    }

    #[test]
    fn locations_default_to_empty_lists() {
        let locations: Locations = serde_json::from_str(r#"{"stores": []}"#).unwrap();
        assert!(locations.is_empty());
    }
}
