//! HTML site generation.
//!
//! Stage 2 of the build pipeline. Takes the catalog manifest and generates
//! the final static HTML site.
//!
//! ## Generated Pages
//!
//! - **Index page** (`/index.html`): carousel of the site sections
//! - **Gallery pages** (`/jewelry/`, `/skincare/`): presenter output, one
//!   page per "load more" step and per category
//! - **About page** (`/about.html`): optional markdown content converted to HTML
//! - **Where to find** (`/where-to-find.html`): markets and stores
//! - **Appointment page** (`/appointment.html`): request form
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── about.html
//! ├── where-to-find.html
//! ├── appointment.html
//! ├── jewelry/
//! │   ├── index.html              # first page, all collections
//! │   ├── page-2.html             # after one "load more"
//! │   └── silver-series/
//! │       └── index.html          # one collection
//! ├── skincare/
//! │   ├── index.html
//! │   ├── soap/index.html
//! │   └── lip-balm/index.html
//! └── images/                     # copied from the content root
//! ```
//!
//! ## Load More Without a Server
//!
//! Page `N` of a gallery shows the first `N × page_size` items of the
//! filtered catalog: exactly what the presenter displays after `N - 1`
//! clicks. The "Load More" link points at page `N + 1`, so without
//! JavaScript the accumulator is walked one static page at a time.
//!
//! Every page also carries the rest of its category's cards, marked
//! `hidden`. `gallery.js` searches all of them, restarts at page 1 on each
//! new term, and turns "Load More" into an in-place step.
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: Base styles (colors injected from config)
//! - `static/gallery.js`: Live search and paging over the category's cards
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping.

use crate::appointment::SERVICES;
use crate::catalog::LoadedCatalog;
use crate::config::{self, SiteConfig};
use crate::naming;
use crate::presenter::{ALL_CATEGORIES, CatalogView, CategoryFilter, Searchable};
use crate::scan::Manifest;
use crate::types::{CatalogItem, Locations, Market, Page, Product, ProductType, Section, Store};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// What the generate stage wrote.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerateReport {
    /// Output-relative paths of every HTML page, in write order.
    pub pages: Vec<String>,
    /// Number of files copied from the assets directory.
    pub images_copied: usize,
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const GALLERY_JS: &str = include_str!("../static/gallery.js");

/// Shared page context: config, carousel sections, and the final stylesheet.
struct Site<'a> {
    config: &'a SiteConfig,
    sections: &'a [Section],
    css: &'a str,
}

pub fn generate(
    manifest_path: &Path,
    source_dir: &Path,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    let manifest_content = fs::read_to_string(manifest_path)?;
    let manifest: Manifest = serde_json::from_str(&manifest_content)?;

    // Generate CSS with colors from config
    let color_css = config::generate_color_css(&manifest.config.colors);
    let css = format!("{}\n\n{}", color_css, CSS_STATIC);

    fs::create_dir_all(output_dir)?;

    let mut report = GenerateReport::default();

    // Copy images to output
    let assets = source_dir.join(&manifest.config.assets_dir);
    if assets.is_dir() {
        let images_dir = output_dir.join("images");
        fs::create_dir_all(&images_dir)?;
        report.images_copied = copy_dir_recursive(&assets, &images_dir)?;
    } else {
        tracing::warn!(path = %assets.display(), "assets directory not found, no images copied");
    }

    let site = Site {
        config: &manifest.config,
        sections: &manifest.sections,
        css: &css,
    };

    write_page(output_dir, "index.html", render_index(&site), &mut report)?;

    write_gallery(
        &site,
        &JEWELRY,
        &manifest.jewelry,
        manifest.config.gallery.jewelry_page_size,
        output_dir,
        &mut report,
    )?;
    write_gallery(
        &site,
        &SKINCARE,
        &manifest.skincare,
        manifest.config.gallery.skincare_page_size,
        output_dir,
        &mut report,
    )?;

    // Generate about page if present
    if let Some(about) = &manifest.about {
        write_page(
            output_dir,
            "about.html",
            render_about_page(&site, about),
            &mut report,
        )?;
    }

    write_page(
        output_dir,
        "where-to-find.html",
        render_where_to_find(&site, &manifest.locations),
        &mut report,
    )?;
    write_page(
        output_dir,
        "appointment.html",
        render_appointment_page(&site),
        &mut report,
    )?;

    tracing::info!(
        pages = report.pages.len(),
        images = report.images_copied,
        output = %output_dir.display(),
        "site generated"
    );
    Ok(report)
}

fn write_page(
    output_dir: &Path,
    relative: &str,
    markup: Markup,
    report: &mut GenerateReport,
) -> Result<(), GenerateError> {
    let path = output_dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, markup.into_string())?;
    tracing::debug!(page = relative, "generated");
    report.pages.push(relative.to_string());
    Ok(())
}

/// Copy a directory tree, returning the number of files copied.
fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<usize> {
    let mut copied = 0;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copied += copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
            copied += 1;
        }
    }
    Ok(copied)
}

// ============================================================================
// Galleries
// ============================================================================

/// Fixed copy and paths of one gallery view.
struct GalleryView {
    id: &'static str,
    heading: &'static str,
    intro: &'static str,
    /// Plural noun in counts ("Showing 12 of 16 pieces").
    noun: &'static str,
    all_label: &'static str,
}

const JEWELRY: GalleryView = GalleryView {
    id: "jewelry",
    heading: "Wearable Sculptures",
    intro: "Handcrafted earrings, each one a small sculpture shaped by hand.",
    noun: "pieces",
    all_label: "All Pieces",
};

const SKINCARE: GalleryView = GalleryView {
    id: "skincare",
    heading: "Lippie & Lather",
    intro: "Hand-poured soaps and lip balms made from botanical ingredients.",
    noun: "products",
    all_label: "All Products",
};

/// An item that can be rendered as a gallery card.
trait GalleryCard: Searchable {
    /// `index` is the card's position in the filtered list; cards past the
    /// current page are rendered `hidden` for client-side paging.
    fn render_card(&self, index: usize, hidden: bool) -> Markup;

    /// Button label for a category tag.
    fn category_label(tag: &str) -> String {
        tag.to_string()
    }
}

impl GalleryCard for CatalogItem {
    fn render_card(&self, index: usize, hidden: bool) -> Markup {
        html! {
            article.card data-index=(index) data-search=(self.search_text())
                data-category=(self.category()) hidden[hidden] {
                img src=(self.image) alt=(self.title) loading="lazy";
                div.card-body {
                    h3.card-title { (self.title) }
                    p.card-tag { (self.collection) " · " (self.year) }
                    dl.card-details {
                        dt { "Medium" } dd { (self.medium) }
                        dt { "Materials" } dd { (self.materials) }
                        dt { "Dimensions" } dd { (self.dimensions) }
                    }
                    p.card-statement { (self.artist_statement) }
                }
            }
        }
    }
}

impl GalleryCard for Product {
    fn render_card(&self, index: usize, hidden: bool) -> Markup {
        html! {
            article.card data-index=(index) data-search=(self.search_text())
                data-category=(self.category()) hidden[hidden] {
                img src=(self.image) alt=(self.name) loading="lazy";
                div.card-body {
                    h3.card-title { (self.name) }
                    p.card-tag { (self.kind.label()) " · " (self.scent) }
                    @if !self.description.is_empty() {
                        p.card-statement { (self.description) }
                    }
                    @if !self.benefits.is_empty() {
                        p.card-benefits { (self.benefits) }
                    }
                    @if !self.ingredients.is_empty() {
                        p.card-ingredients { "Ingredients: " (self.ingredients.join(", ")) }
                    }
                }
            }
        }
    }

    fn category_label(tag: &str) -> String {
        ProductType::ALL
            .into_iter()
            .find(|t| t.as_str() == tag)
            .map(|t| t.label().to_string())
            .unwrap_or_else(|| tag.to_string())
    }
}

/// Output directory of one category's page chain, relative to the site root.
fn category_dir(view_id: &str, filter: &CategoryFilter) -> String {
    match filter {
        CategoryFilter::All => view_id.to_string(),
        CategoryFilter::Only(tag) => format!("{view_id}/{}", naming::slugify(tag)),
    }
}

fn gallery_page_name(page: usize) -> String {
    if page <= 1 {
        "index.html".to_string()
    } else {
        format!("page-{page}.html")
    }
}

/// Write the page chain of every category of one gallery.
fn write_gallery<T: GalleryCard + Clone>(
    site: &Site,
    view: &GalleryView,
    catalog: &LoadedCatalog<T>,
    page_size: usize,
    output_dir: &Path,
    report: &mut GenerateReport,
) -> Result<(), GenerateError> {
    let mut presenter = CatalogView::new(catalog.items.clone(), page_size);
    let categories = presenter.categories();

    for tag in &categories {
        let filter = CategoryFilter::from_tag(tag);
        presenter.set_category(filter.clone());
        let dir = category_dir(view.id, &filter);

        loop {
            let markup = render_gallery_page(
                site,
                view,
                &presenter,
                &categories,
                catalog.error.as_deref(),
            );
            let relative = format!("{dir}/{}", gallery_page_name(presenter.page()));
            write_page(output_dir, &relative, markup, report)?;
            if !presenter.load_more() {
                break;
            }
        }
    }
    Ok(())
}

fn render_gallery_page<T: GalleryCard>(
    site: &Site,
    view: &GalleryView,
    presenter: &CatalogView<T>,
    categories: &[String],
    error: Option<&str>,
) -> Markup {
    let current = presenter.category();
    let filtered = presenter.filtered();
    let shown = presenter.displayed_count();

    let content = html! {
        main.gallery-page data-view=(view.id) {
            header.gallery-header {
                h1 { (view.heading) }
                p.gallery-intro { (view.intro) }
            }
            @if let Some(message) = error {
                div.notice role="alert" {
                    p { "Failed to load " (view.noun) ". Showing placeholder data." }
                    p.notice-detail { (message) }
                }
            }
            div.gallery-controls {
                input.gallery-search #gallery-search type="search"
                    placeholder={ "Search " (view.noun) }
                    aria-label={ "Search " (view.noun) };
                nav.category-filter {
                    @for tag in categories {
                        @let filter = CategoryFilter::from_tag(tag);
                        @let label = if tag == ALL_CATEGORIES {
                            view.all_label.to_string()
                        } else {
                            T::category_label(tag)
                        };
                        a.category-link.active[&filter == current]
                            href={ "/" (category_dir(view.id, &filter)) "/" } {
                            (label)
                        }
                    }
                }
            }
            p.empty-state hidden[!filtered.is_empty()] { "No " (view.noun) " found." }
            div.card-grid data-page=(presenter.page()) data-page-size=(presenter.page_size()) {
                @for (index, item) in filtered.iter().enumerate() {
                    (item.render_card(index, index >= shown))
                }
            }
            footer.gallery-footer {
                @if presenter.has_more() {
                    a.load-more href=(gallery_page_name(presenter.page() + 1)) {
                        "Load More (" (presenter.remaining_count()) " remaining)"
                    }
                } @else {
                    a.load-more hidden {}
                }
                p.gallery-count data-noun=(view.noun) {
                    "Showing " (presenter.displayed_count()) " of "
                    (presenter.filtered_count()) " " (view.noun)
                }
            }
        }
        script { (PreEscaped(GALLERY_JS)) }
    };

    let title = match current {
        CategoryFilter::All => view.heading.to_string(),
        CategoryFilter::Only(tag) => format!("{} · {}", view.heading, T::category_label(tag)),
    };
    page_document(site, &title, view.id, content)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, body_class: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body class=[body_class] {
                (content)
            }
        }
    }
}

/// Renders the site header: brand link plus one link per section
fn site_header(site: &Site, current: &str) -> Markup {
    html! {
        header.site-header {
            a.brand href="/" { (site.config.site.title) }
            nav.site-nav {
                ul {
                    @for section in site.sections {
                        li.current[section.id == current] {
                            a href={ "/" (section.path) } { (section.title) }
                        }
                    }
                    li.current[current == "appointment"] {
                        a href="/appointment.html" { "Book an Appointment" }
                    }
                }
            }
        }
    }
}

fn site_footer(site: &Site) -> Markup {
    html! {
        footer.site-footer {
            p { (site.config.site.title) " · Handcrafted by " (site.config.site.artist) }
            p.tagline { (site.config.site.tagline) }
        }
    }
}

/// Wraps page content in the document, header, and footer
fn page_document(site: &Site, title: &str, current: &str, content: Markup) -> Markup {
    let full_title = if title == site.config.site.title {
        title.to_string()
    } else {
        format!("{} · {}", title, site.config.site.title)
    };
    base_document(
        &full_title,
        site.css,
        None,
        html! {
            (site_header(site, current))
            (content)
            (site_footer(site))
        },
    )
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the landing page carousel
fn render_index(site: &Site) -> Markup {
    let content = html! {
        main.index-page {
            section.hero {
                h1 { (site.config.site.title) }
                p.tagline { (site.config.site.tagline) }
            }
            div.carousel {
                @for (idx, section) in site.sections.iter().enumerate() {
                    article.carousel-slide id=(section.id) {
                        p.slide-number { (format!("{:02}", idx + 1)) }
                        h2 { a href={ "/" (section.path) } { (section.title) } }
                        p.slide-subtitle { (section.subtitle) }
                        p.slide-description { (section.description) }
                        @if !section.preview_images.is_empty() {
                            div.preview-strip {
                                @for image in &section.preview_images {
                                    img src=(image) alt="" loading="lazy";
                                }
                            }
                        }
                        a.slide-link href={ "/" (section.path) } { "Explore" }
                    }
                }
            }
            nav.carousel-dots {
                @for section in site.sections {
                    a href={ "#" (section.id) } aria-label=(section.title) {}
                }
            }
        }
    };

    page_document(site, &site.config.site.title, "", content)
}

/// Renders the about page from markdown content
fn render_about_page(site: &Site, about: &Page) -> Markup {
    // Convert markdown to HTML
    let parser = Parser::new(&about.body);
    let mut body_html = String::new();
    md_html::push_html(&mut body_html, parser);

    let content = html! {
        main.about-page {
            article.about-content {
                (PreEscaped(body_html))
            }
            p.about-cta {
                a href="/appointment.html" { "Request a commission or consultation" }
            }
        }
    };

    page_document(site, &about.title, "about", content)
}

fn render_market(market: &Market) -> Markup {
    html! {
        article.location-card {
            p.market-status { (market.status.label()) }
            h3 { (market.name) }
            p.location-when { (market.schedule) " · " (market.time) }
            p.location-next { "Next: " (market.next_date) }
            p.location-where { (market.location) ", " (market.address) }
            p { (market.description) }
            @if let Some(phone) = &market.phone {
                p.location-phone { (phone) }
            }
            @if let Some(website) = &market.website {
                a href=(website) target="_blank" rel="noopener" { "Visit website" }
            }
        }
    }
}

fn render_store(store: &Store) -> Markup {
    html! {
        article.location-card {
            p.store-display { (store.display_type) }
            h3 { (store.name) }
            p.location-where { (store.address) }
            p.location-when { (store.hours) }
            p { (store.description) }
            p.location-phone { (store.phone) }
            @if let Some(website) = &store.website {
                a href=(website) target="_blank" rel="noopener" { "Visit website" }
            }
        }
    }
}

/// Renders markets and stores
fn render_where_to_find(site: &Site, locations: &Locations) -> Markup {
    let content = html! {
        main.where-page {
            header.gallery-header {
                h1 { "Where to Find Us" }
                p.gallery-intro { "Farmers markets, seasonal fairs, and shops with a permanent display." }
            }
            @if locations.is_empty() {
                p.empty-state { "New markets are announced soon. Check back shortly." }
            }
            @if !locations.markets.is_empty() {
                section.locations #markets {
                    h2 { "Markets" }
                    div.location-grid {
                        @for market in &locations.markets {
                            (render_market(market))
                        }
                    }
                }
            }
            @if !locations.stores.is_empty() {
                section.locations #stores {
                    h2 { "Shops" }
                    div.location-grid {
                        @for store in &locations.stores {
                            (render_store(store))
                        }
                    }
                }
            }
        }
    };

    page_document(site, "Where to Find Us", "where-to-find", content)
}

/// Renders the appointment request form
fn render_appointment_page(site: &Site) -> Markup {
    let email = &site.config.site.contact_email;
    let content = html! {
        main.appointment-page {
            header.gallery-header {
                h1 { "Book an Appointment" }
                p.gallery-intro {
                    "Custom commissions, repairs, and skincare consultations. "
                    "Requests are answered by email at "
                    a href={ "mailto:" (email) } { (email) } "."
                }
            }
            form.appointment-form action={ "mailto:" (email) } method="post" enctype="text/plain" {
                label { "Name" input type="text" name="name" required; }
                label { "Email" input type="email" name="email" required; }
                label { "Phone" input type="tel" name="phone"; }
                label { "Preferred date" input type="date" name="preferredDate"; }
                label {
                    "Service"
                    select name="service" {
                        option value="" { "Choose a service" }
                        @for service in SERVICES {
                            option value=(service) { (service) }
                        }
                    }
                }
                label { "Message" textarea name="message" rows="5" required {} }
                button type="submit" { "Send Request" }
            }
        }
    };

    page_document(site, "Book an Appointment", "appointment", content)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{placeholder_earrings, placeholder_products};
    use crate::classify::Collection;
    use crate::types::MarketStatus;

    fn test_sections() -> Vec<Section> {
        vec![Section {
            id: "jewelry".to_string(),
            title: "Wearable Sculptures".to_string(),
            subtitle: "Handcrafted Jewelry Collection".to_string(),
            description: "Small sculptures.".to_string(),
            path: "jewelry/".to_string(),
            preview_images: vec!["/images/compressed/a.jpg".to_string()],
        }]
    }

    fn with_site<R>(f: impl FnOnce(&Site) -> R) -> R {
        let config = SiteConfig::default();
        let sections = test_sections();
        let site = Site {
            config: &config,
            sections: &sections,
            css: "",
        };
        f(&site)
    }

    fn piece(n: usize, collection: Collection) -> CatalogItem {
        CatalogItem {
            filename: format!("piece_{n}"),
            title: format!("Piece {n}"),
            medium: "Handcrafted Earrings".to_string(),
            materials: "resin".to_string(),
            dimensions: "Standard".to_string(),
            artist_statement: "Made by hand.".to_string(),
            image: format!("/images/piece_{n}.jpg"),
            collection,
            year: "2024".to_string(),
        }
    }

    fn gallery_html(items: Vec<CatalogItem>, page_size: usize, clicks: usize) -> String {
        let mut presenter = CatalogView::new(items, page_size);
        for _ in 0..clicks {
            presenter.load_more();
        }
        let categories = presenter.categories();
        with_site(|site| {
            render_gallery_page(site, &JEWELRY, &presenter, &categories, None).into_string()
        })
    }

    #[test]
    fn base_document_includes_doctype() {
        let content = html! { p { "test" } };
        let doc = base_document("Test", "body {}", None, content).into_string();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<style>body {}</style>"));
    }

    #[test]
    fn header_marks_current_section() {
        let html = with_site(|site| site_header(site, "jewelry").into_string());
        assert!(html.contains(r#"<li class="current"><a href="/jewelry/">"#));
        assert!(html.contains("/appointment.html"));
    }

    #[test]
    fn gallery_first_page_links_to_next() {
        let items = (0..16).map(|n| piece(n, Collection::Dice)).collect();
        let html = gallery_html(items, 12, 0);
        assert!(html.contains("Load More (4 remaining)"));
        assert!(html.contains(r#"href="page-2.html""#));
        assert!(html.contains("Showing 12 of 16 pieces"));
    }

    #[test]
    fn gallery_renders_later_pages_hidden() {
        let items = (0..16).map(|n| piece(n, Collection::Dice)).collect();
        let html = gallery_html(items, 12, 0);

        assert_eq!(html.matches(r#"<article class="card""#).count(), 16);
        assert_eq!(html.matches(" hidden>").count(), 4 + 1);
        assert!(html.contains(r#"data-page="1" data-page-size="12""#));
        let last = html.find(r#"data-index="15""#).unwrap();
        let card_end = last + html[last..].find('>').unwrap();
        assert!(html[last..card_end].ends_with(" hidden"));
        assert!(html.contains("Piece 15"));
        let first = html.find(r#"data-index="11""#).unwrap();
        let first_end = first + html[first..].find('>').unwrap();
        assert!(!html[first..first_end].contains("hidden"));
    }

    #[test]
    fn gallery_last_page_has_no_load_more() {
        let items = (0..16).map(|n| piece(n, Collection::Dice)).collect();
        let html = gallery_html(items, 12, 1);
        assert!(!html.contains(r#"<a class="load-more" href"#));
        assert!(html.contains(r#"<a class="load-more" hidden></a>"#));
        assert!(html.contains("Showing 16 of 16 pieces"));
        // Only the empty-state and the idle load-more link are hidden
        assert_eq!(html.matches(" hidden>").count(), 2);
    }

    #[test]
    fn gallery_category_links() {
        let items = vec![
            piece(0, Collection::SilverSeries),
            piece(1, Collection::OceanWhispers),
        ];
        let html = gallery_html(items, 12, 0);
        assert!(html.contains(r#"<a class="category-link active" href="/jewelry/">All Pieces</a>"#));
        assert!(html.contains(r#"href="/jewelry/silver-series/""#));
        assert!(html.contains(r#"href="/jewelry/ocean-whispers/""#));
    }

    #[test]
    fn gallery_cards_carry_search_text() {
        let html = gallery_html(vec![piece(7, Collection::Dice)], 12, 0);
        assert!(html.contains("data-search=\"piece 7\nresin\nmade by hand.\""));
        assert!(html.contains(r#"data-category="Dice""#));
    }

    #[test]
    fn gallery_empty_state() {
        let html = gallery_html(Vec::new(), 12, 0);
        assert!(html.contains("No pieces found."));
        assert!(html.contains("Showing 0 of 0 pieces"));
    }

    #[test]
    fn gallery_error_notice_shown_for_placeholder() {
        let presenter = CatalogView::new(placeholder_earrings(), 12);
        let categories = presenter.categories();
        let html = with_site(|site| {
            render_gallery_page(
                site,
                &JEWELRY,
                &presenter,
                &categories,
                Some("failed to read data/earring_attributes.csv"),
            )
            .into_string()
        });
        assert!(html.contains(r#"role="alert""#));
        assert!(html.contains("Failed to load pieces. Showing placeholder data."));
        assert!(html.contains("Cascade of Light"));
    }

    #[test]
    fn product_category_labels() {
        let presenter = CatalogView::new(placeholder_products(), 8);
        let categories = presenter.categories();
        let html = with_site(|site| {
            render_gallery_page(site, &SKINCARE, &presenter, &categories, None).into_string()
        });
        assert!(html.contains(">Soaps</a>"));
        assert!(html.contains(r#"href="/skincare/soap/""#));
        assert!(html.contains("Ingredients: Olive Oil, Coconut Oil"));
        // Ampersands are escaped
        assert!(html.contains("Lavender &amp; Chamomile"));
    }

    #[test]
    fn page_names() {
        assert_eq!(gallery_page_name(1), "index.html");
        assert_eq!(gallery_page_name(3), "page-3.html");
        assert_eq!(category_dir("jewelry", &CategoryFilter::All), "jewelry");
        assert_eq!(
            category_dir(
                "jewelry",
                &CategoryFilter::Only("Beaded Collection".to_string())
            ),
            "jewelry/beaded-collection"
        );
    }

    #[test]
    fn index_renders_sections_and_previews() {
        let html = with_site(|site| render_index(site).into_string());
        assert!(html.contains("Wearable Sculptures"));
        assert!(html.contains(r#"id="jewelry""#));
        assert!(html.contains(r#"src="/images/compressed/a.jpg""#));
        assert!(html.contains("<title>Adorna Design</title>"));
    }

    #[test]
    fn render_about_page_converts_markdown() {
        let about = Page {
            title: "About Me".to_string(),
            slug: "about".to_string(),
            body: "# About Me\n\nThis is **bold** and *italic*.".to_string(),
        };
        let html = with_site(|site| render_about_page(site, &about).into_string());

        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<em>italic</em>"));
        assert!(html.contains("<title>About Me · Adorna Design</title>"));
    }

    #[test]
    fn where_to_find_lists_markets_and_stores() {
        let locations = Locations {
            markets: vec![Market {
                id: "m".to_string(),
                name: "Riverside Artisan Market".to_string(),
                location: "Riverside Park".to_string(),
                address: "456 River Road".to_string(),
                schedule: "First Sunday".to_string(),
                next_date: "February 2".to_string(),
                time: "10-4".to_string(),
                description: "Curated.".to_string(),
                website: None,
                phone: None,
                status: MarketStatus::Regular,
            }],
            stores: Vec::new(),
        };
        let html = with_site(|site| render_where_to_find(site, &locations).into_string());
        assert!(html.contains("Riverside Artisan Market"));
        assert!(html.contains("Monthly"));
        assert!(!html.contains("Shops"));
    }

    #[test]
    fn where_to_find_empty_state() {
        let html =
            with_site(|site| render_where_to_find(site, &Locations::default()).into_string());
        assert!(html.contains("Check back shortly."));
    }

    #[test]
    fn appointment_form_fields() {
        let html = with_site(|site| render_appointment_page(site).into_string());
        assert!(html.contains(r#"action="mailto:hello@adorna.design""#));
        for name in ["name", "email", "phone", "preferredDate", "service", "message"] {
            assert!(html.contains(&format!(r#"name="{name}""#)), "missing {name}");
        }
        assert!(html.contains("Custom Jewelry Commission"));
    }

    #[test]
    fn html_escape_in_maud() {
        let mut item = piece(1, Collection::Dice);
        item.title = "<script>alert('xss')</script>".to_string();
        let html = gallery_html(vec![item], 12, 0);

        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
