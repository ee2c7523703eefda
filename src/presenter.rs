//! Gallery presenter: search, category filter, and "load more" pagination.
//!
//! One [`CatalogView`] backs each product view. It owns the base catalog and
//! derives everything else from three inputs:
//!
//! ```text
//! items ──┬─ search term (case-insensitive substring) ─┐
//!         └─ category filter ("all" or one tag) ───────┴─→ filtered ─→ first page × page_size
//! ```
//!
//! Pagination grows a visible prefix rather than replacing pages. Changing
//! the items, the search term, or the category recomputes the filtered set
//! and resets the view to page 1.
//!
//! The presenter is generic over [`Searchable`], implemented here for jewelry
//! pieces (searched by title, materials and statement, grouped by collection)
//! and skincare products (searched by name, scent and ingredients, grouped by
//! type).

use crate::classify::Collection;
use crate::types::{CatalogItem, Product};
use std::fmt;
use std::str::FromStr;

/// Label of the catch-all category.
pub const ALL_CATEGORIES: &str = "all";

/// An item the presenter can search and group.
pub trait Searchable {
    /// Text fields the search term is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// Category tag used by the category filter.
    fn category(&self) -> &str;

    /// Whether any search field contains `term`, ignoring case. An empty term
    /// matches everything; other terms match as typed, spaces included.
    fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        term.is_empty()
            || self
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&term))
    }

    /// All search fields, lower-cased, one per line. Rendered into cards so
    /// client-side search uses the same text; a search box cannot hold a
    /// newline, so a term never matches across two fields.
    fn search_text(&self) -> String {
        self.search_fields().join("\n").to_lowercase()
    }
}

impl Searchable for CatalogItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.materials.as_str(),
            self.artist_statement.as_str(),
        ]
    }

    fn category(&self) -> &str {
        self.collection.label()
    }
}

impl Searchable for Product {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.scent.as_str()];
        fields.extend(self.ingredients.iter().map(String::as_str));
        fields
    }

    fn category(&self) -> &str {
        self.kind.as_str()
    }
}

/// Category selection: everything, or exactly one tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// `"all"` (or blank) selects everything; any other tag selects itself.
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim();
        if tag.is_empty() || tag == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(tag.to_string())
        }
    }

    /// Resolve a jewelry collection name typed in any case to its label, so
    /// `silver series` selects "Silver Series". Unknown tags pass through.
    pub fn for_collections(self) -> Self {
        match self {
            CategoryFilter::Only(tag) => match Collection::from_label(&tag) {
                Some(collection) => CategoryFilter::Only(collection.label().to_string()),
                None => CategoryFilter::Only(tag),
            },
            CategoryFilter::All => CategoryFilter::All,
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(tag) => tag == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_tag(s))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(ALL_CATEGORIES),
            CategoryFilter::Only(tag) => f.write_str(tag),
        }
    }
}

/// Presenter state for one view.
#[derive(Debug, Clone)]
pub struct CatalogView<T> {
    items: Vec<T>,
    /// Indices into `items` that pass the current search and category.
    filtered: Vec<usize>,
    search: String,
    category: CategoryFilter,
    page: usize,
    page_size: usize,
}

impl<T: Searchable> CatalogView<T> {
    /// A view on page 1 with no search and all categories. A zero page size
    /// is treated as 1.
    pub fn new(items: Vec<T>, page_size: usize) -> Self {
        let mut view = Self {
            items,
            filtered: Vec::new(),
            search: String::new(),
            category: CategoryFilter::All,
            page: 1,
            page_size: page_size.max(1),
        };
        view.recompute();
        view
    }

    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.recompute();
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.recompute();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.filtered = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| {
                self.category.matches(item.category()) && item.matches_search(&self.search)
            })
            .map(|(i, _)| i)
            .collect();
        self.page = 1;
    }

    /// Reveal the next page. Returns `false` (and changes nothing) when every
    /// filtered item is already displayed.
    pub fn load_more(&mut self) -> bool {
        if !self.has_more() {
            return false;
        }
        self.page += 1;
        true
    }

    /// The first `page * page_size` filtered items, in catalog order.
    pub fn displayed(&self) -> Vec<&T> {
        self.filtered
            .iter()
            .take(self.displayed_count())
            .map(|&i| &self.items[i])
            .collect()
    }

    /// All items passing the current search and category.
    pub fn filtered(&self) -> Vec<&T> {
        self.filtered.iter().map(|&i| &self.items[i]).collect()
    }

    pub fn displayed_count(&self) -> usize {
        self.filtered.len().min(self.page * self.page_size)
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn total_pages(&self) -> usize {
        self.filtered.len().div_ceil(self.page_size)
    }

    pub fn has_more(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn remaining_count(&self) -> usize {
        self.filtered_count() - self.displayed_count()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// `"all"` followed by each distinct category of the base catalog, in
    /// first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_CATEGORIES.to_string()];
        for item in &self.items {
            let category = item.category();
            if !categories.iter().any(|c| c == category) {
                categories.push(category.to_string());
            }
        }
        categories
    }
}
