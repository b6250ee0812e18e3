//! Product catalog state and filtering.
//!
//! DESIGN
//! ======
//! The full product list is seeded once and never mutated. Filtering always
//! produces a fresh ordered subset, and the grid re-renders from that subset
//! wholesale rather than diffing against the previous result.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde::Deserialize;

use crate::state::search::{SearchAction, normalize_query};

/// A static catalog entry with display metadata and an outbound link.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub url: String,
    pub image: String,
    pub tag: String,
}

impl Product {
    /// Whether `needle` (already lower-cased) occurs in the name or tag.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.tag.to_lowercase().contains(needle)
    }
}

/// Lifecycle of the simulated catalog load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// What the product grid should show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridView {
    Loading,
    Failed,
    Products(Vec<Product>),
    /// The query matched nothing; carries the normalized query for the message.
    NoMatches(String),
}

/// Catalog page state: seeded products plus the active filter.
#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    pub products: Vec<Product>,
    pub status: LoadStatus,
    /// Normalized active query; empty means unfiltered.
    pub query: String,
    /// Set shortly after the first successful render to trigger the entrance animation.
    pub revealed: bool,
    /// Bumped on every filter, including a repeat of the current query, so the
    /// grid rebuilds even when the subset is unchanged.
    pub render_seq: u64,
}

impl CatalogState {
    pub fn finish_loading(&mut self, products: Vec<Product>) {
        self.products = products;
        self.status = LoadStatus::Ready;
        self.render_seq += 1;
    }

    pub fn fail_loading(&mut self) {
        self.products.clear();
        self.status = LoadStatus::Failed;
        self.revealed = true;
    }

    /// Start the grid entrance animation. Leaves the rendered cards alone.
    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    /// Apply a raw user query and request a re-render.
    pub fn apply_filter(&mut self, raw: &str) {
        self.query = normalize_query(raw);
        self.render_seq += 1;
    }

    /// Drop the filter and show every product again.
    pub fn show_all(&mut self) {
        self.apply_filter("");
    }

    /// Apply a search trigger's outcome. Returns whether the grid re-renders.
    pub fn apply_search(&mut self, action: &SearchAction) -> bool {
        match action {
            SearchAction::Filter(query) => self.apply_filter(query),
            SearchAction::ShowAll => self.show_all(),
            SearchAction::Ignore => return false,
        }
        true
    }

    pub fn visible(&self) -> Vec<Product> {
        filter_products(&self.products, &self.query)
    }

    pub fn grid_view(&self) -> GridView {
        match self.status {
            LoadStatus::Loading => GridView::Loading,
            LoadStatus::Failed => GridView::Failed,
            LoadStatus::Ready => {
                let visible = self.visible();
                if visible.is_empty() && !self.query.is_empty() {
                    GridView::NoMatches(self.query.clone())
                } else {
                    GridView::Products(visible)
                }
            }
        }
    }

    /// Everything the grid body renders from. Excludes `revealed`.
    pub fn grid_key(&self) -> (u64, GridView) {
        (self.render_seq, self.grid_view())
    }
}

/// Case-insensitive substring filter over name and tag, preserving order.
///
/// The query is trimmed and lower-cased here, so callers may pass raw input.
pub fn filter_products(products: &[Product], query: &str) -> Vec<Product> {
    let needle = normalize_query(query);
    if needle.is_empty() {
        return products.to_vec();
    }
    products.iter().filter(|p| p.matches(&needle)).cloned().collect()
}
