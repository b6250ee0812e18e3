//! Catalog data source.
//!
//! The product list and hero slides are compiled into the binary from
//! `assets/catalog.json`. Loading is still asynchronous: it waits a fixed
//! delay so the page shows its loading indicator, then parses and validates
//! the seed.
//!
//! ERROR HANDLING
//! ==============
//! Any parse or validation problem surfaces as a [`CatalogError`]. The page
//! shows a static failure message and does not retry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::HashSet;

use serde::Deserialize;

use crate::state::catalog::Product;

const EMBEDDED_CATALOG: &str = include_str!("../../assets/catalog.json");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("malformed catalog data: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("catalog has no products")]
    Empty,
    #[error("duplicate product id {0}")]
    DuplicateId(u32),
    #[error("catalog has no hero images")]
    NoHeroImages,
}

/// Everything the page needs at startup.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CatalogSeed {
    pub products: Vec<Product>,
    pub hero_images: Vec<String>,
}

/// Parse and validate a catalog document.
pub fn parse_catalog(raw: &str) -> Result<CatalogSeed, CatalogError> {
    let seed: CatalogSeed = serde_json::from_str(raw)?;
    if seed.products.is_empty() {
        return Err(CatalogError::Empty);
    }
    let mut seen = HashSet::new();
    for product in &seed.products {
        if !seen.insert(product.id) {
            return Err(CatalogError::DuplicateId(product.id));
        }
    }
    if seed.hero_images.is_empty() {
        return Err(CatalogError::NoHeroImages);
    }
    Ok(seed)
}

pub fn parse_embedded() -> Result<CatalogSeed, CatalogError> {
    parse_catalog(EMBEDDED_CATALOG)
}

/// Hero slide list, available synchronously so the slider renders before the grid loads.
pub fn hero_images() -> Vec<String> {
    match parse_embedded() {
        Ok(seed) => seed.hero_images,
        Err(e) => {
            log::error!("catalog: hero images unavailable: {e}");
            Vec::new()
        }
    }
}

/// Load the catalog after `delay_ms`, as if fetched.
pub async fn load_catalog(delay_ms: u32) -> Result<CatalogSeed, CatalogError> {
    #[cfg(feature = "csr")]
    {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(delay_ms))).await;
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = delay_ms;
    }
    parse_embedded()
}
