//! Catalog page: header with search and theme toggle, hero slider, product grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page is the whole app. It kicks off the simulated catalog load on mount
//! and reveals the grid shortly after the first render.

use leptos::prelude::*;

use crate::components::hero_slider::HeroSlider;
use crate::components::product_grid::{LoadingOverlay, ProductGrid};
use crate::components::search_bar::SearchBar;
use crate::components::theme_toggle::ThemeToggle;
use crate::config::CatalogConfig;
#[cfg(feature = "csr")]
use crate::net::catalog::{CatalogError, CatalogSeed, load_catalog};
use crate::net::catalog::hero_images;
use crate::state::catalog::CatalogState;
use crate::util::timers::SharedTimers;
#[cfg(feature = "csr")]
use crate::util::timers::TimerKind;

/// Record a finished load and schedule the grid entrance animation.
#[cfg(feature = "csr")]
fn finish_load(
    catalog: RwSignal<CatalogState>,
    timers: SharedTimers,
    reveal_ms: u32,
    result: Result<CatalogSeed, CatalogError>,
) {
    match result {
        Ok(seed) => {
            log::info!("catalog: loaded {} products", seed.products.len());
            catalog.update(|c| c.finish_loading(seed.products));
            timers.update_value(|t| {
                t.schedule_timeout(TimerKind::GridReveal, reveal_ms, move || {
                    catalog.update(CatalogState::reveal);
                });
            });
        }
        Err(e) => {
            log::error!("catalog: error loading products: {e}");
            catalog.update(CatalogState::fail_loading);
        }
    }
}

#[component]
pub fn CatalogPage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let timers = expect_context::<SharedTimers>();
    let config = expect_context::<CatalogConfig>();

    #[cfg(feature = "csr")]
    {
        let delay_ms = config.load_delay_ms;
        let reveal_ms = config.grid_reveal_ms;
        leptos::task::spawn_local(async move {
            let result = load_catalog(delay_ms).await;
            finish_load(catalog, timers, reveal_ms, result);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (catalog, timers, &config);
    }

    view! {
        <div class="catalog-page">
            <header class="catalog-page__header">
                <h1 class="catalog-page__title">"5PS Shoes"</h1>
                <SearchBar/>
                <ThemeToggle/>
            </header>
            <HeroSlider images=hero_images()/>
            <section class="catalog-page__products">
                <LoadingOverlay/>
                <ProductGrid/>
            </section>
        </div>
    }
}
