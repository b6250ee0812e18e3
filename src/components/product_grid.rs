//! Product grid and loading overlay.
//!
//! The grid re-renders wholesale from [`GridView`] on every load or filter;
//! there is no per-card diffing. The entrance reveal only toggles a class.

use leptos::prelude::*;

use crate::components::product_card::ProductCard;
use crate::components::search_bar::run_search;
use crate::state::catalog::{CatalogState, GridView, LoadStatus};
use crate::state::search::{SearchAction, SearchState};

#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();

    view! {
        <div
            id="loadingOverlay"
            class="loading-overlay"
            class:hidden=move || catalog.with(|c| c.status != LoadStatus::Loading)
        >
            <div class="loading-spinner" aria-hidden="true"></div>
            <p>"Loading products..."</p>
        </div>
    }
}

#[component]
pub fn ProductGrid() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let search = expect_context::<RwSignal<SearchState>>();

    let key = Memo::new(move |_| catalog.with(CatalogState::grid_key));
    let revealed = Memo::new(move |_| catalog.with(|c| c.revealed));

    let grid = move || match key.get().1 {
        GridView::Loading => ().into_any(),
        GridView::Failed => view! {
            <div class="grid-message">
                <h3>"Unable to load products"</h3>
                <p>"Please try refreshing the page."</p>
            </div>
        }
        .into_any(),
        GridView::NoMatches(query) => view! {
            <div class="grid-message">
                <h3>"No products found"</h3>
                <p>{format!("No products match your search for \"{query}\"")}</p>
                <button
                    class="btn grid-message__reset"
                    on:click=move |_| run_search(catalog, search, SearchAction::ShowAll)
                >
                    "Show All Products"
                </button>
            </div>
        }
        .into_any(),
        GridView::Products(products) => products
            .into_iter()
            .map(|product| view! { <ProductCard product=product/> })
            .collect_view()
            .into_any(),
    };

    view! {
        <main id="productsGrid" class="products-grid" class:loaded=move || revealed.get()>
            {grid}
        </main>
    }
}
