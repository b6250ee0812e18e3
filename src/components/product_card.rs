//! Product card: image with placeholder fallback, tag badge, outbound link.
//!
//! DESIGN
//! ======
//! Each card tracks its own image state. A failed load swaps in an inline SVG
//! placeholder; hovering a card that shows the placeholder retries the real
//! image once more.

#[cfg(test)]
#[path = "product_card_test.rs"]
mod product_card_test;

use leptos::prelude::*;

use crate::state::catalog::Product;

/// Inline "Shoe Image" placeholder shown when a product image fails to load.
pub const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iMjgwIiBoZWlnaHQ9IjI0MCIgeG1sbnM9Imh0dHA6Ly93d3cudzMub3JnLzIwMDAvc3ZnIj48cmVjdCB3aWR0aD0iMjgwIiBoZWlnaHQ9IjI0MCIgZmlsbD0iI2Y4ZmFmYyIvPjx0ZXh0IHg9IjUwJSIgeT0iNTAlIiBmb250LWZhbWlseT0iSW50ZXIsIHNhbnMtc2VyaWYiIGZvbnQtc2l6ZT0iMTQiIGZpbGw9IiM2NDc0OGIiIHRleHQtYW5jaG9yPSJtaWRkbGUiIGR5PSIuM2VtIj5TaG9lIEltYWdlPC90ZXh0Pjwvc3ZnPg==";

/// Which source a card image currently points at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardImage {
    #[default]
    Actual,
    Placeholder,
}

impl CardImage {
    pub fn src(self, image: &str) -> &str {
        match self {
            Self::Actual => image,
            Self::Placeholder => PLACEHOLDER_IMAGE,
        }
    }

    /// Image failed to load. Returns whether the source changed.
    pub fn on_error(&mut self) -> bool {
        let changed = *self == Self::Actual;
        *self = Self::Placeholder;
        changed
    }

    /// Pointer entered the card. Returns whether a re-fetch was started.
    pub fn on_hover(&mut self) -> bool {
        let retry = *self == Self::Placeholder;
        *self = Self::Actual;
        retry
    }
}

pub fn view_label(name: &str) -> String {
    format!("View {name} product page")
}

/// Click-tracking stub; there is no analytics backend.
pub fn track_product_click(id: u32) {
    log::info!("product {id} clicked");
}

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let Product { id, name, url, image, tag } = product;
    let state = RwSignal::new(CardImage::default());
    let label = view_label(&name);

    view! {
        <article
            class="product-card"
            data-product-id=id.to_string()
            on:mouseenter=move |_| {
                state.maybe_update(CardImage::on_hover);
            }
        >
            <div class="product-image-container">
                <img
                    src=move || state.get().src(&image).to_owned()
                    alt=name.clone()
                    class="product-image"
                    loading="lazy"
                    on:error=move |_| {
                        state.maybe_update(CardImage::on_error);
                    }
                />
                <span class="product-tag">{tag}</span>
            </div>
            <div class="product-info">
                <h2 class="product-name">{name}</h2>
                <a
                    href=url
                    target="_blank"
                    rel="noopener noreferrer"
                    class="product-button"
                    aria-label=label
                    on:click=move |_| track_product_click(id)
                >
                    "View Product"
                </a>
            </div>
        </article>
    }
}
