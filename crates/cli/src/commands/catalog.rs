//! Catalog listing.

use hear_hut_storefront::catalog::{Catalog, CatalogQuery, Category, SortBy};

/// Print the filtered, sorted catalog.
pub fn list(category: Option<Category>, search: Option<String>, sort: SortBy) {
    let catalog = Catalog::hearhut();
    let query = CatalogQuery {
        category,
        search,
        sort,
    };

    let products = catalog.search(&query);
    if products.is_empty() {
        println!("No products match.");
        return;
    }

    for product in products {
        let discount = product.discount_percent();
        let discount_note = if discount > 0 {
            format!(" ({discount}% off, was {})", product.original_price.display())
        } else {
            String::new()
        };

        println!(
            "{:<28} {:<10} {:>8}{}  {} ({} reviews)",
            product.id,
            product.brand,
            product.price.display(),
            discount_note,
            product.rating,
            product.reviews,
        );
    }
}
