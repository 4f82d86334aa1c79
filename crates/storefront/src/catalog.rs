//! The static product catalog.
//!
//! Products are a read-only in-memory list; there is no product database.
//! The catalog also implements the filtering and sorting the shop pages
//! expose: category filter, free-text search and the five sort modes.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use hear_hut_core::{Price, ProductId, Rating};

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Headphones,
    Earbuds,
    Speakers,
}

/// A purchasable catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub brand: String,
    pub name: String,
    pub price: Price,
    #[serde(rename = "originalPrice")]
    pub original_price: Price,
    pub rating: Rating,
    pub reviews: u32,
    pub category: Category,
}

impl Product {
    /// Discount relative to the pre-sale price, as a whole percentage.
    /// Zero when the product is not discounted.
    #[must_use]
    pub fn discount_percent(&self) -> u8 {
        let original = self.original_price.amount;
        let current = self.price.amount;
        if original <= current || original.is_zero() {
            return 0;
        }

        let percent = (original - current) / original * Decimal::from(100);
        percent.round().to_u8().unwrap_or(0)
    }
}

/// How a product listing is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Catalog order.
    #[default]
    Featured,
    PriceLowToHigh,
    PriceHighToLow,
    /// Highest rating first.
    Rating,
    /// Most recently added to the catalog first.
    Newest,
}

/// Filter and sort settings for a product listing.
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    /// Restrict to one category.
    pub category: Option<Category>,
    /// Case-insensitive match against product name or brand.
    pub search: Option<String>,
    pub sort: SortBy,
}

/// The read-only product list.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// The HearHut lineup.
    #[must_use]
    pub fn hearhut() -> Self {
        let products = vec![
            product("hyperx-cloud-iii", "HyperX", "HyperX Cloud III", 6999, 8999, 5.0, 342, Category::Headphones),
            product("oppo-enco-air3-pro", "OPPO", "OPPO Enco Air3 Pro", 5500, 6500, 5.0, 156, Category::Earbuds),
            product("oneplus-nord-buds-3-pro", "OnePlus", "OnePlus Nord Buds 3 Pro", 2599, 3999, 5.0, 89, Category::Earbuds),
            product("cmf-nothing-earbuds", "Nothing", "CMF by Nothing Earbuds", 3990, 4990, 4.0, 234, Category::Earbuds),
            product("soundcore-anker-q20i", "Soundcore", "Soundcore by Anker Q20i", 3692, 4999, 4.0, 567, Category::Headphones),
            product("mivi-superpods-immersio", "Mivi", "Mivi SuperPods Immersio", 1999, 2999, 4.0, 123, Category::Earbuds),
            product("apple-airpods-4", "Apple", "Apple AirPods 4", 11499, 12999, 5.0, 892, Category::Earbuds),
            product("marshall-minor-iv", "Marshall", "Marshall Minor IV", 11999, 13999, 5.0, 445, Category::Earbuds),
            product("jbl-flip-6", "JBL", "JBL Flip 6", 8999, 10999, 5.0, 678, Category::Speakers),
            product("sony-srs-xb43", "Sony", "Sony SRS-XB43", 15999, 18999, 5.0, 456, Category::Speakers),
            product("bose-soundlink-revolve-plus", "Bose", "Bose SoundLink Revolve+", 22999, 25999, 5.0, 789, Category::Speakers),
        ];

        Self { products }
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Number of products in a category.
    #[must_use]
    pub fn count_in(&self, category: Category) -> usize {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .count()
    }

    /// Filtered, sorted product listing.
    #[must_use]
    pub fn search(&self, query: &CatalogQuery) -> Vec<&Product> {
        let needle = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let mut matches: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| query.category.is_none_or(|c| p.category == c))
            .filter(|p| {
                needle.as_deref().is_none_or(|needle| {
                    p.name.to_lowercase().contains(needle)
                        || p.brand.to_lowercase().contains(needle)
                })
            })
            .collect();

        match query.sort {
            SortBy::Featured => {}
            SortBy::PriceLowToHigh => matches.sort_by(|a, b| a.price.amount.cmp(&b.price.amount)),
            SortBy::PriceHighToLow => matches.sort_by(|a, b| b.price.amount.cmp(&a.price.amount)),
            SortBy::Rating => matches.sort_by(|a, b| b.rating.cmp(&a.rating)),
            SortBy::Newest => matches.reverse(),
        }

        matches
    }
}

fn product(
    id: &str,
    brand: &str,
    name: &str,
    price: i64,
    original_price: i64,
    rating: f32,
    reviews: u32,
    category: Category,
) -> Product {
    Product {
        id: ProductId::from(id),
        brand: brand.to_owned(),
        name: name.to_owned(),
        price: Price::from_rupees(price),
        original_price: Price::from_rupees(original_price),
        rating: Rating::from_value(rating),
        reviews,
        category,
    }
}
