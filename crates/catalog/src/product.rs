use serde::{Deserialize, Serialize};

use crate::query::{ListQuery, QueryResult, run_query};

/// A single storefront product record.
///
/// Records are statically seeded and read-only for the life of the process.
/// `category` is an open string enum (`food`, `treats`, `supplies`, ...);
/// the optional attributes are category-specific pass-through fields the
/// query engine never interprets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub brand: String,
    pub category: String,
    /// Whole currency units, no minor unit.
    pub price: u32,
    /// Sort key only; no bounds enforced.
    pub rating: f32,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Product {
    /// Bare record with no optional attributes set.
    pub fn new(
        id: u32,
        category: impl Into<String>,
        name: impl Into<String>,
        brand: impl Into<String>,
        price: u32,
        rating: f32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            brand: brand.into(),
            category: category.into(),
            price,
            rating,
            description: description.into(),
            image: None,
            link: None,
            weight: None,
            ingredients: None,
            age_range: None,
            size: None,
            material: None,
            color: None,
        }
    }

    /// Case-insensitive substring match against name, brand, or description.
    /// `needle` must already be lowercased.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.brand.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// The full in-memory product collection.
///
/// Constructed once at startup; there is no write path, so all reads operate
/// on the same immutable snapshot.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// `id` must be unique across `products`.
    pub fn new(products: Vec<Product>) -> Self {
        debug_assert!(
            {
                let mut ids: Vec<u32> = products.iter().map(|p| p.id).collect();
                ids.sort_unstable();
                ids.windows(2).all(|w| w[0] != w[1])
            },
            "catalog ids must be unique"
        );
        Self { products }
    }

    /// The built-in storefront catalog.
    pub fn seed() -> Self {
        Self::new(crate::seed::seed_products())
    }

    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// First record with a matching id; a miss is a distinct not-found
    /// outcome for callers, never an empty list.
    pub fn get(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Exact, case-sensitive category match. Full set, no pagination.
    pub fn by_category(&self, category: &str) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect()
    }

    /// Search-only form of the pipeline: full matching set.
    pub fn search(&self, term: &str) -> Vec<Product> {
        let needle = term.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.matches_search(&needle))
            .cloned()
            .collect()
    }

    /// Every distinct brand, first-occurrence order preserved.
    pub fn brands(&self) -> Vec<String> {
        let mut brands: Vec<String> = Vec::new();
        for p in &self.products {
            if !brands.iter().any(|b| b == &p.brand) {
                brands.push(p.brand.clone());
            }
        }
        brands
    }

    /// Products with `min <= price <= max`, both bounds inclusive.
    pub fn price_range(&self, min: i64, max: i64) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| i64::from(p.price) >= min && i64::from(p.price) <= max)
            .cloned()
            .collect()
    }

    /// Full filter/search/sort/paginate pipeline.
    pub fn query(&self, query: &ListQuery) -> QueryResult {
        run_query(&self.products, query)
    }
}
