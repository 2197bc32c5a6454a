pub mod seed;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A product and the reviews written about it.
/// Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: u32,
    pub product_name: String,
    pub category: String,
    /// price in whole currency units
    pub price: u64,
    /// average rating, 0.0 ~ 5.0
    pub rating: f64,
    pub reviews: Vec<String>,
}

impl Product {
    /// All reviews joined with a single space, in their original order
    pub fn aggregated_text(&self) -> String {
        self.reviews.join(" ")
    }

    fn validate(&self) -> Result<()> {
        if !self.rating.is_finite() || !(0.0..=5.0).contains(&self.rating) {
            return Err(Error::InvalidProduct {
                id: self.product_id,
                reason: format!("rating {} is outside [0, 5]", self.rating),
            });
        }
        Ok(())
    }
}

/// Catalog entry: the product plus its derived review text.
/// `aggregated_text` is only ever computed from `product.reviews`.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    product: Product,
    aggregated_text: String,
}

impl CatalogEntry {
    fn new(product: Product) -> Self {
        let aggregated_text = product.aggregated_text();
        Self { product, aggregated_text }
    }

    #[inline]
    pub fn product(&self) -> &Product {
        &self.product
    }

    #[inline]
    pub fn aggregated_text(&self) -> &str {
        &self.aggregated_text
    }
}

/// Ordered, fixed collection of products.
/// Entry order is the order the products were given in and never changes.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog, rejecting an empty product list, duplicate ids
    /// and ratings outside [0, 5].
    pub fn new(products: Vec<Product>) -> Result<Self> {
        if products.is_empty() {
            return Err(Error::EmptyCatalog);
        }
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.product_id) {
                return Err(Error::DuplicateProduct(product.product_id));
            }
            product.validate()?;
        }
        Ok(Self {
            entries: products.into_iter().map(CatalogEntry::new).collect(),
        })
    }

    /// Catalog of the built-in seed products
    pub fn seed() -> Result<Self> {
        Self::new(seed::seed_products())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed catalog
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<&CatalogEntry> {
        self.entries.get(idx)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    pub fn find(&self, product_id: u32) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.product.product_id == product_id)
    }

    /// Aggregated text of every entry, in catalog order
    pub fn texts(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.aggregated_text()).collect()
    }

    /// Distinct categories, sorted
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = self
            .entries
            .iter()
            .map(|e| e.product.category.as_str())
            .collect();
        categories.sort_unstable();
        categories.dedup();
        categories
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
