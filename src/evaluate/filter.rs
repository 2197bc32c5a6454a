use crate::catalog::Product;
use crate::evaluate::query::CategoryFilter;

/// Predicate over products, applied after scoring
pub trait ProductFilter {
    fn matches(&self, product: &Product) -> bool;
}

impl ProductFilter for CategoryFilter {
    fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == *category,
        }
    }
}

/// Keeps products rated at least this much
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinRating(pub f64);

impl ProductFilter for MinRating {
    fn matches(&self, product: &Product) -> bool {
        product.rating >= self.0
    }
}

/// Every filter must match
pub struct AllOf<'a>(pub Vec<&'a dyn ProductFilter>);

impl ProductFilter for AllOf<'_> {
    fn matches(&self, product: &Product) -> bool {
        self.0.iter().all(|f| f.matches(product))
    }
}
