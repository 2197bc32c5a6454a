use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::vectorizer::analyzer::is_blank;

pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 5.0;

/// Labels that mean "every category".
/// `Semua` is the Indonesian storefront label.
pub const ALL_CATEGORY_LABELS: [&str; 2] = ["all", "Semua"];

/// Category restriction of a query
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// no restriction
    #[default]
    All,
    /// exact, case-sensitive category name
    Only(String),
}

impl CategoryFilter {
    /// Parse a user supplied label. Sentinel labels map to `All`,
    /// anything else is taken as a literal category name.
    pub fn parse(label: &str) -> Self {
        if ALL_CATEGORY_LABELS.contains(&label) {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(label.to_string())
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(ALL_CATEGORY_LABELS[0]),
            CategoryFilter::Only(name) => f.write_str(name),
        }
    }
}

impl From<Option<&str>> for CategoryFilter {
    fn from(label: Option<&str>) -> Self {
        label.map_or(CategoryFilter::All, CategoryFilter::parse)
    }
}

/// One recommendation request as the shell collects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub text: String,
    pub category: CategoryFilter,
    pub min_rating: f64,
    pub top_k: usize,
}

impl RecommendRequest {
    /// Request with no filtering and up to 5 results
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: CategoryFilter::All,
            min_rating: MIN_RATING,
            top_k: 5,
        }
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = min_rating;
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Full check done before any scoring: blank text first, then filters.
    pub fn validate(&self) -> Result<()> {
        if is_blank(&self.text) {
            return Err(Error::BlankQuery);
        }
        validate_filters(self.min_rating, self.top_k)
    }
}

/// `min_rating` must lie in [0, 5] and `top_k` must be positive
pub fn validate_filters(min_rating: f64, top_k: usize) -> Result<()> {
    if min_rating.is_nan() || !(MIN_RATING..=MAX_RATING).contains(&min_rating) {
        return Err(Error::invalid_filter(format!(
            "min_rating must be in [{MIN_RATING}, {MAX_RATING}], got {min_rating}"
        )));
    }
    if top_k == 0 {
        return Err(Error::invalid_filter("top_k must be at least 1"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_parse_to_all() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("Semua"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("Minuman"),
            CategoryFilter::Only("Minuman".to_string())
        );
        // sentinels are case-sensitive like category names
        assert_eq!(CategoryFilter::parse("ALL"), CategoryFilter::Only("ALL".to_string()));
        assert_eq!(CategoryFilter::from(None), CategoryFilter::All);
    }

    #[test]
    fn display_round_trips_through_parse() {
        for filter in [CategoryFilter::All, CategoryFilter::Only("Makanan Ringan".into())] {
            assert_eq!(CategoryFilter::parse(&filter.to_string()), filter);
        }
    }

    #[test]
    fn blank_text_is_rejected_first() {
        let req = RecommendRequest::new("  \n").with_top_k(0);
        assert!(matches!(req.validate(), Err(Error::BlankQuery)));
        assert!(matches!(RecommendRequest::new("").validate(), Err(Error::BlankQuery)));
    }

    #[test]
    fn filters_out_of_range() {
        assert!(validate_filters(0.0, 1).is_ok());
        assert!(validate_filters(5.0, 5).is_ok());
        assert!(matches!(validate_filters(-0.1, 3), Err(Error::InvalidFilter { .. })));
        assert!(matches!(validate_filters(5.1, 3), Err(Error::InvalidFilter { .. })));
        assert!(matches!(validate_filters(f64::NAN, 3), Err(Error::InvalidFilter { .. })));
        assert!(matches!(validate_filters(4.0, 0), Err(Error::InvalidFilter { .. })));
    }
}
