pub mod filter;
pub mod query;
pub mod scoring;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    catalog::Product,
    error::Result,
    evaluate::{
        filter::{AllOf, MinRating, ProductFilter},
        query::{validate_filters, CategoryFilter, RecommendRequest},
    },
    index::ProductIndex,
    vectorizer::tfidf::TFIDFEngine,
};

/// One recommended product with its similarity to the query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub product_id: u32,
    pub product_name: String,
    pub category: String,
    pub price: u64,
    pub rating: f64,
    /// cosine similarity, 0.0 ~ 1.0
    pub similarity: f64,
}

impl ResultRow {
    fn new(product: &Product, similarity: f64) -> Self {
        Self {
            product_id: product.product_id,
            product_name: product.product_name.clone(),
            category: product.category.clone(),
            price: product.price,
            rating: product.rating,
            similarity,
        }
    }
}

impl<E> ProductIndex<E>
where
    E: TFIDFEngine,
{
    /// Rank catalog products against `query_text`.
    ///
    /// Scores every product by cosine similarity, keeps those matching
    /// `category` with `rating >= min_rating`, sorts by similarity
    /// (descending, ties in catalog order) and returns at most `top_k` rows.
    /// Empty text is allowed here and scores 0 everywhere; use
    /// `recommend_request` to reject blank input.
    ///
    /// # Errors
    /// * `InvalidFilter` - `min_rating` outside [0, 5] or `top_k == 0`
    pub fn recommend(
        &self,
        query_text: &str,
        category: &CategoryFilter,
        min_rating: f64,
        top_k: usize,
    ) -> Result<Vec<ResultRow>> {
        validate_filters(min_rating, top_k)?;

        let query = self.project(query_text);
        let rating = MinRating(min_rating);
        let filter = AllOf(vec![category as &dyn ProductFilter, &rating]);

        let mut hits = self.scoring_cosine(&query);
        hits.retain_keys(|&idx| {
            self.catalog()
                .get(idx)
                .map_or(false, |entry| filter.matches(entry.product()))
        });
        let survivors = hits.len();
        hits.sort_by_score().truncate(top_k);

        debug!(
            query_terms = query.nnz(),
            category = %category,
            min_rating,
            survivors,
            returned = hits.len(),
            "recommend"
        );

        Ok(hits
            .list
            .into_iter()
            .filter_map(|(idx, score)| {
                self.catalog()
                    .get(idx)
                    .map(|entry| ResultRow::new(entry.product(), score))
            })
            .collect())
    }

    /// Validate a shell request (blank text included) and run it.
    pub fn recommend_request(&self, request: &RecommendRequest) -> Result<Vec<ResultRow>> {
        request.validate()?;
        self.recommend(
            &request.text,
            &request.category,
            request.min_rating,
            request.top_k,
        )
    }
}
