use tracing::info;

use crate::{
    catalog::{Catalog, Product},
    error::Result,
    utils::math::vector::ZeroSpVec,
    vectorizer::{serde::TFIDFData, tfidf::{DefaultTFIDFEngine, TFIDFEngine}, TFIDFVectorizer},
};

/// Build the vector space index of `products` with the default engine.
///
/// # Errors
/// * `EmptyCatalog` - `products` is empty
/// * `EmptyVocabulary` - no review text yields a token
/// * `DuplicateProduct` / `InvalidProduct` - a record breaks the data model
pub fn build_index(products: Vec<Product>) -> Result<ProductIndex> {
    ProductIndex::build(Catalog::new(products)?)
}

/// Catalog plus its fitted TF-IDF model and one unit vector per entry.
/// Read-only after `build`; share it behind `Arc` to serve concurrent queries.
#[derive(Debug, Clone)]
pub struct ProductIndex<E = DefaultTFIDFEngine>
where
    E: TFIDFEngine,
{
    catalog: Catalog,
    vectorizer: TFIDFVectorizer<E>,
    /// `documents[i]` belongs to `catalog.get(i)`
    documents: Vec<ZeroSpVec<f64>>,
}

impl<E> ProductIndex<E>
where
    E: TFIDFEngine,
{
    /// Fit the model on the aggregated review text of every catalog entry
    pub fn build(catalog: Catalog) -> Result<Self> {
        let (vectorizer, documents) = TFIDFVectorizer::<E>::fit(&catalog.texts())?;
        info!(
            documents = documents.len(),
            vocabulary = vectorizer.vocab_size(),
            "product index built"
        );
        Ok(Self::from_parts(catalog, vectorizer, documents))
    }

    pub(crate) fn from_parts(
        catalog: Catalog,
        vectorizer: TFIDFVectorizer<E>,
        documents: Vec<ZeroSpVec<f64>>,
    ) -> Self {
        debug_assert_eq!(catalog.len(), documents.len());
        Self { catalog, vectorizer, documents }
    }

    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[inline]
    pub fn vectorizer(&self) -> &TFIDFVectorizer<E> {
        &self.vectorizer
    }

    #[inline]
    pub fn documents(&self) -> &[ZeroSpVec<f64>] {
        &self.documents
    }

    #[inline]
    pub fn document(&self, idx: usize) -> Option<&ZeroSpVec<f64>> {
        self.documents.get(idx)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Project query text into the index's vector space
    #[inline]
    pub fn project(&self, text: &str) -> ZeroSpVec<f64> {
        self.vectorizer.transform(text)
    }

    /// Serializable snapshot of the model and document vectors
    pub fn to_data(&self) -> TFIDFData {
        TFIDFData::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog::seed::seed_products, error::Error};

    #[test]
    fn seed_index_has_one_vector_per_product() {
        let index = build_index(seed_products()).unwrap();
        assert_eq!(index.len(), 5);
        assert_eq!(index.vectorizer().doc_num(), 5);
        for doc in index.documents() {
            assert_eq!(doc.len(), index.vectorizer().vocab_size());
            assert!((doc.norm() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn build_is_deterministic() {
        let a = build_index(seed_products()).unwrap().to_data().to_cbor().unwrap();
        let b = build_index(seed_products()).unwrap().to_data().to_cbor().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_product_list_fails() {
        assert!(matches!(build_index(vec![]), Err(Error::EmptyCatalog)));
    }

    #[test]
    fn reviews_without_tokens_fail() {
        let mut products = seed_products();
        for p in products.iter_mut() {
            p.reviews = vec!["!".to_string(), String::new()];
        }
        assert!(matches!(build_index(products), Err(Error::EmptyVocabulary)));
    }

    #[test]
    fn index_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ProductIndex>();
    }
}
