/// This crate is a content-based product recommender built on a TF-IDF Vectorizer.
pub mod catalog;
pub mod config;
pub mod error;
pub mod evaluate;
pub mod index;
pub mod render;
pub mod utils;
pub mod vectorizer;

/// Product Index
/// The top-level struct of this crate.
/// It owns the product catalog, the fitted TF-IDF model and one unit vector
/// per product, and answers recommendation queries against them.
///
/// Internally, it holds:
/// - The catalog (products plus their aggregated review text)
/// - The vocabulary and IDF table (`TFIDFVectorizer`)
/// - A sparse TF-IDF vector for each product
///
/// `ProductIndex<E>` has one generic parameter:
/// - `E`: TF-IDF calculation engine type (e.g., DefaultTFIDFEngine)
///
/// The index never changes after it is built. Rebuilding means fitting the
/// whole catalog again.
pub use index::{build_index, ProductIndex};

/// Product and Catalog
/// `Product` is an immutable record loaded at start-up.
/// `Catalog` is the ordered product list; it derives the aggregated review
/// text of every entry and rejects empty lists, duplicate ids and ratings
/// outside [0, 5].
pub use catalog::{Catalog, CatalogEntry, Product};

/// TF-IDF Vectorizer
/// The fitted model: vocabulary plus IDF table.
/// `fit` learns it once from a document collection; `transform` projects new
/// text into the same space as a unit vector.
pub use vectorizer::TFIDFVectorizer;

/// TF-IDF Vectorizer Data Structure for Serialization
/// Snapshot of a built index without the catalog.
/// Convert it back with `into_product_index` by passing the same catalog.
///
/// # Serialization
/// Supported, CBOR helpers included.
pub use vectorizer::serde::TFIDFData;

/// Token Frequency structure
/// Counts token occurrences within one document.
pub use vectorizer::token::TokenFrequency;

/// TF IDF Calculation Engine Trait
/// Defines how term frequency and inverse document frequency are computed.
/// - `DefaultTFIDFEngine`: raw count × smoothed IDF
/// - `SublinearTFIDFEngine`: (1 + ln count) × smoothed IDF
pub use vectorizer::tfidf::{DefaultTFIDFEngine, SublinearTFIDFEngine, TFIDFEngine};

/// Query side
/// - `RecommendRequest`: text plus filters as collected by a shell
/// - `CategoryFilter`: one category or all of them
/// - `ResultRow`: one recommended product with its similarity
/// - `Hits`: scored keys with stable descending sort
pub use evaluate::{query::{CategoryFilter, RecommendRequest}, scoring::Hits, ResultRow};

/// Shell defaults
pub use config::RecommendConfig;

/// Error type
pub use error::{Error, Result};
